//! Owns the single main window and tray icon and reacts to their events.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    shell_backend::{
        ShellBackend, ShellTray, ShellWindow, TrayMenuEntry, TraySpec, WindowId, WindowSpec,
    },
    shell_config::ShellConfig,
    shell_locale::ShellTexts,
    tray_actions::{TrayMenuAction, TRAY_MENU_ACTIONS},
    ShellError, APP_NAME, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_WIDTH, TRAY_ID,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Absent,
    Created,
    Shown,
    Hidden,
    Minimized,
    Destroyed,
}

/// What happened to a window after the user asked to close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseRequestOutcome {
    HiddenToTray,
    /// No tray could be built, so hiding would strand the window.
    Minimized,
    Allowed,
}

impl CloseRequestOutcome {
    pub fn prevents_close(self) -> bool {
        !matches!(self, CloseRequestOutcome::Allowed)
    }
}

struct ShellState<W, T> {
    window: Option<(WindowId, W)>,
    window_phase: WindowPhase,
    tray: Option<T>,
    next_window_id: u64,
    exit_requested: bool,
}

impl<W, T> ShellState<W, T> {
    fn set_window_phase(&mut self, phase: WindowPhase) {
        if self.window_phase != phase {
            tracing::debug!(from = ?self.window_phase, to = ?phase, "main window phase changed");
            self.window_phase = phase;
        }
    }
}

pub struct ShellController<B: ShellBackend> {
    backend: B,
    config: ShellConfig,
    texts: ShellTexts,
    state: Mutex<ShellState<B::Window, B::Tray>>,
}

impl<B: ShellBackend> ShellController<B> {
    pub fn new(backend: B, config: ShellConfig, texts: ShellTexts) -> Self {
        Self {
            backend,
            config,
            texts,
            state: Mutex::new(ShellState {
                window: None,
                window_phase: WindowPhase::Absent,
                tray: None,
                next_window_id: 1,
                exit_requested: false,
            }),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ShellState<B::Window, B::Tray>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_phase_if_current(&self, id: WindowId, phase: WindowPhase) {
        let mut state = self.lock_state();
        if matches!(&state.window, Some((current, _)) if *current == id) {
            state.set_window_phase(phase);
        }
    }

    pub fn ensure_window(&self) -> Result<B::Window, ShellError> {
        self.ensure_window_with_id().map(|(_, window)| window)
    }

    fn ensure_window_with_id(&self) -> Result<(WindowId, B::Window), ShellError> {
        let mut state = self.lock_state();
        if let Some((id, window)) = &state.window {
            return Ok((*id, window.clone()));
        }
        if state.exit_requested {
            return Err(ShellError::WindowCreate(
                "application is shutting down".to_string(),
            ));
        }

        let id = WindowId(state.next_window_id);
        state.next_window_id += 1;
        let spec = WindowSpec {
            id,
            label: MAIN_WINDOW_LABEL,
            title: APP_NAME,
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            content: self.config.content_source(),
        };
        let window = self.backend.create_window(&spec)?;
        state.window = Some((id, window.clone()));
        state.set_window_phase(WindowPhase::Created);
        drop(state);

        tracing::info!(window_id = id.0, content = ?spec.content, "main window created");
        if self.config.opens_devtools() {
            window.open_devtools();
        }
        Ok((id, window))
    }

    pub fn ensure_tray(&self) -> Result<B::Tray, ShellError> {
        let mut state = self.lock_state();
        if let Some(tray) = &state.tray {
            return Ok(tray.clone());
        }

        let spec = TraySpec {
            id: TRAY_ID,
            tooltip: self.texts.tray_tooltip,
            entries: TRAY_MENU_ACTIONS
                .iter()
                .map(|action| TrayMenuEntry {
                    action: *action,
                    label: self.tray_label(*action),
                })
                .collect(),
        };
        let tray = self.backend.create_tray(&spec)?;
        state.tray = Some(tray.clone());
        drop(state);

        tracing::info!("tray icon created");
        Ok(tray)
    }

    fn tray_label(&self, action: TrayMenuAction) -> &'static str {
        match action {
            TrayMenuAction::ShowWindow => self.texts.tray_show,
            TrayMenuAction::Quit => self.texts.tray_quit,
        }
    }

    pub fn show_window(&self) -> Result<(), ShellError> {
        let (id, window) = self.ensure_window_with_id()?;
        window.show()?;
        self.set_phase_if_current(id, WindowPhase::Shown);
        Ok(())
    }

    pub fn handle_ready(&self) {
        if self.config.prepares_devtools() {
            if let Err(error) = self.backend.prepare_devtools() {
                tracing::error!("devtools failed to install: {error}");
            }
        }

        if let Err(error) = self.ensure_tray() {
            tracing::warn!("starting without tray icon: {error}");
        }
        if let Err(error) = self.ensure_window() {
            tracing::warn!("starting without main window: {error}");
        }
    }

    pub fn handle_activate(&self) {
        if let Err(error) = self.ensure_window() {
            tracing::warn!("failed to ensure main window on activate: {error}");
        }
    }

    /// Arguments from the second launch are only logged.
    pub fn handle_second_instance(&self, args: &[String], cwd: &str) {
        tracing::debug!(?args, cwd, "second instance launch forwarded");

        let (id, window) = match self.ensure_window_with_id() {
            Ok(found) => found,
            Err(error) => {
                tracing::warn!("failed to ensure main window for second instance: {error}");
                return;
            }
        };
        for result in [window.show(), window.unminimize(), window.set_focus()] {
            if let Err(error) = result {
                tracing::warn!("failed to restore main window for second instance: {error}");
            }
        }
        self.set_phase_if_current(id, WindowPhase::Shown);
    }

    pub fn handle_close_requested(&self, id: WindowId) -> CloseRequestOutcome {
        let window = {
            let state = self.lock_state();
            if state.exit_requested {
                return CloseRequestOutcome::Allowed;
            }
            let current = match &state.window {
                Some((current, window)) if *current == id => window.clone(),
                _ => return CloseRequestOutcome::Allowed,
            };
            current
        };

        let tray = match self.ensure_tray() {
            Ok(tray) => tray,
            Err(error) => {
                tracing::warn!("tray unavailable, minimizing main window instead: {error}");
                if let Err(error) = window.minimize() {
                    tracing::warn!("{error}");
                }
                self.set_phase_if_current(id, WindowPhase::Minimized);
                return CloseRequestOutcome::Minimized;
            }
        };

        if let Err(error) = window.hide() {
            tracing::warn!("{error}");
        }
        self.set_phase_if_current(id, WindowPhase::Hidden);
        if let Err(error) =
            tray.display_balloon(self.texts.hidden_to_tray_title, self.texts.hidden_to_tray_body)
        {
            tracing::warn!("{error}");
        }
        tracing::info!(window_id = id.0, "main window hidden to tray");
        CloseRequestOutcome::HiddenToTray
    }

    pub fn handle_window_destroyed(&self, id: WindowId) {
        let mut state = self.lock_state();
        if matches!(&state.window, Some((current, _)) if *current == id) {
            state.window = None;
            state.set_window_phase(WindowPhase::Destroyed);
            tracing::info!(window_id = id.0, "main window destroyed");
        }
    }

    pub fn handle_tray_action(&self, action: TrayMenuAction) {
        match action {
            TrayMenuAction::ShowWindow => {
                if let Err(error) = self.show_window() {
                    tracing::warn!("tray show failed: {error}");
                }
            }
            TrayMenuAction::Quit => {
                tracing::info!("tray quit requested");
                self.quit();
            }
        }
    }

    pub fn handle_tray_double_click(&self) {
        if let Err(error) = self.show_window() {
            tracing::warn!("tray double-click show failed: {error}");
        }
    }

    /// Returns whether the process should exit now that no window is left.
    pub fn handle_all_windows_closed(&self, keep_running_without_windows: bool) -> bool {
        let mut state = self.lock_state();
        if state.exit_requested {
            return true;
        }
        if keep_running_without_windows {
            return false;
        }
        state.exit_requested = true;
        true
    }

    pub fn quit(&self) {
        let window = {
            let mut state = self.lock_state();
            if state.exit_requested {
                tracing::debug!("quit ignored: exit already requested");
                return;
            }
            state.exit_requested = true;
            let window = state.window.take();
            if window.is_some() {
                state.set_window_phase(WindowPhase::Destroyed);
            }
            window
        };

        if let Some((id, window)) = window {
            if let Err(error) = window.destroy() {
                tracing::warn!(window_id = id.0, "{error}");
            }
        }
        tracing::info!("exiting desktop process");
        self.backend.exit();
    }
}

#[cfg(test)]
impl<B: ShellBackend> ShellController<B> {
    fn window_phase(&self) -> WindowPhase {
        self.lock_state().window_phase
    }

    fn current_window_id(&self) -> Option<WindowId> {
        self.lock_state().window.as_ref().map(|(id, _)| *id)
    }

    fn has_tray(&self) -> bool {
        self.lock_state().tray.is_some()
    }

    fn exit_requested(&self) -> bool {
        self.lock_state().exit_requested
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, AtomicU32, Ordering},
        Arc, Mutex,
    };

    use super::*;
    use crate::shell_config::{ContentSource, RunMode};
    use crate::shell_locale::shell_texts_for_locale;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateWindow(u64),
        Show(u64),
        Hide(u64),
        Minimize(u64),
        Unminimize(u64),
        Focus(u64),
        OpenDevtools(u64),
        Destroy(u64),
        CreateTray(Vec<&'static str>),
        Balloon(String, String),
        PrepareDevtools,
        Exit,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<Call>>,
        tray_failures_left: AtomicU32,
        window_failures_left: AtomicU32,
        devtools_fails: AtomicBool,
    }

    impl Recorder {
        fn push(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
            self.calls().iter().filter(|call| predicate(call)).count()
        }
    }

    #[derive(Clone)]
    struct MockWindow {
        id: u64,
        recorder: Arc<Recorder>,
    }

    impl ShellWindow for MockWindow {
        fn show(&self) -> Result<(), ShellError> {
            self.recorder.push(Call::Show(self.id));
            Ok(())
        }

        fn hide(&self) -> Result<(), ShellError> {
            self.recorder.push(Call::Hide(self.id));
            Ok(())
        }

        fn minimize(&self) -> Result<(), ShellError> {
            self.recorder.push(Call::Minimize(self.id));
            Ok(())
        }

        fn unminimize(&self) -> Result<(), ShellError> {
            self.recorder.push(Call::Unminimize(self.id));
            Ok(())
        }

        fn set_focus(&self) -> Result<(), ShellError> {
            self.recorder.push(Call::Focus(self.id));
            Ok(())
        }

        fn open_devtools(&self) {
            self.recorder.push(Call::OpenDevtools(self.id));
        }

        fn destroy(&self) -> Result<(), ShellError> {
            self.recorder.push(Call::Destroy(self.id));
            Ok(())
        }
    }

    #[derive(Clone)]
    struct MockTray {
        recorder: Arc<Recorder>,
    }

    impl ShellTray for MockTray {
        fn display_balloon(&self, title: &str, body: &str) -> Result<(), ShellError> {
            self.recorder
                .push(Call::Balloon(title.to_string(), body.to_string()));
            Ok(())
        }
    }

    struct MockBackend {
        recorder: Arc<Recorder>,
    }

    impl ShellBackend for MockBackend {
        type Window = MockWindow;
        type Tray = MockTray;

        fn create_window(&self, spec: &WindowSpec) -> Result<MockWindow, ShellError> {
            assert_eq!(spec.width, 800.0);
            assert_eq!(spec.height, 600.0);
            let left = self.recorder.window_failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.recorder
                    .window_failures_left
                    .store(left - 1, Ordering::SeqCst);
                return Err(ShellError::WindowCreate("webview runtime missing".to_string()));
            }
            self.recorder.push(Call::CreateWindow(spec.id.0));
            Ok(MockWindow {
                id: spec.id.0,
                recorder: Arc::clone(&self.recorder),
            })
        }

        fn create_tray(&self, spec: &TraySpec) -> Result<MockTray, ShellError> {
            let left = self.recorder.tray_failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.recorder
                    .tray_failures_left
                    .store(left - 1, Ordering::SeqCst);
                return Err(ShellError::TrayCreate("no notification area".to_string()));
            }
            self.recorder.push(Call::CreateTray(
                spec.entries.iter().map(|entry| entry.label).collect(),
            ));
            Ok(MockTray {
                recorder: Arc::clone(&self.recorder),
            })
        }

        fn prepare_devtools(&self) -> Result<(), ShellError> {
            self.recorder.push(Call::PrepareDevtools);
            if self.recorder.devtools_fails.load(Ordering::SeqCst) {
                return Err(ShellError::Devtools("extension download failed".to_string()));
            }
            Ok(())
        }

        fn exit(&self) {
            self.recorder.push(Call::Exit);
        }
    }

    fn production_config() -> ShellConfig {
        ShellConfig {
            run_mode: RunMode::Production,
            dev_server_url: None,
            is_test: false,
        }
    }

    fn development_config() -> ShellConfig {
        ShellConfig {
            run_mode: RunMode::Development,
            dev_server_url: Some(url::Url::parse("http://localhost:8080/").unwrap()),
            is_test: false,
        }
    }

    fn controller_with(config: ShellConfig) -> (ShellController<MockBackend>, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let backend = MockBackend {
            recorder: Arc::clone(&recorder),
        };
        (
            ShellController::new(backend, config, shell_texts_for_locale("en-US")),
            recorder,
        )
    }

    #[test]
    fn ensure_window_returns_same_window_until_closed() {
        let (controller, recorder) = controller_with(production_config());

        let first = controller.ensure_window().unwrap();
        let second = controller.ensure_window().unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(recorder.count(|call| matches!(call, Call::CreateWindow(_))), 1);
        assert_eq!(controller.window_phase(), WindowPhase::Created);
    }

    #[test]
    fn closed_event_lets_next_ensure_window_build_a_new_window() {
        let (controller, recorder) = controller_with(production_config());

        let first = controller.ensure_window().unwrap();
        controller.handle_window_destroyed(WindowId(first.id));
        assert_eq!(controller.current_window_id(), None);
        assert_eq!(controller.window_phase(), WindowPhase::Destroyed);

        let second = controller.ensure_window().unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(recorder.count(|call| matches!(call, Call::CreateWindow(_))), 2);
    }

    #[test]
    fn stale_closed_event_keeps_current_window() {
        let (controller, _recorder) = controller_with(production_config());

        let window = controller.ensure_window().unwrap();
        controller.handle_window_destroyed(WindowId(window.id + 40));

        assert_eq!(controller.current_window_id(), Some(WindowId(window.id)));
    }

    #[test]
    fn close_request_hides_window_and_shows_one_balloon() {
        let (controller, recorder) = controller_with(production_config());
        let window = controller.ensure_window().unwrap();

        let outcome = controller.handle_close_requested(WindowId(window.id));

        assert_eq!(outcome, CloseRequestOutcome::HiddenToTray);
        assert!(outcome.prevents_close());
        assert_eq!(controller.window_phase(), WindowPhase::Hidden);
        assert_eq!(recorder.count(|call| matches!(call, Call::Destroy(_))), 0);
        assert_eq!(recorder.count(|call| *call == Call::Hide(window.id)), 1);
        assert_eq!(
            recorder.count(|call| *call
                == Call::Balloon("NukeBatchRender".to_string(), "Hidden to tray".to_string())),
            1
        );
    }

    #[test]
    fn each_close_request_shows_exactly_one_balloon() {
        let (controller, recorder) = controller_with(production_config());
        let window = controller.ensure_window().unwrap();

        for _ in 0..3 {
            controller.handle_close_requested(WindowId(window.id));
            controller.show_window().unwrap();
        }

        assert_eq!(recorder.count(|call| matches!(call, Call::Balloon(..))), 3);
        assert_eq!(recorder.count(|call| matches!(call, Call::CreateTray(_))), 1);
        assert_eq!(controller.window_phase(), WindowPhase::Shown);
    }

    #[test]
    fn close_request_without_tray_minimizes_instead_of_hiding() {
        let (controller, recorder) = controller_with(production_config());
        recorder.tray_failures_left.store(1, Ordering::SeqCst);
        let window = controller.ensure_window().unwrap();

        let outcome = controller.handle_close_requested(WindowId(window.id));

        assert_eq!(outcome, CloseRequestOutcome::Minimized);
        assert_eq!(controller.window_phase(), WindowPhase::Minimized);
        assert_eq!(recorder.count(|call| matches!(call, Call::Hide(_))), 0);
        assert_eq!(recorder.count(|call| matches!(call, Call::Balloon(..))), 0);

        // The next close retries the tray.
        let outcome = controller.handle_close_requested(WindowId(window.id));
        assert_eq!(outcome, CloseRequestOutcome::HiddenToTray);
        assert!(controller.has_tray());
    }

    #[test]
    fn ensure_tray_is_idempotent() {
        let (controller, recorder) = controller_with(production_config());

        controller.ensure_tray().unwrap();
        controller.ensure_tray().unwrap();

        assert_eq!(
            recorder.calls(),
            vec![Call::CreateTray(vec!["Show", "Quit"])]
        );
    }

    #[test]
    fn quit_destroys_window_and_exits_once() {
        let (controller, recorder) = controller_with(production_config());
        let window = controller.ensure_window().unwrap();
        controller.handle_close_requested(WindowId(window.id));
        controller.handle_tray_double_click();
        controller.handle_close_requested(WindowId(window.id));

        controller.handle_tray_action(TrayMenuAction::Quit);
        controller.handle_tray_action(TrayMenuAction::Quit);
        controller.quit();

        assert_eq!(recorder.count(|call| *call == Call::Destroy(window.id)), 1);
        assert_eq!(recorder.count(|call| *call == Call::Exit), 1);
        assert_eq!(controller.window_phase(), WindowPhase::Destroyed);
        assert!(controller.exit_requested());
    }

    #[test]
    fn quit_without_window_still_exits() {
        let (controller, recorder) = controller_with(production_config());

        controller.quit();

        assert_eq!(recorder.calls(), vec![Call::Exit]);
        assert_eq!(controller.window_phase(), WindowPhase::Absent);
    }

    #[test]
    fn close_request_after_quit_is_allowed() {
        let (controller, _recorder) = controller_with(production_config());
        let window = controller.ensure_window().unwrap();
        controller.quit();

        let outcome = controller.handle_close_requested(WindowId(window.id));

        assert_eq!(outcome, CloseRequestOutcome::Allowed);
        assert!(controller.ensure_window().is_err());
    }

    #[test]
    fn fresh_controller_creates_nothing_until_ready() {
        let (controller, recorder) = controller_with(production_config());

        assert!(recorder.calls().is_empty());
        assert_eq!(controller.window_phase(), WindowPhase::Absent);
        assert!(!controller.has_tray());
    }

    #[test]
    fn ready_builds_tray_before_window_in_production() {
        let (controller, recorder) = controller_with(production_config());

        controller.handle_ready();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::CreateTray(vec!["Show", "Quit"]),
                Call::CreateWindow(1)
            ]
        );
    }

    #[test]
    fn ready_in_development_prepares_and_opens_devtools() {
        let (controller, recorder) = controller_with(development_config());
        recorder.devtools_fails.store(true, Ordering::SeqCst);

        controller.handle_ready();

        let calls = recorder.calls();
        assert_eq!(calls[0], Call::PrepareDevtools);
        assert!(calls.contains(&Call::OpenDevtools(1)));
        assert_eq!(controller.window_phase(), WindowPhase::Created);
        assert_eq!(
            development_config().content_source(),
            ContentSource::DevServer(url::Url::parse("http://localhost:8080/").unwrap())
        );
    }

    #[test]
    fn ready_under_test_skips_devtools() {
        let mut config = development_config();
        config.is_test = true;
        let (controller, recorder) = controller_with(config);

        controller.handle_ready();

        assert_eq!(recorder.count(|call| *call == Call::PrepareDevtools), 0);
        assert_eq!(recorder.count(|call| matches!(call, Call::OpenDevtools(_))), 0);
    }

    #[test]
    fn ready_keeps_running_when_tray_cannot_be_built() {
        let (controller, recorder) = controller_with(production_config());
        recorder.tray_failures_left.store(1, Ordering::SeqCst);

        controller.handle_ready();

        assert!(!controller.has_tray());
        assert_eq!(controller.current_window_id(), Some(WindowId(1)));
    }

    #[test]
    fn tray_show_rebuilds_window_after_startup_failure() {
        let (controller, recorder) = controller_with(production_config());
        recorder.window_failures_left.store(1, Ordering::SeqCst);

        controller.handle_ready();

        assert!(controller.has_tray());
        assert_eq!(controller.current_window_id(), None);
        assert_eq!(controller.window_phase(), WindowPhase::Absent);

        controller.handle_tray_action(TrayMenuAction::ShowWindow);

        assert_eq!(controller.current_window_id(), Some(WindowId(2)));
        assert_eq!(controller.window_phase(), WindowPhase::Shown);
        assert!(recorder.calls().contains(&Call::Show(2)));
    }

    #[test]
    fn tray_show_entry_shows_hidden_window() {
        let (controller, recorder) = controller_with(production_config());
        controller.handle_ready();
        controller.handle_close_requested(WindowId(1));

        controller.handle_tray_action(TrayMenuAction::ShowWindow);

        assert_eq!(controller.window_phase(), WindowPhase::Shown);
        assert_eq!(recorder.count(|call| matches!(call, Call::CreateWindow(_))), 1);
        assert_eq!(recorder.calls().last(), Some(&Call::Show(1)));
    }

    #[test]
    fn second_instance_restores_and_focuses_window() {
        let (controller, recorder) = controller_with(production_config());
        controller.handle_ready();
        controller.handle_close_requested(WindowId(1));

        controller.handle_second_instance(&["nuke-batch-render".to_string()], "/tmp");

        let calls = recorder.calls();
        let tail = &calls[calls.len() - 3..];
        assert_eq!(tail, &[Call::Show(1), Call::Unminimize(1), Call::Focus(1)]);
        assert_eq!(controller.window_phase(), WindowPhase::Shown);
        assert_eq!(recorder.count(|call| matches!(call, Call::CreateWindow(_))), 1);
    }

    #[test]
    fn activate_recreates_window_after_it_was_destroyed() {
        let (controller, recorder) = controller_with(production_config());
        controller.handle_ready();
        controller.handle_window_destroyed(WindowId(1));

        controller.handle_activate();

        assert_eq!(controller.current_window_id(), Some(WindowId(2)));
        assert_eq!(recorder.count(|call| matches!(call, Call::CreateWindow(_))), 2);
    }

    #[test]
    fn all_windows_closed_exits_except_when_platform_keeps_running() {
        let (controller, _recorder) = controller_with(production_config());
        assert!(!controller.handle_all_windows_closed(true));
        assert!(!controller.exit_requested());

        assert!(controller.handle_all_windows_closed(false));
        assert!(controller.exit_requested());
    }

    #[test]
    fn all_windows_closed_after_quit_never_blocks_exit() {
        let (controller, recorder) = controller_with(production_config());
        controller.handle_ready();
        controller.quit();

        assert!(controller.handle_all_windows_closed(true));
        assert_eq!(recorder.count(|call| *call == Call::Exit), 1);
    }

    #[test]
    fn hide_and_restore_scenario_ends_with_single_exit() {
        let (controller, recorder) = controller_with(production_config());

        controller.handle_ready();
        assert!(controller.has_tray());
        let id = controller.current_window_id().unwrap();

        assert_eq!(
            controller.handle_close_requested(id),
            CloseRequestOutcome::HiddenToTray
        );
        assert_eq!(controller.window_phase(), WindowPhase::Hidden);

        controller.handle_tray_double_click();
        assert_eq!(controller.window_phase(), WindowPhase::Shown);
        assert_eq!(controller.current_window_id(), Some(id));

        controller.handle_tray_action(TrayMenuAction::Quit);
        controller.handle_window_destroyed(id);

        assert_eq!(controller.window_phase(), WindowPhase::Destroyed);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::CreateTray(vec!["Show", "Quit"]),
                Call::CreateWindow(1),
                Call::Hide(1),
                Call::Balloon("NukeBatchRender".to_string(), "Hidden to tray".to_string()),
                Call::Show(1),
                Call::Destroy(1),
                Call::Exit,
            ]
        );
    }
}
