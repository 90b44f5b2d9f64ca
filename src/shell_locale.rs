use std::env;

use crate::LOCALE_ENV;

#[derive(Debug, Clone, Copy)]
pub struct ShellTexts {
    pub tray_tooltip: &'static str,
    pub tray_show: &'static str,
    pub tray_quit: &'static str,
    pub hidden_to_tray_title: &'static str,
    pub hidden_to_tray_body: &'static str,
}

pub fn shell_texts_for_locale(locale: &str) -> ShellTexts {
    if locale == "en-US" {
        return ShellTexts {
            tray_tooltip: "NukeBatchRender",
            tray_show: "Show",
            tray_quit: "Quit",
            hidden_to_tray_title: "NukeBatchRender",
            hidden_to_tray_body: "Hidden to tray",
        };
    }

    ShellTexts {
        tray_tooltip: "NukeBatchRender",
        tray_show: "显示",
        tray_quit: "退出",
        hidden_to_tray_title: "NukeBatchRender",
        hidden_to_tray_body: "已隐藏至托盘",
    }
}

pub fn resolve_shell_locale(default_shell_locale: &'static str) -> &'static str {
    resolve_shell_locale_with(default_shell_locale, |key| env::var(key).ok())
}

fn resolve_shell_locale_with<F>(default_shell_locale: &'static str, lookup: F) -> &'static str
where
    F: Fn(&str) -> Option<String>,
{
    for env_key in [LOCALE_ENV, "LC_ALL", "LANG"] {
        if let Some(locale) = lookup(env_key).as_deref().and_then(normalize_shell_locale) {
            return locale;
        }
    }

    default_shell_locale
}

pub(crate) fn normalize_shell_locale(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw == "zh-CN" {
        return Some("zh-CN");
    }
    if raw == "en-US" {
        return Some("en-US");
    }

    let lowered = raw.to_ascii_lowercase();
    if lowered.starts_with("zh") {
        return Some("zh-CN");
    }
    if lowered.starts_with("en") {
        return Some("en-US");
    }
    None
}
