use std::env;

use url::Url;

use crate::{DEV_SERVER_URL_ENV, IS_TEST_ENV, NODE_ENV_ENV};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

/// Where the main window loads its front-end from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    DevServer(Url),
    Packaged,
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub run_mode: RunMode,
    pub dev_server_url: Option<Url>,
    pub is_test: bool,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_mode = resolve_run_mode(lookup(NODE_ENV_ENV).as_deref(), cfg!(debug_assertions));
        let dev_server_url = lookup(DEV_SERVER_URL_ENV).and_then(|raw| parse_dev_server_url(&raw));
        let is_test = lookup(IS_TEST_ENV).is_some_and(|value| !value.is_empty());

        Self {
            run_mode,
            dev_server_url,
            is_test,
        }
    }

    pub fn is_development(&self) -> bool {
        self.run_mode == RunMode::Development
    }

    pub fn enforces_single_instance(&self) -> bool {
        self.run_mode == RunMode::Production
    }

    pub fn content_source(&self) -> ContentSource {
        match &self.dev_server_url {
            Some(url) => ContentSource::DevServer(url.clone()),
            None => ContentSource::Packaged,
        }
    }

    /// Devtools open on the window only when it is backed by the dev server.
    pub fn opens_devtools(&self) -> bool {
        self.dev_server_url.is_some() && !self.is_test
    }

    pub fn prepares_devtools(&self) -> bool {
        self.is_development() && !self.is_test
    }

    pub fn listens_for_graceful_exit(&self) -> bool {
        self.is_development()
    }
}

fn resolve_run_mode(node_env: Option<&str>, debug_build: bool) -> RunMode {
    match node_env.map(str::trim) {
        Some("production") => RunMode::Production,
        Some(_) => RunMode::Development,
        None if debug_build => RunMode::Development,
        None => RunMode::Production,
    }
}

fn parse_dev_server_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            tracing::warn!(
                scheme = url.scheme(),
                "ignoring {DEV_SERVER_URL_ENV}: only http/https dev servers are supported"
            );
            None
        }
        Err(error) => {
            tracing::warn!("ignoring invalid {DEV_SERVER_URL_ENV} '{trimmed}': {error}");
            None
        }
    }
}
