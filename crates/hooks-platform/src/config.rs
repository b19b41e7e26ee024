use std::env::VarError;

pub const ENV_TITLE: &str = "HOOKS_TITLE";
pub const ENV_INSPECTOR: &str = "HOOKS_INSPECTOR";

pub const DEFAULT_TITLE: &str = "Hooks Counter";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// Written to the title sink at mount, before any effect runs.
    pub initial_title: Option<String>,
    /// Log the HUD line after every frame.
    pub inspector: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            initial_title: Some(DEFAULT_TITLE.to_string()),
            inspector: false,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| read_var(key, std::env::var(key)))
    }

    /// `HOOKS_TITLE` set to an empty string disables the initial title.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(title) = lookup(ENV_TITLE) {
            cfg.initial_title = (!title.is_empty()).then_some(title);
        }
        if let Some(raw) = lookup(ENV_INSPECTOR) {
            cfg.inspector = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "" | "0" | "false" | "no" | "off" => false,
                other => {
                    log::warn!("{ENV_INSPECTOR}={other:?} not understood; inspector stays off");
                    false
                }
            };
        }
        cfg
    }
}

fn read_var(key: &str, value: Result<String, VarError>) -> Option<String> {
    match value {
        Ok(v) => Some(v),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            log::warn!("{key}={raw:?} is not valid UTF-8; ignoring it");
            None
        }
    }
}
