// src/config.rs
//! Service limits loaded from `config/analyzer.toml`, overridable from the
//! environment. Resolution never fails: unreadable or invalid config falls
//! back to compiled defaults so the service always boots.

use serde::Deserialize;

// --- env defaults & names ---
pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.toml";
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 2000;
pub const DEFAULT_MAX_HISTORY_ITEMS: usize = 50;

pub const ENV_CONFIG_PATH: &str = "ANALYZER_CONFIG_PATH";
pub const ENV_MAX_TEXT_LENGTH: &str = "ANALYZER_MAX_TEXT_LENGTH";
pub const ENV_MAX_HISTORY_ITEMS: &str = "ANALYZER_MAX_HISTORY_ITEMS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Inputs longer than this (in chars) are rejected at the API boundary.
    pub max_text_length: usize,
    /// Per-session history entries kept in memory.
    pub max_history_items: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_history_items: DEFAULT_MAX_HISTORY_ITEMS,
        }
    }
}

/* ----------------------------
Config schema (from TOML)
---------------------------- */

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigRoot {
    #[serde(default)]
    limits: LimitsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LimitsSection {
    max_text_length: Option<usize>,
    max_history_items: Option<usize>,
}

impl AppConfig {
    /// Parse from a TOML string; absent keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let root: ConfigRoot = toml::from_str(raw)?;
        let base = Self::default();
        Ok(Self {
            max_text_length: root.limits.max_text_length.unwrap_or(base.max_text_length),
            max_history_items: root
                .limits
                .max_history_items
                .unwrap_or(base.max_history_items),
        })
    }

    /// Resolve config: file (if present) → env overrides → defaults.
    pub fn load() -> Self {
        let path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(raw) => match Self::from_toml_str(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!(error = ?e, %path, "invalid analyzer config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        if let Some(v) = parse_env_usize(ENV_MAX_TEXT_LENGTH) {
            cfg.max_text_length = v;
        }
        if let Some(v) = parse_env_usize(ENV_MAX_HISTORY_ITEMS) {
            cfg.max_history_items = v;
        }
        cfg
    }
}

// parse optional positive integer env var
fn parse_env_usize(name: &str) -> Option<usize> {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
[limits]
max_text_length = 500
max_history_items = 5
"#,
        )
        .expect("parse");
        assert_eq!(cfg.max_text_length, 500);
        assert_eq!(cfg.max_history_items, 5);
    }

    #[test]
    fn absent_keys_keep_defaults() {
        let cfg = AppConfig::from_toml_str("[limits]\nmax_text_length = 123\n").expect("parse");
        assert_eq!(cfg.max_text_length, 123);
        assert_eq!(cfg.max_history_items, DEFAULT_MAX_HISTORY_ITEMS);

        let empty = AppConfig::from_toml_str("").expect("parse");
        assert_eq!(empty, AppConfig::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("limits = not-a-table").is_err());
    }
}
