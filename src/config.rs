//! Engine configuration, read from the environment by the web binary.
//!
//! `MATCHUP_STRICT_SELECTION`: report selecting an ineligible contestant as an error.
//! `MATCHUP_UNDO_RESTORES_LAST_OPPONENT`: undo also rolls back the last opponent.

use serde::{Deserialize, Serialize};

pub const STRICT_SELECTION_VAR: &str = "MATCHUP_STRICT_SELECTION";
pub const UNDO_RESTORES_LAST_OPPONENT_VAR: &str = "MATCHUP_UNDO_RESTORES_LAST_OPPONENT";

/// Behavior switches for the matchmaking engine. Defaults reproduce the classic tracker.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// `select` on a contestant that is cooling down returns `IneligibleSelection`
    /// instead of silently doing nothing.
    pub strict_selection: bool,
    /// `undo` also restores the last opponent recorded in the snapshot.
    pub undo_restores_last_opponent: bool,
}

impl EngineConfig {
    /// Read the config from environment variables, keeping defaults for unset or unparsable ones.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable source (tests, embedding).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            strict_selection: bool_var(&lookup, STRICT_SELECTION_VAR, defaults.strict_selection),
            undo_restores_last_opponent: bool_var(
                &lookup,
                UNDO_RESTORES_LAST_OPPONENT_VAR,
                defaults.undo_restores_last_opponent,
            ),
        }
    }
}

fn bool_var<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
            log::warn!("Ignoring {}={:?}: expected a boolean, using {}", key, raw, default);
            default
        }),
    }
}

/// Accepts 1/0, true/false, yes/no, on/off (case-insensitive, surrounding whitespace ignored).
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
