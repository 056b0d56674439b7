//! CLI configuration from environment variables.
//!
//! Values are read from `UTILKIT_`-prefixed variables after optional `.env`
//! files are loaded. Missing or unparseable values fall back to defaults.
//!
//! - `UTILKIT_LOG` - default tracing filter when `RUST_LOG` is unset
//!   (default: `utilkit_common=info,utilkit_cli=info`)
//! - `UTILKIT_RANDOM_LENGTH` - length used by `random-string` without an
//!   argument (default: 16)
//! - `UTILKIT_JSON_PRETTY` - pretty-print `parse-json` output (default: false)

use std::path::Path;
use std::str::FromStr;

/// Runtime settings for the `utilkit` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_filter: String,
    pub random_length: usize,
    pub json_pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "utilkit_common=info,utilkit_cli=info".to_string(),
            random_length: 16,
            json_pretty: false,
        }
    }
}

impl CliConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            log_filter: lookup("UTILKIT_LOG")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_filter),
            random_length: parse_or(&lookup, "UTILKIT_RANDOM_LENGTH", defaults.random_length),
            json_pretty: parse_or(&lookup, "UTILKIT_JSON_PRETTY", defaults.json_pretty),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable setting");
            default
        }),
        None => default,
    }
}

/// Loads `.env.local` then `.env` from `dir` into the process environment.
///
/// Variables already set are never overridden, so `.env.local` wins over
/// `.env` and the real environment wins over both.
pub fn load_dotenv(dir: &Path) {
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load env file");
            }
        }
    }
}
