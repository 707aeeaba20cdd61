//! Layered configuration for ifwatch.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file at
//! [`config_path`], then `IFWATCH_*` environment variables. The command-line
//! pattern is applied on top by the binary.
//!
//! `IFWATCH_FILTER` is taken verbatim. figment's `Env` provider would parse
//! `[a,b]`, `1` or `true` as an array, number or bool, all valid regexes.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::filter::DEFAULT_PATTERN;
use crate::reader::DEFAULT_SOURCE;

/// Runtime settings. The refresh period is fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Interface name filter, matched from the start of the name.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Interface statistics table to sample.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Log file. The terminal is never used for logs.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            source: default_source(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

fn default_filter() -> String {
    DEFAULT_PATTERN.into()
}
fn default_source() -> PathBuf {
    DEFAULT_SOURCE.into()
}
fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("ifwatch.log")
}
fn default_log_level() -> String {
    "warn".into()
}

const ENV_PREFIX: &str = "IFWATCH_";
const FILTER_ENV: &str = "IFWATCH_FILTER";

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "ifwatch", "ifwatch").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("ifwatch");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

impl Config {
    /// Load from the default config file plus environment.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(&config_path())
    }

    /// Load from `path` plus environment. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["filter"]));
        if let Ok(filter) = std::env::var(FILTER_ENV) {
            figment = figment.merge(("filter", filter));
        }

        let config = figment.extract()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Path::new("missing.toml")).unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.filter, "vnic|portEpic");
            assert_eq!(config.source, PathBuf::from("/proc/net/dev"));
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    filter = "eth"
                    source = "/tmp/net-dev"
                "#,
            )?;
            let config = Config::load_from(Path::new("config.toml")).unwrap();
            assert_eq!(config.filter, "eth");
            assert_eq!(config.source, PathBuf::from("/tmp/net-dev"));
            assert_eq!(config.log_level, "warn");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", r#"filter = "eth""#)?;
            jail.set_env("IFWATCH_FILTER", "wlan");
            jail.set_env("IFWATCH_LOG_LEVEL", "debug");
            let config = Config::load_from(Path::new("config.toml")).unwrap();
            assert_eq!(config.filter, "wlan");
            assert_eq!(config.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn env_filter_is_kept_as_raw_text() {
        for pattern in ["[a,b]", "1", "true", "[ev]th", "eth[0-9]"] {
            Jail::expect_with(|jail| {
                jail.set_env("IFWATCH_FILTER", pattern);
                let config = Config::load_from(Path::new("missing.toml")).unwrap();
                assert_eq!(config.filter, pattern);
                Ok(())
            });
        }
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "filter = [")?;
            let err = Config::load_from(Path::new("config.toml")).unwrap_err();
            assert!(matches!(err, CoreError::Config(_)));
            Ok(())
        });
    }
}
