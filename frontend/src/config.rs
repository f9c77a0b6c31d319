//! Settings baked into the bundle at compile time.
//!
//! Trunk forwards the build environment to `rustc`, so both values are read with
//! `option_env!` and never looked up at runtime.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const API_URL: Option<&str> = option_env!("WOLFS_EYE_API_URL");
const APP_ENV: Option<&str> = option_env!("WOLFS_EYE_APP_ENV");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown build mode: {0}")]
    UnknownBuildMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Staging,
    Production,
}

impl BuildMode {
    /// Mode implied by the cargo profile when no tag was supplied.
    pub fn profile_default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Staging => "staging",
            BuildMode::Production => "production",
        }
    }

    pub fn log_level(self) -> log::Level {
        match self {
            BuildMode::Development => log::Level::Debug,
            BuildMode::Staging | BuildMode::Production => log::Level::Info,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "staging" => Ok(BuildMode::Staging),
            "production" | "prod" => Ok(BuildMode::Production),
            _ => Err(ConfigError::UnknownBuildMode(s.to_string())),
        }
    }
}

/// Everything the build injected, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: &'static str,
    pub mode: BuildMode,
}

impl AppConfig {
    pub fn from_build() -> (Self, Option<ConfigError>) {
        Self::from_values(API_URL, APP_ENV)
    }

    /// Resolves raw build values. A missing URL becomes the empty string (same
    /// origin); an unrecognised mode falls back to the profile default and the
    /// parse error is handed back so the caller can report it once logging is up.
    pub fn from_values(
        api_url: Option<&'static str>,
        mode: Option<&str>,
    ) -> (Self, Option<ConfigError>) {
        let (mode, error) = match mode.map(str::parse::<BuildMode>) {
            Some(Ok(mode)) => (mode, None),
            Some(Err(e)) => (BuildMode::profile_default(), Some(e)),
            None => (BuildMode::profile_default(), None),
        };
        let config = Self {
            api_url: api_url.unwrap_or_default(),
            mode,
        };
        (config, error)
    }
}
