//! # vitrina-config
//!
//! Layered configuration loading for Vitrina using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VITRINA_*` prefix, `__` as separator)
//! 2. Bare legacy variables (`GEMINI_API_KEY`, `SUPABASE_URL`, `SUPABASE_KEY`, `PORT`)
//! 3. Project-level `./vitrina.toml`
//! 4. User-level `~/.config/vitrina/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VITRINA_GEMINI__API_KEY` -> `gemini.api_key`,
//! `VITRINA_SUPABASE__URL` -> `supabase.url`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vitrina_config::VitrinaConfig;
//!
//! let config = VitrinaConfig::load_with_dotenv().expect("config");
//! config.require_clients().expect("gemini and supabase configured");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod error;
mod gemini;
mod server;
mod supabase;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use server::ServerConfig;
pub use supabase::SupabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bare variable names kept for compatibility with existing `.env` files.
const LEGACY_ENV: [(&str, &str); 4] = [
    ("GEMINI_API_KEY", "gemini.api_key"),
    ("SUPABASE_URL", "supabase.url"),
    ("SUPABASE_KEY", "supabase.key"),
    ("PORT", "server.port"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VitrinaConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl VitrinaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type, and [`ConfigError::InvalidValue`] for out-of-range values.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("vitrina.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Bare legacy variables
        figment = figment.merge(Self::legacy_env());

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("VITRINA_").split("__"))
    }

    /// Check that both remote clients can be built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the first missing section.
    pub fn require_clients(&self) -> Result<(), ConfigError> {
        if !self.gemini.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "gemini".into(),
            });
        }
        if !self.supabase.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "supabase".into(),
            });
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.supabase.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "supabase.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn legacy_env() -> Env {
        let names = LEGACY_ENV.map(|(name, _)| name);
        Env::raw().only(&names).map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map_or_else(
                    || Uncased::from_borrowed(key.as_str()),
                    |(_, path)| Uncased::from_borrowed(path),
                )
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vitrina").join("config.toml"))
    }
}
