//! # Process-Wide Settings Snapshot
//!
//! [`GlobalSettings`] is the read-only view of deployment configuration the
//! access layer consults: the default database endpoint, the pool tunables
//! shared by every pool, and the public-user credentials.
//!
//! A snapshot is taken once and passed explicitly to
//! [`AccessDescriptor::new`](crate::access::AccessDescriptor::new) and
//! [`resolve`](crate::pool::resolve). Nothing in this crate reads the
//! environment behind the caller's back.
//!
//! # Environment Variables
//! | Variable | Field | Notes |
//! |----------|-------|-------|
//! | `DB_HOST` | `db_host` | default endpoint host |
//! | `DB_PORT` | `db_port` | default endpoint port |
//! | `DB_POOL_SIZE` | `db_pool_size` | `0` is ignored |
//! | `DB_POOL_IDLE_TIMEOUT` | `db_pool_idle_timeout` | milliseconds |
//! | `DB_POOL_REAP_INTERVAL` | `db_pool_reap_interval` | milliseconds, `0` is ignored |
//! | `DB_PUBUSER` | `db_pubuser` | role used for anonymous access |
//! | `DB_PUBUSER_PASS` | `db_pubuser_pass` | |
//! | `DB_BASE_NAME` | `db_base_name` | database name template, `{user_id}` placeholder |
//!
//! The JSON document form uses the legacy key names (`db_pool_idleTimeout`,
//! `db_pool_reapInterval`); see [`GlobalSettings::from_json_str`].
//!
//! # Examples
//! ```rust
//! use psql_access::config::settings::GlobalSettings;
//!
//! let settings = GlobalSettings::from_env_with(|k| match k {
//!     "DB_HOST" => Some("db.internal".into()),
//!     "DB_POOL_SIZE" => Some("4".into()),
//!     _ => None,
//! });
//! assert_eq!(settings.db_host.as_deref(), Some("db.internal"));
//! assert_eq!(settings.db_pool_size, Some(4));
//! assert_eq!(settings.db_pool_idle_timeout, None);
//! ```

use std::{env, str::FromStr};

use anyhow::Context;
use serde::{Deserialize, Deserializer, de::IgnoredAny};
use tracing::warn;

use crate::config::env::{read_string_from, read_u16_from, read_u32_from, read_u64_from};

/// Snapshot of process-wide database settings.
///
/// Every field is optional; an absent field lets the built-in default apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    #[serde(deserialize_with = "lenient_string")]
    pub db_host: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub db_port: Option<u16>,
    #[serde(deserialize_with = "lenient_number")]
    pub db_pool_size: Option<u32>,
    #[serde(rename = "db_pool_idleTimeout", deserialize_with = "lenient_number")]
    pub db_pool_idle_timeout: Option<u64>,
    #[serde(rename = "db_pool_reapInterval", deserialize_with = "lenient_number")]
    pub db_pool_reap_interval: Option<u64>,
    #[serde(deserialize_with = "lenient_string")]
    pub db_pubuser: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub db_pubuser_pass: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub db_base_name: Option<String>,
}

impl GlobalSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|k| env::var(k).ok())
    }

    /// Reads settings through a custom key provider (for testing/mocking).
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            db_host: read_string_from(&get, "DB_HOST"),
            db_port: read_u16_from(&get, "DB_PORT"),
            db_pool_size: read_u32_from(&get, "DB_POOL_SIZE"),
            db_pool_idle_timeout: read_u64_from(&get, "DB_POOL_IDLE_TIMEOUT"),
            db_pool_reap_interval: read_u64_from(&get, "DB_POOL_REAP_INTERVAL"),
            db_pubuser: read_string_from(&get, "DB_PUBUSER"),
            // Passwords are taken verbatim.
            db_pubuser_pass: get("DB_PUBUSER_PASS"),
            db_base_name: read_string_from(&get, "DB_BASE_NAME"),
        }
        .normalized()
    }

    /// Loads a dotenv file (outside production) and then reads the environment.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Unless `APP_ENV` is `production`, loads `DOTENV_FILE` if set,
    ///   otherwise `.env.{APP_ENV}`, falling back to `.env`.
    /// - Missing dotenv files are not an error.
    pub fn load() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        Self::from_env()
    }

    /// Parses the JSON settings document.
    ///
    /// Unknown keys are ignored. Numeric fields accept numbers or numeric
    /// strings, text fields accept strings or numbers; anything else is
    /// treated as absent.
    ///
    /// # Errors
    /// Returns an error if `json` is not a JSON object.
    ///
    /// # Example
    /// ```rust
    /// use psql_access::config::settings::GlobalSettings;
    ///
    /// let s = GlobalSettings::from_json_str(
    ///     r#"{ "db_port": "6432", "db_pool_idleTimeout": 10, "node_env": "test" }"#,
    /// ).unwrap();
    /// assert_eq!(s.db_port, Some(6432));
    /// assert_eq!(s.db_pool_idle_timeout, Some(10));
    /// ```
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let parsed: Self =
            serde_json::from_str(json).context("failed to parse settings document")?;
        Ok(parsed.normalized())
    }

    /// Drops values that cannot describe a usable pool.
    fn normalized(mut self) -> Self {
        if self.db_pool_size == Some(0) {
            warn!(key = "db_pool_size", "ignoring zero pool size");
            self.db_pool_size = None;
        }
        if self.db_pool_reap_interval == Some(0) {
            warn!(key = "db_pool_reap_interval", "ignoring zero reap interval");
            self.db_pool_reap_interval = None;
        }
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_number<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(de)? {
        Some(Lenient::Value(v)) => Some(v),
        Some(Lenient::Text(s)) => {
            let parsed = s.trim().parse::<T>().ok();
            if parsed.is_none() {
                warn!(value = %s, "ignoring malformed numeric setting");
            }
            parsed
        }
        Some(Lenient::Other(_)) => {
            warn!("ignoring non-numeric setting value");
            None
        }
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Other(IgnoredAny),
}

/// Text value taken verbatim; numbers are stringified.
fn lenient_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(de)? {
        Some(Scalar::Text(s)) => Some(s),
        Some(Scalar::Number(n)) => Some(n.to_string()),
        Some(Scalar::Other(_)) => {
            warn!("ignoring non-text setting value");
            None
        }
        None => None,
    })
}

fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(de)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
