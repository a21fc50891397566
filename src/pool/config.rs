//! # Pool Shape
//!
//! The three tunables that govern one connection pool, plus the partial
//! override record callers pass and the built-in floor.
//!
//! Durations are carried as milliseconds; use the `*_duration` helpers when
//! handing them to a pool implementation.

use std::time::Duration;

use serde::Deserialize;

/// Fully resolved pool parameters.
///
/// Fields resolve independently; no relation between them is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum concurrent connections.
    pub size: u32,
    /// Milliseconds a connection may sit idle before it is reaped.
    pub idle_timeout: u64,
    /// Milliseconds between reaper scans.
    pub reap_interval: u64,
}

impl PoolConfig {
    pub fn idle_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.idle_timeout)
    }

    pub fn reap_interval_duration(&self) -> Duration {
        Duration::from_millis(self.reap_interval)
    }
}

/// Call-site overrides; any subset of the three fields.
///
/// Deserializes from the request layer's `{size, idleTimeout, reapInterval}` record.
///
/// # Example
/// ```rust
/// use psql_access::pool::PoolOverrides;
///
/// let o: PoolOverrides = serde_json::from_str(r#"{ "reapInterval": 5 }"#).unwrap();
/// assert_eq!(o.reap_interval, Some(5));
/// assert_eq!(o.size, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolOverrides {
    pub size: Option<u32>,
    #[serde(rename = "idleTimeout")]
    pub idle_timeout: Option<u64>,
    #[serde(rename = "reapInterval")]
    pub reap_interval: Option<u64>,
}

/// Hardcoded pool defaults, always complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolDefaults(pub PoolConfig);

impl PoolDefaults {
    pub const DEFAULT_SIZE: u32 = 16;
    pub const DEFAULT_IDLE_TIMEOUT: u64 = 3_000;
    pub const DEFAULT_REAP_INTERVAL: u64 = 1_000;

    pub const BUILTIN: PoolDefaults = PoolDefaults(PoolConfig {
        size: Self::DEFAULT_SIZE,
        idle_timeout: Self::DEFAULT_IDLE_TIMEOUT,
        reap_interval: Self::DEFAULT_REAP_INTERVAL,
    });
}

impl Default for PoolDefaults {
    fn default() -> Self {
        Self::BUILTIN
    }
}
