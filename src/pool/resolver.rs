//! # Pool Parameter Resolution
//!
//! Each pool field is resolved on its own:
//! call-site override, then the process-wide setting, then the built-in default.
//! A value at a higher tier shadows lower tiers for that field only.
//!
//! # Example
//! ```rust
//! use psql_access::config::GlobalSettings;
//! use psql_access::pool::{resolve, PoolDefaults, PoolOverrides};
//!
//! let settings = GlobalSettings { db_pool_idle_timeout: Some(10), ..Default::default() };
//! let overrides = PoolOverrides { reap_interval: Some(5), ..Default::default() };
//!
//! let cfg = resolve(Some(&overrides), &settings, &PoolDefaults::BUILTIN);
//! assert_eq!(cfg.size, PoolDefaults::DEFAULT_SIZE);
//! assert_eq!(cfg.idle_timeout, 10);
//! assert_eq!(cfg.reap_interval, 5);
//! ```

use tracing::debug;

use crate::config::GlobalSettings;
use crate::pool::config::{PoolConfig, PoolDefaults, PoolOverrides};

/// Merges the three configuration tiers into a complete [`PoolConfig`].
///
/// Pure: the settings snapshot is read, never cached.
pub fn resolve(
    overrides: Option<&PoolOverrides>,
    settings: &GlobalSettings,
    defaults: &PoolDefaults,
) -> PoolConfig {
    let o = overrides.copied().unwrap_or_default();
    let d = defaults.0;

    let cfg = PoolConfig {
        size: o.size.or(settings.db_pool_size).unwrap_or(d.size),
        idle_timeout: o
            .idle_timeout
            .or(settings.db_pool_idle_timeout)
            .unwrap_or(d.idle_timeout),
        reap_interval: o
            .reap_interval
            .or(settings.db_pool_reap_interval)
            .unwrap_or(d.reap_interval),
    };

    debug!(
        size = cfg.size,
        idle_timeout = cfg.idle_timeout,
        reap_interval = cfg.reap_interval,
        "resolved pool parameters"
    );
    cfg
}
