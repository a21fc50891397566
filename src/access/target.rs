//! # Database Target
//!
//! Pairs an [`AccessDescriptor`] with the [`PoolConfig`] resolved for it.
//! This is what a pool manager receives: the dbkey to look up or create a
//! pool under, and the parameters to provision it with on first sight.
//!
//! # Example
//! ```rust
//! use psql_access::access::{AccessParams, DbTarget};
//! use psql_access::config::GlobalSettings;
//! use psql_access::pool::{PoolDefaults, PoolOverrides};
//!
//! let settings = GlobalSettings { db_pool_size: Some(4), ..Default::default() };
//! let params = AccessParams {
//!     user: Some("alice".into()),
//!     dbname: Some("alice_db".into()),
//!     ..Default::default()
//! };
//! let overrides = PoolOverrides { reap_interval: Some(250), ..Default::default() };
//!
//! let target = DbTarget::resolve(Some(&params), Some(&overrides), &settings).unwrap();
//! assert_eq!(target.pool.size, 4);
//! assert_eq!(target.pool.idle_timeout, PoolDefaults::DEFAULT_IDLE_TIMEOUT);
//! assert_eq!(target.pool.reap_interval, 250);
//! ```

use crate::access::descriptor::AccessDescriptor;
use crate::access::params::AccessParams;
use crate::config::GlobalSettings;
use crate::error::AccessDeniedError;
use crate::pool::{PoolConfig, PoolDefaults, PoolOverrides, resolve};

/// A validated target and its pool parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbTarget {
    pub descriptor: AccessDescriptor,
    pub pool: PoolConfig,
}

impl DbTarget {
    /// Validates `params` and resolves pool parameters against the built-in defaults.
    ///
    /// # Errors
    /// [`AccessDeniedError`] when the parameters cannot identify a database.
    pub fn resolve(
        params: Option<&AccessParams>,
        overrides: Option<&PoolOverrides>,
        settings: &GlobalSettings,
    ) -> Result<Self, AccessDeniedError> {
        Self::resolve_with_defaults(params, overrides, settings, &PoolDefaults::BUILTIN)
    }

    /// Same as [`DbTarget::resolve`] with an explicit default floor.
    pub fn resolve_with_defaults(
        params: Option<&AccessParams>,
        overrides: Option<&PoolOverrides>,
        settings: &GlobalSettings,
        defaults: &PoolDefaults,
    ) -> Result<Self, AccessDeniedError> {
        let descriptor = AccessDescriptor::new(params, settings)?;
        let pool = resolve(overrides, settings, defaults);
        Ok(Self { descriptor, pool })
    }

    pub fn dbkey(&self) -> &str {
        self.descriptor.dbkey()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anon() -> AccessParams {
        AccessParams {
            host: Some("localhost".into()),
            port: Some(5432),
            user: Some("publicuser".into()),
            dbname: Some("tenant_1_db".into()),
            pass: Some("public".into()),
        }
    }

    #[test]
    fn access_denied_short_circuits_pool_resolution() {
        let overrides = PoolOverrides {
            size: Some(1),
            ..Default::default()
        };
        let err = DbTarget::resolve(None, Some(&overrides), &GlobalSettings::default())
            .unwrap_err();
        assert_eq!(err, AccessDeniedError);
    }

    #[test]
    fn default_pool_params_without_settings_or_overrides() {
        let t = DbTarget::resolve(Some(&anon()), None, &GlobalSettings::default()).unwrap();
        assert_eq!(t.pool, PoolDefaults::BUILTIN.0);
    }

    #[test]
    fn overrides_take_precedence_over_global_and_default() {
        let settings = GlobalSettings {
            db_pool_idle_timeout: Some(10),
            ..Default::default()
        };
        let overrides = PoolOverrides {
            reap_interval: Some(5),
            ..Default::default()
        };
        let t = DbTarget::resolve(Some(&anon()), Some(&overrides), &settings).unwrap();
        assert_eq!(
            t.pool,
            PoolConfig {
                size: PoolDefaults::DEFAULT_SIZE,
                idle_timeout: 10,
                reap_interval: 5,
            }
        );
    }

    #[test]
    fn same_target_yields_same_dbkey_regardless_of_pool_params() {
        let settings = GlobalSettings::default();
        let a = DbTarget::resolve(Some(&anon()), None, &settings).unwrap();
        let overrides = PoolOverrides {
            size: Some(2),
            ..Default::default()
        };
        let b = DbTarget::resolve(Some(&anon()), Some(&overrides), &settings).unwrap();
        assert_eq!(a.dbkey(), b.dbkey());
        assert_ne!(a.pool, b.pool);
    }

    #[test]
    fn public_user_target_from_settings() {
        let settings = GlobalSettings {
            db_host: Some("db.internal".into()),
            db_pubuser: Some("publicuser".into()),
            db_pubuser_pass: Some("public".into()),
            db_base_name: Some("tenant_{user_id}_db".into()),
            db_pool_size: Some(1),
            ..Default::default()
        };
        let params = AccessParams::public_user(&settings, 1);
        let t = DbTarget::resolve(Some(&params), None, &settings).unwrap();

        assert_eq!(t.descriptor.host(), "db.internal");
        assert_eq!(t.descriptor.dbname(), "tenant_1_db");
        assert_eq!(t.pool.size, 1);
    }

    #[test]
    fn public_user_without_pubuser_setting_is_denied() {
        let settings = GlobalSettings {
            db_base_name: Some("tenant_{user_id}_db".into()),
            ..Default::default()
        };
        let params = AccessParams::public_user(&settings, 1);
        assert!(DbTarget::resolve(Some(&params), None, &settings).is_err());
    }

    #[test]
    fn custom_defaults_floor() {
        let floor = PoolDefaults(PoolConfig {
            size: 2,
            idle_timeout: 0,
            reap_interval: 100,
        });
        let t = DbTarget::resolve_with_defaults(
            Some(&anon()),
            None,
            &GlobalSettings::default(),
            &floor,
        )
        .unwrap();
        assert_eq!(t.pool, floor.0);
    }
}
