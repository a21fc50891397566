//! # Access Descriptor
//!
//! Validates raw [`AccessParams`] into an immutable description of one
//! target database and derives its identity key (`dbkey`).
//!
//! ## Identity key
//! The key covers `(host, port, user, dbname)` and nothing else; the password
//! affects connectivity, not identity. Fields are length-prefixed before
//! hashing so no value can bleed into its neighbour, whatever characters it
//! contains.
//!
//! # Example
//! ```rust
//! use psql_access::access::{AccessDescriptor, AccessParams};
//! use psql_access::config::GlobalSettings;
//!
//! let params = AccessParams {
//!     user: Some("alice".into()),
//!     dbname: Some("alice_db".into()),
//!     ..Default::default()
//! };
//! let db = AccessDescriptor::new(Some(&params), &GlobalSettings::default()).unwrap();
//! assert_eq!(db.host(), "localhost");
//! assert_eq!(db.port(), 5432);
//! assert!(db.dbkey().starts_with("pg:"));
//! ```

use std::fmt;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::access::params::AccessParams;
use crate::config::GlobalSettings;
use crate::error::AccessDeniedError;

/// Host used when neither the caller nor the settings name one.
pub const DEFAULT_HOST: &str = "localhost";
/// Port used when neither the caller nor the settings name one.
pub const DEFAULT_PORT: u16 = 5432;

const DBKEY_PREFIX: &str = "pg:";

/// A validated database target plus the credentials to reach it.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessDescriptor {
    host: String,
    port: u16,
    user: String,
    dbname: String,
    password: Option<String>,
    dbkey: String,
}

impl AccessDescriptor {
    /// Builds a descriptor from caller parameters.
    ///
    /// `host`/`port` fall back to `settings.db_host`/`settings.db_port`, then
    /// to [`DEFAULT_HOST`]/[`DEFAULT_PORT`]. `user` and `dbname` are taken as
    /// given and must be non-empty.
    ///
    /// # Errors
    /// [`AccessDeniedError`] if `params` is `None` or lacks a user or a
    /// database name.
    pub fn new(
        params: Option<&AccessParams>,
        settings: &GlobalSettings,
    ) -> Result<Self, AccessDeniedError> {
        let Some(params) = params else {
            warn!("rejecting database access: no access parameters");
            return Err(AccessDeniedError);
        };

        let user = non_empty(params.user.as_deref());
        let dbname = non_empty(params.dbname.as_deref());
        let (Some(user), Some(dbname)) = (user, dbname) else {
            warn!(
                has_user = user.is_some(),
                has_dbname = dbname.is_some(),
                "rejecting database access: insufficient access parameters"
            );
            return Err(AccessDeniedError);
        };

        let host = non_empty(params.host.as_deref())
            .or(settings.db_host.as_deref())
            .unwrap_or(DEFAULT_HOST);
        let port = params.port.or(settings.db_port).unwrap_or(DEFAULT_PORT);

        let dbkey = derive_dbkey(host, port, user, dbname);
        debug!(dbkey = %dbkey, host, port, user, dbname, "access descriptor built");

        Ok(Self {
            host: host.to_string(),
            port,
            user: user.to_string(),
            dbname: dbname.to_string(),
            password: params.pass.clone(),
            dbkey,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn dbname(&self) -> &str {
        &self.dbname
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Identity key for the pool registry.
    ///
    /// Stable for the lifetime of the descriptor and equal for any two
    /// descriptors sharing `(host, port, user, dbname)`.
    pub fn dbkey(&self) -> &str {
        &self.dbkey
    }

    /// libpq key/value connection string, password included when present.
    ///
    /// # Example
    /// ```rust
    /// use psql_access::access::{AccessDescriptor, AccessParams};
    /// use psql_access::config::GlobalSettings;
    ///
    /// let params = AccessParams {
    ///     user: Some("o'neil".into()),
    ///     dbname: Some("db".into()),
    ///     ..Default::default()
    /// };
    /// let db = AccessDescriptor::new(Some(&params), &GlobalSettings::default()).unwrap();
    /// assert_eq!(
    ///     db.conninfo(),
    ///     r"host='localhost' port=5432 user='o\'neil' dbname='db'"
    /// );
    /// ```
    pub fn conninfo(&self) -> String {
        let mut s = format!(
            "host={} port={} user={} dbname={}",
            quote_conninfo(&self.host),
            self.port,
            quote_conninfo(&self.user),
            quote_conninfo(&self.dbname),
        );
        if let Some(pass) = &self.password {
            s.push_str(" password=");
            s.push_str(&quote_conninfo(pass));
        }
        s
    }
}

impl fmt::Debug for AccessDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessDescriptor")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("dbname", &self.dbname)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("dbkey", &self.dbkey)
            .finish()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

fn derive_dbkey(host: &str, port: u16, user: &str, dbname: &str) -> String {
    let mut h = Sha256::new();
    for field in [host, user, dbname] {
        h.update((field.len() as u64).to_be_bytes());
        h.update(field.as_bytes());
    }
    h.update(port.to_be_bytes());
    format!("{DBKEY_PREFIX}{}", hex::encode(h.finalize()))
}

fn quote_conninfo(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
