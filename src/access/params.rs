//! # Raw Access Parameters
//!
//! The untrusted input record handed over by the request layer. Every field
//! is optional here; [`AccessDescriptor::new`](crate::access::AccessDescriptor::new)
//! decides whether the record is sufficient.

use std::fmt;

use serde::Deserialize;

use crate::config::GlobalSettings;

/// Placeholder replaced by the user id in `db_base_name`.
pub const USER_ID_PLACEHOLDER: &str = "{user_id}";

/// Connection parameters as supplied by the caller.
///
/// # Example
/// ```rust
/// use psql_access::access::AccessParams;
///
/// let p: AccessParams = serde_json::from_str(
///     r#"{ "user": "alice", "dbname": "alice_db", "pass": "s3cret" }"#,
/// ).unwrap();
/// assert_eq!(p.host, None);
/// assert_eq!(p.pass.as_deref(), Some("s3cret"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccessParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub dbname: Option<String>,
    pub pass: Option<String>,
}

impl AccessParams {
    /// Parameters for anonymous access to a user's database through the
    /// public role configured in `settings`.
    ///
    /// Missing settings leave the matching field empty, which the descriptor
    /// then rejects.
    ///
    /// # Example
    /// ```rust
    /// use psql_access::access::AccessParams;
    /// use psql_access::config::GlobalSettings;
    ///
    /// let settings = GlobalSettings {
    ///     db_pubuser: Some("publicuser".into()),
    ///     db_base_name: Some("tenant_{user_id}_db".into()),
    ///     ..Default::default()
    /// };
    /// let p = AccessParams::public_user(&settings, 1);
    /// assert_eq!(p.user.as_deref(), Some("publicuser"));
    /// assert_eq!(p.dbname.as_deref(), Some("tenant_1_db"));
    /// ```
    pub fn public_user(settings: &GlobalSettings, user_id: impl fmt::Display) -> Self {
        let user_id = user_id.to_string();
        Self {
            host: None,
            port: None,
            user: settings.db_pubuser.clone(),
            dbname: settings
                .db_base_name
                .as_deref()
                .map(|template| template.replace(USER_ID_PLACEHOLDER, &user_id)),
            pass: settings.db_pubuser_pass.clone(),
        }
    }
}

impl fmt::Debug for AccessParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("dbname", &self.dbname)
            .field("pass", &self.pass.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_substitutes_every_placeholder() {
        let settings = GlobalSettings {
            db_pubuser: Some("publicuser".into()),
            db_pubuser_pass: Some("public".into()),
            db_base_name: Some("u{user_id}_{user_id}".into()),
            ..Default::default()
        };
        let p = AccessParams::public_user(&settings, "42");
        assert_eq!(p.dbname.as_deref(), Some("u42_42"));
        assert_eq!(p.pass.as_deref(), Some("public"));
        assert_eq!(p.host, None);
        assert_eq!(p.port, None);
    }

    #[test]
    fn public_user_without_settings_is_empty() {
        let p = AccessParams::public_user(&GlobalSettings::default(), 1);
        assert_eq!(p, AccessParams::default());
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let p: AccessParams =
            serde_json::from_str(r#"{ "host": "h", "port": 6432, "api_key": "x" }"#).unwrap();
        assert_eq!(p.host.as_deref(), Some("h"));
        assert_eq!(p.port, Some(6432));
        assert_eq!(p.user, None);
    }

    #[test]
    fn debug_redacts_password() {
        let p = AccessParams {
            user: Some("alice".into()),
            pass: Some("hunter2".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", p);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
