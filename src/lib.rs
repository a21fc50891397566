//! # psql_access
//!
//! Database access resolution for a multi-tenant SQL API.
//!
//! Given caller-supplied connection parameters, this crate:
//! - validates that they identify a database and a user (`access`)
//! - derives a stable identity key (`dbkey`) for the pool registry
//! - resolves pool size, idle timeout and reap interval from call-site
//!   overrides, process-wide settings and built-in defaults (`pool`)
//!
//! Opening connections and managing pools is left to the caller.
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use psql_access::access::{AccessParams, DbTarget};
//! use psql_access::config::GlobalSettings;
//!
//! let settings = GlobalSettings::from_env_with(|_| None);
//! let params = AccessParams {
//!     user: Some("alice".into()),
//!     dbname: Some("alice_db".into()),
//!     ..Default::default()
//! };
//! let target = DbTarget::resolve(Some(&params), None, &settings).unwrap();
//! println!("{} -> {:?}", target.dbkey(), target.pool);
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use serde;
pub use serde_json;

// ===============================
// Public modules
// ===============================
pub mod access;
pub mod config;
pub mod error;
pub mod pool;
