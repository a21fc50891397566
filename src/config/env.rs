//! # Settings Value Readers
//!
//! Helpers for reading typed values out of a key-value settings source.
//!
//! A source is any `Fn(&str) -> Option<String>`: the process environment,
//! a `HashMap` in tests, or a dotenv-backed lookup. Malformed values are
//! reported with `tracing::warn!` and treated as absent, so the next
//! configuration tier takes over.
//!
//! # Examples
//! ```rust
//! use psql_access::config::env::{read_string_from, read_u32_from};
//!
//! let get = |k: &str| (k == "DB_POOL_SIZE").then(|| " 8 ".to_string());
//! assert_eq!(read_u32_from(&get, "DB_POOL_SIZE"), Some(8));
//! assert_eq!(read_string_from(&get, "DB_HOST"), None);
//! ```

use std::str::FromStr;

use tracing::warn;

/// Reads a non-empty string value.
///
/// Surrounding whitespace and quotes are stripped; an empty result is `None`.
pub fn read_string_from<F>(provider: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| {
            v.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string()
        })
        .filter(|s| !s.is_empty())
}

/// Reads a `u16` value, ignoring anything that does not parse.
pub fn read_u16_from<F>(provider: &F, name: &str) -> Option<u16>
where
    F: Fn(&str) -> Option<String>,
{
    read_parsed(provider, name)
}

/// Reads a `u32` value, ignoring anything that does not parse.
pub fn read_u32_from<F>(provider: &F, name: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    read_parsed(provider, name)
}

/// Reads a `u64` value, ignoring anything that does not parse.
pub fn read_u64_from<F>(provider: &F, name: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    read_parsed(provider, name)
}

fn read_parsed<F, T>(provider: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = read_string_from(provider, name)?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key = name, value = %raw, "ignoring malformed numeric setting");
            None
        }
    }
}
