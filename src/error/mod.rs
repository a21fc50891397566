//! Error types surfaced by the access layer.

pub mod access;

pub use access::AccessDeniedError;
