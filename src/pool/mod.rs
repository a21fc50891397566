//! Connection-pool shape: types and the three-tier resolver.

pub mod config;
pub mod resolver;

pub use config::{PoolConfig, PoolDefaults, PoolOverrides};
pub use resolver::resolve;
