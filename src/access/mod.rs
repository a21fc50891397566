//! Access parameters, their validated descriptor, and the resolved target.

pub mod descriptor;
pub mod params;
pub mod target;

pub use descriptor::{AccessDescriptor, DEFAULT_HOST, DEFAULT_PORT};
pub use params::AccessParams;
pub use target::DbTarget;
