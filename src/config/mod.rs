//! Configuration sources: the process-wide settings snapshot and the
//! typed readers used to build it.

pub mod env;
pub mod settings;

pub use settings::GlobalSettings;
