//! Sonda Config - Configuration loading and application paths.

mod config;
mod error;
mod paths;

pub use config::{Config, GeminiConfig, GeneralConfig, ProcessingConfig};
pub use error::{ConfigError, ConfigResult};
pub use paths::AppPaths;
