pub mod config;
pub mod consts;

pub use config::{Config, ConfigError};
