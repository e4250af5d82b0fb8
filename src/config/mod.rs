pub mod toml_config;

pub use toml_config::{ApiConfig, ClientConfig, EndpointsConfig};

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
