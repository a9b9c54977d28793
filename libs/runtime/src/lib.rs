//! Process-level plumbing shared by the pinboard binaries: layered
//! configuration and tracing setup.

pub mod config;
pub mod logging;

pub use config::{AppConfig, CliArgs, LoggingConfig, Section, ServerConfig};
