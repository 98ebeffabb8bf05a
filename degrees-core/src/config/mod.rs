//! Configuration for degrees.

pub mod degrees_config;

pub use degrees_config::{CliOverrides, DataConfig, DegreesConfig, SearchConfig};
