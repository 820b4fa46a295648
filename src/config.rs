//! Configuration defaults and file parsing

pub mod ccfmt_toml;

pub use ccfmt_toml::{CONFIG_FILE_NAME, ConfigError, FormatConfig};
