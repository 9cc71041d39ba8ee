pub mod app_config;
pub mod config;
pub mod filter;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, parse_column_list};
pub use filter::{parse_page_count, RawFilterInput, SearchFilter, DEFAULT_ZIP};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("page count must be a positive integer, got \"{0}\"")]
    InvalidPageCount(String),

    #[error("page count must be at least 1")]
    ZeroPageCount,
}
