pub mod config;
pub mod paths;

pub use config::{Config, ConfigError, FallbackPosters, LoggingConfig, PosterConfig, PosterEntry, StorageConfig, DEFAULT_NAMESPACE};
pub use paths::{base_path_override, PathManager};
