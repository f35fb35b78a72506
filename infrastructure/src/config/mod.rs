//! Configuration loading and secret resolution

pub mod file_config;
pub mod loader;
pub mod secrets;

pub use file_config::{
    FileConfig, FileContentConfig, FileInstructorConfig, FileNavigationConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
pub use secrets::EnvSecretSource;
