//! layercfg - layered YAML configuration
//!
//! Loads a user-editable YAML file, reconciles it against a defaults file of
//! the same shape (missing keys, mistyped values, key order) and writes it
//! back with its leading comment header.

pub mod config;
pub mod error;
pub mod logging;
pub mod managed;
pub mod storage;

pub use config::{ConfigurationOptions, FileConfiguration};
pub use error::ConfigError;
pub use layercfg_document::{Document, Family, PathAccess, Value};
pub use managed::ManagedConfig;
pub use storage::{FsStorage, MemoryStorage, Storage};
