//! Managed configuration file
//!
//! Ties a [`FileConfiguration`] to a file in a data directory whose defaults
//! ship as a bundled resource under the same relative path. Loading is lazy:
//! the first access runs [`ManagedConfig::reload`].
//!
//! A missing or unreadable resource only costs the defaults; it is logged and
//! the user file is still loaded. A user file that fails to load is never
//! overwritten: `save` retries the load and returns its error instead.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::FileConfiguration;
use crate::error::ConfigError;
use crate::storage::Storage;

/// Body used when the user file does not exist yet
const EMPTY_DOCUMENT: &str = "{}\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    NotLoaded,
    Loaded,
    Failed,
}

/// A configuration file backed by a bundled defaults resource
#[derive(Debug)]
pub struct ManagedConfig<S: Storage> {
    storage: S,
    data_dir: PathBuf,
    resource_id: String,
    config_file: PathBuf,
    config: FileConfiguration,
    state: LoadState,
}

impl<S: Storage> ManagedConfig<S> {
    /// `relative_path` uses `/` separators; it names both the resource and
    /// the file below `data_dir`.
    pub fn new(storage: S, data_dir: impl Into<PathBuf>, relative_path: &str) -> Self {
        let data_dir = data_dir.into();
        let config_file = relative_path
            .split('/')
            .fold(data_dir.clone(), |path, part| path.join(part));
        Self {
            storage,
            data_dir,
            resource_id: relative_path.to_string(),
            config_file,
            config: FileConfiguration::new(),
            state: LoadState::NotLoaded,
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Copy the bundled resource into the data directory unless the file
    /// already exists. Returns whether a copy was made.
    pub fn save_default(&self) -> Result<bool, ConfigError> {
        if !self.storage.exists(&self.data_dir) {
            self.storage.create_dir_all(&self.data_dir)?;
        }
        if let Some(parent) = self.config_file.parent() {
            self.storage.create_dir_all(parent)?;
        }
        if self.storage.exists(&self.config_file) {
            return Ok(false);
        }

        match self
            .storage
            .copy_resource_to_path(&self.resource_id, &self.config_file)
        {
            Ok(()) => {
                debug!(path = %self.config_file.display(), "copied default configuration");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ConfigError::ResourceMissing(self.resource_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reload defaults and the user file.
    ///
    /// On failure the previously loaded configuration is left in place and
    /// later saves are refused until a load succeeds.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let defaults = self.load_defaults();

        let result = if self.storage.exists(&self.config_file) {
            self.config
                .load_path(&self.storage, &self.config_file, defaults)
        } else {
            self.config.load_str(EMPTY_DOCUMENT, defaults)
        };

        match &result {
            Ok(()) => self.state = LoadState::Loaded,
            Err(e) => {
                self.state = LoadState::Failed;
                error!(path = %self.config_file.display(), error = %e, "can't load config");
            }
        }
        result
    }

    /// Write the configuration to its file, loading it first if needed.
    ///
    /// If the last load failed it is retried; its error is returned and the
    /// file is left untouched.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if self.state != LoadState::Loaded {
            self.reload()?;
        }
        if let Some(parent) = self.config_file.parent() {
            self.storage.create_dir_all(parent)?;
        }
        let result = self.config.save_path(&self.storage, &self.config_file);
        if let Err(e) = &result {
            error!(path = %self.config_file.display(), error = %e, "could not save config");
        }
        result
    }

    pub fn config(&mut self) -> &FileConfiguration {
        self.ensure_loaded();
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FileConfiguration {
        self.ensure_loaded();
        &mut self.config
    }

    fn ensure_loaded(&mut self) {
        if self.state == LoadState::NotLoaded {
            // Logged by reload; the state records the failure for save
            let _ = self.reload();
        }
    }

    fn load_defaults(&self) -> Option<Arc<FileConfiguration>> {
        let bytes = match self.storage.read_resource(&self.resource_id) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                warn!(resource = %self.resource_id, "can't find bundled resource, continuing without defaults");
                return None;
            }
            Err(e) => {
                warn!(resource = %self.resource_id, error = %e, "can't read bundled resource");
                return None;
            }
        };

        let mut defaults = FileConfiguration::new();
        match defaults.load_reader(bytes.as_slice(), None) {
            Ok(()) => Some(Arc::new(defaults)),
            Err(e) => {
                warn!(resource = %self.resource_id, error = %e, "invalid bundled resource");
                None
            }
        }
    }
}
