//! File-backed configuration
//!
//! A [`FileConfiguration`] owns a document tree, its options and header, and
//! optionally a read-only defaults parent. Loading replaces the tree only on
//! success; saving renders the header, merges defaults when enabled, and
//! serializes the tree.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use layercfg_document::{Document, DocumentProvider, PathAccess, Value, YamlProvider};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::header::{parse_header, render_header};
use super::merge::merge_defaults;
use super::options::ConfigurationOptions;
use crate::error::ConfigError;
use crate::storage::Storage;

const UTF8_BOM: &str = "\u{feff}";

/// Where a configuration was loaded from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigSource {
    /// File path
    pub path: String,

    /// SHA-256 digest of raw file bytes
    pub digest: String,

    /// When the file was read
    pub loaded_at: DateTime<Utc>,
}

/// A configuration document with options, header and defaults parent
#[derive(Debug, Default)]
pub struct FileConfiguration {
    root: Document,
    defaults: Option<Arc<FileConfiguration>>,
    options: ConfigurationOptions,
    source: Option<ConfigSource>,
}

impl FileConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from text.
    ///
    /// The tree and defaults parent are replaced only when parsing succeeds. A
    /// non-empty header found in `contents` replaces the own header.
    pub fn load_str(
        &mut self,
        contents: &str,
        defaults: Option<Arc<FileConfiguration>>,
    ) -> Result<(), ConfigError> {
        let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
        let root = YamlProvider.parse(contents).map_err(ConfigError::Invalid)?;

        let header = parse_header(contents);
        if !header.is_empty() {
            self.options.set_header(Some(header));
        }

        debug!(keys = root.len(), has_defaults = defaults.is_some(), "loaded configuration");
        self.root = root;
        self.defaults = defaults;
        Ok(())
    }

    /// Load from a reader, decoding UTF-8
    pub fn load_reader<R: Read>(
        &mut self,
        mut reader: R,
        defaults: Option<Arc<FileConfiguration>>,
    ) -> Result<(), ConfigError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let contents = String::from_utf8(bytes)?;
        self.load_str(&contents, defaults)
    }

    /// Load a file through `storage`, recording its provenance
    pub fn load_path(
        &mut self,
        storage: &dyn Storage,
        path: &Path,
        defaults: Option<Arc<FileConfiguration>>,
    ) -> Result<(), ConfigError> {
        let bytes = storage.read_all(path)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)?;
        self.load_str(&contents, defaults)?;
        self.source = Some(ConfigSource {
            path: path.to_string_lossy().to_string(),
            digest,
            loaded_at: Utc::now(),
        });
        Ok(())
    }

    /// Render the document, merging defaults into the tree first when
    /// `copy_defaults` is enabled.
    pub fn save_to_string(&mut self) -> Result<String, ConfigError> {
        let mut out = self.build_header();

        if self.options.copy_defaults() {
            if let Some(defaults) = &self.defaults {
                merge_defaults(&mut self.root, &defaults.root);
            }
        }

        let body = YamlProvider
            .serialize(&self.root)
            .map_err(ConfigError::Serialize)?;
        out.push_str(&body);
        Ok(out)
    }

    pub fn save_writer<W: Write>(&mut self, mut writer: W) -> Result<(), ConfigError> {
        let text = self.save_to_string()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Save to a file through `storage`
    pub fn save_path(&mut self, storage: &dyn Storage, path: &Path) -> Result<(), ConfigError> {
        let text = self.save_to_string()?;
        storage.write_all(path, text.as_bytes())?;
        debug!(path = %path.display(), bytes = text.len(), "saved configuration");
        Ok(())
    }

    /// Header text to write before the body.
    ///
    /// With `copy_header`, a non-empty header built by the defaults parent
    /// takes over entirely. Otherwise the own header is rendered; no own
    /// header gives an empty string.
    pub fn build_header(&self) -> String {
        if self.options.copy_header() {
            if let Some(defaults) = &self.defaults {
                let inherited = defaults.build_header();
                if !inherited.is_empty() {
                    return inherited;
                }
            }
        }

        match self.options.header() {
            Some(header) => render_header(header),
            None => String::new(),
        }
    }

    pub fn root(&self) -> &Document {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Document {
        &mut self.root
    }

    pub fn defaults(&self) -> Option<&Arc<FileConfiguration>> {
        self.defaults.as_ref()
    }

    pub fn options(&self) -> &ConfigurationOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ConfigurationOptions {
        &mut self.options
    }

    pub fn source(&self) -> Option<&ConfigSource> {
        self.source.as_ref()
    }

    /// Value at `path`, falling back to the defaults parent
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.root.get_path(path).or_else(|| self.get_default(path))
    }

    /// Value at `path` in the defaults parent only
    pub fn get_default(&self, path: &str) -> Option<&Value> {
        self.defaults.as_ref().and_then(|d| d.get(path))
    }

    /// Section at `path`, falling back to the defaults parent
    pub fn section(&self, path: &str) -> Option<&Document> {
        self.get(path).and_then(Value::as_section)
    }

    /// Set the value at `path`; `Value::Null` removes it
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        self.root.set_path(path, value);
    }

    pub fn remove(&mut self, path: &str) -> Option<Value> {
        self.root.remove_path(path)
    }

    /// Top-level keys of the own tree
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }
}

impl PathAccess for FileConfiguration {
    fn value(&self, path: &str) -> Option<&Value> {
        self.get(path)
    }
}

impl From<FileConfiguration> for Value {
    fn from(config: FileConfiguration) -> Self {
        Value::Section(config.root)
    }
}
