//! Per-document options

use serde::{Deserialize, Serialize};

/// Options controlling how a configuration is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationOptions {
    /// Own header text (None: no header block)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<String>,

    /// Render the defaults parent's header instead of the own one (default: true)
    #[serde(default = "default_copy_header")]
    copy_header: bool,

    /// Merge defaults into the tree on save (default: false)
    #[serde(default)]
    copy_defaults: bool,
}

fn default_copy_header() -> bool {
    true
}

impl Default for ConfigurationOptions {
    fn default() -> Self {
        Self {
            header: None,
            copy_header: default_copy_header(),
            copy_defaults: false,
        }
    }
}

impl ConfigurationOptions {
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn set_header(&mut self, header: Option<impl Into<String>>) -> &mut Self {
        self.header = header.map(Into::into);
        self
    }

    pub fn copy_header(&self) -> bool {
        self.copy_header
    }

    pub fn set_copy_header(&mut self, value: bool) -> &mut Self {
        self.copy_header = value;
        self
    }

    pub fn copy_defaults(&self) -> bool {
        self.copy_defaults
    }

    pub fn set_copy_defaults(&mut self, value: bool) -> &mut Self {
        self.copy_defaults = value;
        self
    }
}
