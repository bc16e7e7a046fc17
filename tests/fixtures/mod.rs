//! Test fixtures for golden-file assertions
//!
//! YAML documents under `tests/fixtures/yaml`:
//! - plugin-resource.yml: bundled defaults with a two-line header
//! - user-edited.yml: a hand-edited file with a wrong type, a missing
//!   section, an extra key and keys out of order
//! - expected-with-default.yml: user-edited.yml reconciled against the defaults
//! - invalid.yml: broken flow collections

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const PLUGIN_RESOURCE: &str = "plugin-resource.yml";
pub const USER_EDITED: &str = "user-edited.yml";
pub const EXPECTED_WITH_DEFAULT: &str = "expected-with-default.yml";
pub const INVALID: &str = "invalid.yml";

/// Directory holding the YAML fixtures
pub fn yaml_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/yaml")
}

/// Path to a single YAML fixture
pub fn yaml_path(name: &str) -> PathBuf {
    yaml_dir().join(name)
}

/// Contents of a YAML fixture
pub fn read_yaml(name: &str) -> String {
    let path = yaml_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_exist() {
        for name in [PLUGIN_RESOURCE, USER_EDITED, EXPECTED_WITH_DEFAULT, INVALID] {
            let path = yaml_path(name);
            assert!(path.exists(), "Fixture not found at {:?}", path);
        }
    }
}
