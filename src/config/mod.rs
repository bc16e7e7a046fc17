//! Defaults reconciliation
//!
//! Loading and saving of a configuration against a defaults configuration:
//! 1. Merge: fill missing or mistyped user values from defaults
//! 2. Reorder: align user key order with defaults, extras last
//! 3. Header: extract the leading comment block, render it back on save

mod file;
mod header;
mod merge;
mod options;
mod reorder;

pub use file::{ConfigSource, FileConfiguration};
pub use header::{parse_header, render_header, COMMENT_PREFIX};
pub use merge::merge_defaults;
pub use options::ConfigurationOptions;
pub use reorder::reorder_keys;
