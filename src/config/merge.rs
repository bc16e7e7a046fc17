//! Defaults merge logic
//!
//! Fills a user tree from a defaults tree, in place:
//! - Missing keys: copied from defaults
//! - Sections on both sides: deep-merge by key (recursive)
//! - Default section vs user plain value: default section wins
//! - Scalars/sequences of the same family: user value kept
//! - Scalars/sequences of different families: default wins
//!
//! Keys that only exist in the user tree are never removed. Each merged
//! level is then reordered to follow the defaults key order.

use layercfg_document::{Document, Family, Value};
use tracing::debug;

use super::reorder::reorder_keys;

/// Merge `defaults` into `user`, then reorder every merged level.
pub fn merge_defaults(user: &mut Document, defaults: &Document) {
    merge_level(user, defaults, "");
}

fn merge_level(user: &mut Document, defaults: &Document, path: &str) {
    for (key, default_value) in defaults.iter() {
        let current_path = if path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", path, key)
        };

        let Some(user_value) = user.get_mut(key) else {
            debug!(path = %current_path, "copying missing default");
            user.insert(key, default_value.clone());
            continue;
        };

        match resolve(user_value, default_value) {
            Resolution::Recurse => {
                if let (Value::Section(user_section), Value::Section(default_section)) =
                    (user_value, default_value)
                {
                    merge_level(user_section, default_section, &current_path);
                }
            }
            Resolution::Overwrite => {
                debug!(path = %current_path, "overwriting incompatible user value");
                *user_value = default_value.clone();
            }
            Resolution::Keep => {}
        }
    }

    if !reorder_keys(user, defaults) {
        debug!(path = %path, "skipped reorder, user is missing default keys");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Resolution {
    Recurse,
    Overwrite,
    Keep,
}

/// Decide what happens to a key present on both sides.
fn resolve(user: &Value, default: &Value) -> Resolution {
    match (user, default) {
        (Value::Section(_), Value::Section(_)) => Resolution::Recurse,
        // A default section always wins over a plain user value
        (_, Value::Section(_)) => Resolution::Overwrite,
        (Value::Null, _) => Resolution::Overwrite,
        // A null default carries no type to enforce
        (_, Value::Null) => Resolution::Keep,
        (user, default) if Family::same(user, default) => Resolution::Keep,
        _ => Resolution::Overwrite,
    }
}
