//! Key-order normalization
//!
//! After a merge, sibling keys are rewritten to follow the defaults order,
//! with keys that only exist in the user tree appended in their original
//! relative order. Values are never changed.

use layercfg_document::Document;
use tracing::debug;

/// Reorder the direct children of `user` to match `defaults`.
///
/// Returns `false` without touching `user` when it does not hold every
/// default key (the merge postcondition was not met). Returns `true` when the
/// order already matched or was rebuilt.
pub fn reorder_keys(user: &mut Document, defaults: &Document) -> bool {
    if user.len() < defaults.len() {
        return false;
    }
    if !defaults.keys().all(|key| user.contains_key(key)) {
        return false;
    }

    let aligned = user.keys().zip(defaults.keys()).all(|(u, d)| u == d);
    if aligned {
        return true;
    }

    debug!(keys = user.len(), "rebuilding key order from defaults");

    let mut remaining: Vec<_> = std::mem::take(user).into_iter().collect();
    for key in defaults.keys() {
        if let Some(index) = remaining.iter().position(|(k, _)| k == key) {
            let (key, value) = remaining.remove(index);
            user.insert(key, value);
        }
    }
    for (key, value) in remaining {
        user.insert(key, value);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(keys: &[&str]) -> Document {
        keys.iter()
            .enumerate()
            .map(|(i, k)| (k.to_string(), i as i64))
            .collect()
    }

    fn keys(doc: &Document) -> Vec<&str> {
        doc.keys().collect()
    }

    #[test]
    fn test_already_aligned_is_noop() {
        let mut user = doc(&["a", "b", "extra"]);
        let before = user.clone();
        let defaults = doc(&["a", "b"]);

        assert!(reorder_keys(&mut user, &defaults));
        assert_eq!(user, before);
    }

    #[test]
    fn test_scrambled_order_rebuilt() {
        let mut user = doc(&["x", "c", "a", "y", "b"]);
        let defaults = doc(&["a", "b", "c"]);

        assert!(reorder_keys(&mut user, &defaults));
        assert_eq!(keys(&user), vec!["a", "b", "c", "x", "y"]);
    }

    #[test]
    fn test_values_follow_their_keys() {
        let mut user = doc(&["b", "a"]);
        let defaults = doc(&["a", "b"]);

        reorder_keys(&mut user, &defaults);

        assert_eq!(user.get("b"), Some(&layercfg_document::Value::Integer(0)));
        assert_eq!(user.get("a"), Some(&layercfg_document::Value::Integer(1)));
    }

    #[test]
    fn test_missing_default_key_aborts() {
        let mut user = doc(&["b", "a", "z"]);
        let before = user.clone();
        let defaults = doc(&["a", "b", "c"]);

        assert!(!reorder_keys(&mut user, &defaults));
        assert_eq!(user, before);
    }

    #[test]
    fn test_fewer_user_keys_aborts() {
        let mut user = doc(&["a"]);
        let defaults = doc(&["a", "b"]);

        assert!(!reorder_keys(&mut user, &defaults));
        assert_eq!(keys(&user), vec!["a"]);
    }

    #[test]
    fn test_does_not_descend_into_sections() {
        let mut inner = doc(&["q", "p"]);
        let mut user = Document::new();
        user.insert("s", inner.clone());
        let mut defaults = Document::new();
        inner = doc(&["p", "q"]);
        defaults.insert("s", inner);

        assert!(reorder_keys(&mut user, &defaults));
        assert_eq!(keys(user.section("s").unwrap()), vec!["q", "p"]);
    }
}
