//! Insertion-ordered configuration document.
//!
//! Key order is observable: it is the order sections are serialized in.
//! Documents are small, so entries live in a plain vector.

use crate::value::Value;

/// Separator between segments of a section path (`a.b.c`).
pub const PATH_SEPARATOR: char = '.';

/// An ordered mapping from string keys to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Direct child lookup (no path splitting)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.position(key).map(move |i| &mut self.entries[i].1)
    }

    /// Insert a direct child.
    ///
    /// An existing key keeps its position and gets the new value; a new key is
    /// appended. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove a direct child; the remaining keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Resolve a dotted path to a value.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let (parent, leaf) = match path.rsplit_once(PATH_SEPARATOR) {
            Some((parent, leaf)) => (self.section(parent)?, leaf),
            None => (self, path),
        };
        parent.get(leaf)
    }

    /// Resolve a dotted path to a nested section.
    pub fn section(&self, path: &str) -> Option<&Document> {
        let mut current = self;
        for part in path.split(PATH_SEPARATOR) {
            current = current.get(part)?.as_section()?;
        }
        Some(current)
    }

    /// Set the value at a dotted path.
    ///
    /// Missing intermediate sections are created; an intermediate holding a
    /// plain value is replaced by an empty section. Setting `Value::Null`
    /// removes the key instead.
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) {
        let value = value.into();
        if value.is_null() {
            self.remove_path(path);
            return;
        }
        match path.rsplit_once(PATH_SEPARATOR) {
            Some((parent, leaf)) => {
                self.section_for(parent).insert(leaf, value);
            }
            None => {
                self.insert(path, value);
            }
        }
    }

    /// Remove the value at a dotted path, returning it.
    pub fn remove_path(&mut self, path: &str) -> Option<Value> {
        match path.rsplit_once(PATH_SEPARATOR) {
            Some((parent, leaf)) => self.section_mut(parent)?.remove(leaf),
            None => self.remove(path),
        }
    }

    /// Mutable access to an existing nested section.
    pub fn section_mut(&mut self, path: &str) -> Option<&mut Document> {
        let mut current = self;
        for part in path.split(PATH_SEPARATOR) {
            current = current.get_mut(part)?.as_section_mut()?;
        }
        Some(current)
    }

    fn section_for(&mut self, path: &str) -> &mut Document {
        let mut current = self;
        for part in path.split(PATH_SEPARATOR) {
            let slot = match current.position(part) {
                Some(i) => &mut current.entries[i].1,
                None => {
                    current.entries.push((part.to_string(), Value::Null));
                    let last = current.entries.len() - 1;
                    &mut current.entries[last].1
                }
            };
            if !slot.is_section() {
                *slot = Value::Section(Document::new());
            }
            current = match slot {
                Value::Section(doc) => doc,
                _ => unreachable!("slot was just replaced by a section"),
            };
        }
        current
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Convert to a JSON object in key order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
