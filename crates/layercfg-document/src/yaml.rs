//! YAML document provider.
//!
//! Converts between YAML text and [`Document`] trees using `serde_yaml`. The
//! exact textual layout (indentation, quoting, list style) is whatever
//! `serde_yaml` emits.

use serde_yaml::{Mapping, Number};

use crate::document::Document;
use crate::error::DocumentError;
use crate::value::Value;

/// Parses and serializes configuration documents.
pub trait DocumentProvider: Send + Sync {
    /// Parse text into a document. The root must be a mapping.
    fn parse(&self, text: &str) -> Result<Document, DocumentError>;

    /// Serialize a document into canonical text.
    fn serialize(&self, doc: &Document) -> Result<String, DocumentError>;
}

/// [`DocumentProvider`] backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlProvider;

impl DocumentProvider for YamlProvider {
    fn parse(&self, text: &str) -> Result<Document, DocumentError> {
        if is_blank_document(text) {
            return Ok(Document::new());
        }

        match from_yaml(serde_yaml::from_str(text)?)? {
            Value::Section(doc) => Ok(doc),
            Value::Null => Ok(Document::new()),
            _ => Err(DocumentError::NotAMapping),
        }
    }

    fn serialize(&self, doc: &Document) -> Result<String, DocumentError> {
        Ok(serde_yaml::to_string(&section_to_yaml(doc))?)
    }
}

/// Only blank lines and comments, which YAML treats as an empty stream
fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim_start();
        line.is_empty() || line.starts_with('#')
    })
}

fn from_yaml(yaml: serde_yaml::Value) -> Result<Value, DocumentError> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => number_to_value(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut doc = Document::new();
            for (key, value) in map {
                doc.insert(key_to_string(key)?, from_yaml(value)?);
            }
            Value::Section(doc)
        }
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Integer(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        Value::Null
    }
}

fn key_to_string(key: serde_yaml::Value) -> Result<String, DocumentError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(DocumentError::UnsupportedKey(format!("{:?}", other))),
    }
}

fn section_to_yaml(doc: &Document) -> serde_yaml::Value {
    let mut map = Mapping::new();
    for (key, value) in doc.iter() {
        map.insert(serde_yaml::Value::String(key.to_string()), to_yaml(value));
    }
    serde_yaml::Value::Mapping(map)
}

fn to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Integer(i) => serde_yaml::Value::Number(Number::from(*i)),
        Value::Float(f) => serde_yaml::Value::Number(Number::from(*f)),
        Value::Char(c) => serde_yaml::Value::String(c.to_string()),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Sequence(items) => serde_yaml::Value::Sequence(items.iter().map(to_yaml).collect()),
        Value::Section(doc) => section_to_yaml(doc),
    }
}
