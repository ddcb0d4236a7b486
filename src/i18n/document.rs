//! Immutable translation document and key-path lookup.

use crate::i18n::{I18nError, TranslationValue};
use std::collections::BTreeMap;
use std::path::Path;

/// A parsed translation catalog. The root is always a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationDocument {
    root: TranslationValue,
}

impl TranslationDocument {
    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value.into())
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn from_value(root: TranslationValue) -> Result<Self, I18nError> {
        match root {
            TranslationValue::Map(_) => Ok(Self { root }),
            other => Err(I18nError::InvalidRoot(other.kind())),
        }
    }

    /// A document with no keys; every lookup misses.
    pub fn empty() -> Self {
        Self {
            root: TranslationValue::Map(BTreeMap::new()),
        }
    }

    /// Walk a dot-delimited key path.
    ///
    /// Segments index lists when they parse as a non-negative integer and
    /// name fields on maps. Anything else ends the walk with `None`.
    pub fn get(&self, key_path: &str) -> Option<&TranslationValue> {
        let mut current = &self.root;
        for segment in key_path.split('.') {
            current = match current {
                TranslationValue::List(items) => {
                    let index: usize = segment.parse().ok()?;
                    items.get(index)?
                }
                TranslationValue::Map(fields) => fields.get(segment)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Every leaf of the document with its key path, in key order.
    ///
    /// Lists count as leaves; only maps are descended into.
    pub fn leaves(&self) -> Vec<(String, &TranslationValue)> {
        let mut out = Vec::new();
        collect_leaves(&self.root, String::new(), &mut out);
        out
    }
}

fn collect_leaves<'a>(
    value: &'a TranslationValue,
    prefix: String,
    out: &mut Vec<(String, &'a TranslationValue)>,
) {
    match value {
        TranslationValue::Map(fields) => {
            for (key, child) in fields {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(child, path, out);
            }
        }
        leaf => out.push((prefix, leaf)),
    }
}
