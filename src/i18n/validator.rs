//! Catalog validation.
//!
//! Compares a translated catalog against the reference (Spanish) catalog so
//! that keys, list shapes and `{placeholder}` tokens stay in sync.

use crate::i18n::translator::placeholder_regex;
use crate::i18n::{TranslationDocument, TranslationValue};
use std::collections::{BTreeMap, BTreeSet};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that would surface as raw keys or broken copy on the site
    pub errors: Vec<String>,

    /// Differences that are likely mistakes but still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate `candidate` against `reference`.
    ///
    /// # Errors reported
    /// - key present in the reference but missing from the candidate
    /// - list in one catalog where the other has a scalar
    ///
    /// # Warnings reported
    /// - key only present in the candidate
    /// - different `{placeholder}` sets on a text value
    /// - lists of different length
    pub fn validate(
        reference: &TranslationDocument,
        candidate: &TranslationDocument,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_leaves: BTreeMap<_, _> = reference.leaves().into_iter().collect();
        let candidate_leaves: BTreeMap<_, _> = candidate.leaves().into_iter().collect();

        for (path, expected) in &reference_leaves {
            let Some(actual) = candidate_leaves.get(path) else {
                report.errors.push(format!("Missing key: {}", path));
                continue;
            };

            match (expected, actual) {
                (TranslationValue::List(want), TranslationValue::List(got)) => {
                    if want.len() != got.len() {
                        report.warnings.push(format!(
                            "List length mismatch at {}: reference has {}, translation has {}",
                            path,
                            want.len(),
                            got.len()
                        ));
                    }
                }
                (TranslationValue::List(_), _) | (_, TranslationValue::List(_)) => {
                    report.errors.push(format!(
                        "Type mismatch at {}: reference is {}, translation is {}",
                        path,
                        expected.kind(),
                        actual.kind()
                    ));
                }
                (TranslationValue::Text(want), TranslationValue::Text(got)) => {
                    let want_tokens = Self::extract_placeholders(want);
                    let got_tokens = Self::extract_placeholders(got);
                    if want_tokens != got_tokens {
                        report.warnings.push(format!(
                            "Placeholder mismatch at {}: reference has {:?}, translation has {:?}",
                            path, want_tokens, got_tokens
                        ));
                    }
                }
                _ => {}
            }
        }

        for path in candidate_leaves.keys() {
            if !reference_leaves.contains_key(path) {
                report.warnings.push(format!("Extra key: {}", path));
            }
        }

        report
    }

    /// Extract the distinct `{name}` tokens of a template
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        placeholder_regex()
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}
