//! Tagged value type for translation documents.

use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A node of a translation document.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<TranslationValue>),
    Map(BTreeMap<String, TranslationValue>),
}

impl TranslationValue {
    /// Short name of the variant, used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationValue::Null => "null",
            TranslationValue::Bool(_) => "boolean",
            TranslationValue::Number(_) => "number",
            TranslationValue::Text(_) => "string",
            TranslationValue::List(_) => "array",
            TranslationValue::Map(_) => "object",
        }
    }

    /// String form of a text, number or boolean node.
    ///
    /// `None` for null, lists and maps: those are not displayable copy.
    pub fn as_display_scalar(&self) -> Option<String> {
        match self {
            TranslationValue::Text(text) => Some(text.clone()),
            TranslationValue::Number(number) => Some(format_number(number)),
            TranslationValue::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

/// Whole floats print without a trailing ".0" so `3.0` and `3` render alike.
fn format_number(number: &Number) -> String {
    if number.is_f64() {
        if let Some(float) = number.as_f64() {
            if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e15 {
                return format!("{}", float as i64);
            }
            return float.to_string();
        }
    }
    number.to_string()
}

impl From<Value> for TranslationValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => TranslationValue::Null,
            Value::Bool(flag) => TranslationValue::Bool(flag),
            Value::Number(number) => TranslationValue::Number(number),
            Value::String(text) => TranslationValue::Text(text),
            Value::Array(items) => {
                TranslationValue::List(items.into_iter().map(TranslationValue::from).collect())
            }
            Value::Object(fields) => TranslationValue::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, TranslationValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&TranslationValue> for Value {
    fn from(value: &TranslationValue) -> Self {
        match value {
            TranslationValue::Null => Value::Null,
            TranslationValue::Bool(flag) => Value::Bool(*flag),
            TranslationValue::Number(number) => Value::Number(number.clone()),
            TranslationValue::Text(text) => Value::String(text.clone()),
            TranslationValue::List(items) => Value::Array(items.iter().map(Value::from).collect()),
            TranslationValue::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for TranslationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationValue::Null => f.write_str("null"),
            TranslationValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            TranslationValue::Map(_) => write!(f, "{}", Value::from(self)),
            scalar => match scalar.as_display_scalar() {
                Some(text) => f.write_str(&text),
                None => Ok(()),
            },
        }
    }
}
