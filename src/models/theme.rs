//! The loaded theme document.
//!
//! A tmTheme is an arbitrary property-list tree. `ThemeDocument` only pins
//! down the two things the converter relies on: the root is a dictionary and
//! it carries a `settings` array of rule entries.

use plist::{Dictionary, Value};

use crate::constants::SETTINGS_KEY;
use crate::error::ConvertError;

/// A theme property list with a dictionary root and a `settings` array.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDocument {
    root: Dictionary,
}

impl ThemeDocument {
    /// Wraps a parsed plist value, checking the expected shape.
    pub fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Dictionary(root) => Self::from_dictionary(root),
            _ => Err(ConvertError::NotADictionary),
        }
    }

    /// Wraps a root dictionary, checking that `settings` is an array.
    pub fn from_dictionary(root: Dictionary) -> Result<Self, ConvertError> {
        match root.get(SETTINGS_KEY) {
            Some(Value::Array(_)) => Ok(Self { root }),
            _ => Err(ConvertError::MissingSettings),
        }
    }

    /// The root dictionary.
    #[must_use]
    pub const fn root(&self) -> &Dictionary {
        &self.root
    }

    /// Mutable access to the root dictionary.
    pub fn root_mut(&mut self) -> &mut Dictionary {
        &mut self.root
    }

    /// The top-level rule list.
    pub fn settings_mut(&mut self) -> Result<&mut Vec<Value>, ConvertError> {
        self.root
            .get_mut(SETTINGS_KEY)
            .and_then(Value::as_array_mut)
            .ok_or(ConvertError::MissingSettings)
    }

    /// Returns a top-level string field, if present and string-typed.
    #[must_use]
    pub fn string_field(&self, key: &str) -> Option<&str> {
        self.root.get(key).and_then(Value::as_string)
    }

    /// Unwraps into a plist value for serialization.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Dictionary(self.root)
    }
}
