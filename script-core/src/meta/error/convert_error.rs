/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::value::ScriptValue;

/// Represents errors that can occur when converting a [`ScriptValue`] to a native value.
///
/// To create user-defined errors, you can use [`ConvertError::default()`] or [`ConvertError::new("message")`][Self::new].
#[derive(Debug)]
pub struct ConvertError {
    kind: ErrorKind,
    value: Option<String>,
}

impl ConvertError {
    /// Construct with a user-defined message.
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Custom(Some(user_message.into())),
            value: None,
        }
    }

    /// The value has a different dynamic type than `expected`.
    pub fn wrong_type(expected: &'static str, value: &ScriptValue) -> Self {
        Self {
            kind: ErrorKind::WrongType {
                expected,
                actual: value.type_name(),
            },
            value: Some(format!("{value:?}")),
        }
    }

    /// Attributes this error to reading the property `name` of an object.
    pub fn in_property(self, name: &str) -> Self {
        Self {
            kind: ErrorKind::InProperty {
                name: name.to_owned(),
                cause: Box::new(self),
            },
            value: None,
        }
    }

    /// Debug representation of the value that failed to convert, if one was recorded.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Property path of a nested failure, outermost first, e.g. `["origin", "x"]`.
    pub fn property_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;

        while let ErrorKind::InProperty { name, cause } = &current.kind {
            path.push(name.as_str());
            current = &**cause;
        }

        path
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(value) = &self.value {
            write!(f, ": {value}")?;
        }

        Ok(())
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ErrorKind::InProperty { cause, .. } => Some(&**cause),
            _ => None,
        }
    }
}

impl Default for ConvertError {
    /// Create a custom error, without any description.
    fn default() -> Self {
        Self {
            kind: ErrorKind::Custom(None),
            value: None,
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
    InProperty {
        name: String,
        cause: Box<ConvertError>,
    },
    Custom(Option<String>),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongType { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            Self::InProperty { name, cause } => write!(f, "property `{name}`: {cause}"),
            Self::Custom(Some(message)) => write!(f, "{message}"),
            Self::Custom(None) => write!(f, "custom error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_property_message() {
        let inner = ConvertError::wrong_type("number", &ScriptValue::from("abc"));
        let err = inner.in_property("x").in_property("origin");

        assert_eq!(err.property_path(), vec!["origin", "x"]);
        assert_eq!(
            err.to_string(),
            "property `origin`: property `x`: expected number, got string: \"abc\""
        );
        assert!(err.source().is_some());
    }
}
