//! Null and Undefined validators
//!
//! `null` is a present value that is JSON null; `undefined` is the absence
//! of a value altogether (a missing object property). The Object validator
//! infers optionality by probing child rules with the absence value, so
//! `one_of([undefined(), rule])` marks a property optional — see
//! [`crate::combinators::optional`].

use serde_json::{Value, json};

use crate::core::{Locator, Validate, Validated};

/// Validates that a value is JSON null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullValidator;

impl Validate for NullValidator {
    fn schema(&self) -> Value {
        json!("null")
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        match value {
            Some(Value::Null) => Validated::success(Value::Null),
            other => self.wrong_type(locator, other),
        }
    }
}

/// Validates that a value is absent.
///
/// Rejects every present value, including null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndefinedValidator;

impl Validate for UndefinedValidator {
    fn schema(&self) -> Value {
        json!("undefined")
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        match value {
            None => Validated::success(Value::Null),
            present => self.wrong_type(locator, present),
        }
    }
}

/// Creates a [`NullValidator`].
#[must_use]
pub fn null() -> NullValidator {
    NullValidator
}

/// Creates an [`UndefinedValidator`].
#[must_use]
pub fn undefined() -> UndefinedValidator {
    UndefinedValidator
}
