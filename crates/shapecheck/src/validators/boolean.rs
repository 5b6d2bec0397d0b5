//! Boolean validator

use serde_json::{Value, json};

use crate::core::{Locator, Validate, Validated};

/// Validates that a value is a JSON boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanValidator;

impl Validate for BooleanValidator {
    fn schema(&self) -> Value {
        json!("boolean")
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        match value {
            Some(data @ Value::Bool(_)) => Validated::success(data.clone()),
            other => self.wrong_type(locator, other),
        }
    }
}

/// Creates a [`BooleanValidator`].
#[must_use]
pub fn boolean() -> BooleanValidator {
    BooleanValidator
}
