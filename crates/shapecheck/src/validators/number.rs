//! Number validator

use serde_json::{Number, Value, json};

use crate::core::messages::{fill, messages};
use crate::core::{Locator, Validate, Validated};

/// Validates that a value is a JSON number, optionally restricted to an
/// explicit set of admissible values.
///
/// Set membership compares numerically (`1` admits `1.0`) but never coerces
/// across JSON types: the string `"1"` is always a wrong type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValidator {
    allowed: Vec<Number>,
}

impl NumberValidator {
    fn admits(&self, candidate: &Number) -> bool {
        self.allowed
            .iter()
            .any(|allowed| allowed.as_f64() == candidate.as_f64())
    }
}

impl Validate for NumberValidator {
    fn schema(&self) -> Value {
        json!("number")
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        match value {
            Some(data @ Value::Number(n)) => {
                if self.allowed.is_empty() || self.admits(n) {
                    Validated::success(data.clone())
                } else {
                    let listed = self
                        .allowed
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    Validated::reject(
                        locator,
                        fill(&messages().not_among_numbers, &[("numbers", &listed)]),
                        self.schema(),
                        value,
                    )
                }
            }
            other => self.wrong_type(locator, other),
        }
    }
}

/// Creates a [`NumberValidator`] accepting any JSON number.
#[must_use]
pub fn number() -> NumberValidator {
    NumberValidator::default()
}

/// Creates a [`NumberValidator`] restricted to the given values.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let rule = number_among([200, 404]);
/// assert!(validate(&json!(404), &rule).is_success());
/// assert!(!validate(&json!(500), &rule).is_success());
/// ```
#[must_use]
pub fn number_among<I>(allowed: I) -> NumberValidator
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    NumberValidator {
        allowed: allowed.into_iter().map(Into::into).collect(),
    }
}
