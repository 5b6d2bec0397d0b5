//! String validator

use serde_json::{Value, json};

use crate::core::messages::{fill, messages};
use crate::core::{Locator, Validate, Validated};

/// How a [`StringValidator`] constrains admissible values.
#[derive(Debug, Clone)]
enum StringConstraint {
    /// Any JSON string.
    Any,
    /// Exactly one of the listed strings, compared without coercion.
    Among(Vec<String>),
    /// Any string matching the pattern.
    Matching(regex::Regex),
}

/// Validates that a value is a JSON string, optionally restricted to an
/// explicit set of admissible values or to a regex.
#[derive(Debug, Clone)]
pub struct StringValidator {
    constraint: StringConstraint,
}

impl Validate for StringValidator {
    fn schema(&self) -> Value {
        json!("string")
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        let Some(data @ Value::String(text)) = value else {
            return self.wrong_type(locator, value);
        };

        match &self.constraint {
            StringConstraint::Any => Validated::success(data.clone()),
            StringConstraint::Among(allowed) => {
                if allowed.iter().any(|candidate| candidate == text) {
                    Validated::success(data.clone())
                } else {
                    let listed = allowed
                        .iter()
                        .map(|candidate| format!("\"{candidate}\""))
                        .collect::<Vec<_>>()
                        .join(", ");
                    Validated::reject(
                        locator,
                        fill(&messages().not_among_strings, &[("strings", &listed)]),
                        self.schema(),
                        value,
                    )
                }
            }
            StringConstraint::Matching(pattern) => {
                if pattern.is_match(text) {
                    Validated::success(data.clone())
                } else {
                    Validated::reject(
                        locator,
                        fill(&messages().not_regex_match, &[("regex", pattern.as_str())]),
                        self.schema(),
                        value,
                    )
                }
            }
        }
    }
}

/// Creates a [`StringValidator`] accepting any JSON string.
#[must_use]
pub fn string() -> StringValidator {
    StringValidator {
        constraint: StringConstraint::Any,
    }
}

/// Creates a [`StringValidator`] restricted to the given values.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let rule = string_among(["asc", "desc"]);
/// assert!(validate(&json!("asc"), &rule).is_success());
/// assert!(!validate(&json!("up"), &rule).is_success());
/// ```
#[must_use]
pub fn string_among<I>(allowed: I) -> StringValidator
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    StringValidator {
        constraint: StringConstraint::Among(allowed.into_iter().map(Into::into).collect()),
    }
}

/// Creates a [`StringValidator`] restricted to strings matching `pattern`.
///
/// # Errors
///
/// Returns the underlying [`regex::Error`] when the pattern does not parse.
pub fn string_matching(pattern: &str) -> Result<StringValidator, regex::Error> {
    Ok(StringValidator {
        constraint: StringConstraint::Matching(regex::Regex::new(pattern)?),
    })
}
