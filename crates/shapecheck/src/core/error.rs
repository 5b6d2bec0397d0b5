//! Validation results and the error-accumulation algebra
//!
//! A [`Validated`] is either `Success` carrying the accepted value or
//! `Failure` carrying every mismatch found in one pass. The invariant
//! "success iff the error list is empty" is enforced by construction: the
//! failure constructors require at least one error and [`Validated::merge`]
//! only produces `Failure` from an input that already is one.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::core::locator::Locator;

/// One mismatch, tagged with the exact path at which it occurred.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Dotted path to the offending value, e.g. `*.items.2`.
    pub location: String,
    /// Human-readable message rendered from the category template.
    pub message: String,
    /// Schema fragment of the rule that rejected the value.
    pub expected: Value,
    /// The rejected input, or `None` when the value was absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationError {
    /// Creates an error at the given location.
    pub fn new(
        locator: &Locator,
        message: impl Into<String>,
        expected: Value,
        value: Option<&Value>,
    ) -> Self {
        Self {
            location: locator.to_string(),
            message: message.into(),
            expected,
            value: value.cloned(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of validating one value against one rule.
///
/// Composite validators build their result by [`merge`](Validated::merge)-ing
/// the results of their sub-checks, concatenating error lists in check order.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    /// The value matched; `data` is the accepted input.
    Success { data: Value },
    /// The value did not match; `errors` is non-empty.
    Failure { errors: Vec<ValidationError> },
}

impl Validated {
    /// Builds a success carrying the accepted value.
    #[must_use]
    pub fn success(data: Value) -> Self {
        Self::Success { data }
    }

    /// Builds a failure carrying exactly one error.
    #[must_use]
    pub fn reject(
        locator: &Locator,
        message: impl Into<String>,
        expected: Value,
        value: Option<&Value>,
    ) -> Self {
        Self::Failure {
            errors: vec![ValidationError::new(locator, message, expected, value)],
        }
    }

    /// Whether the value was accepted.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The accumulated errors; empty exactly when the result is a success.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors } => errors,
        }
    }

    /// The accepted value, if any.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the result, returning the accepted value if any.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the result, returning the accumulated errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            Self::Success { .. } => Vec::new(),
            Self::Failure { errors } => errors,
        }
    }

    /// Combines two results, concatenating error lists in check order.
    ///
    /// Success only if both inputs are; the surviving `data` is the left
    /// side's, so a composite validator seeds the fold with its own input.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success { data }, Self::Success { .. }) => Self::Success { data },
            (Self::Success { .. }, Self::Failure { errors }) => Self::Failure { errors },
            (Self::Failure { errors }, Self::Success { .. }) => Self::Failure { errors },
            (Self::Failure { mut errors }, Self::Failure { errors: more }) => {
                errors.extend(more);
                Self::Failure { errors }
            }
        }
    }

    /// Narrows the accepted value into a concrete type.
    ///
    /// This is the typed counterpart of [`Validated::into_data`]: the value
    /// has already been structurally checked, so a deserialization failure
    /// indicates a schema that is weaker than `T`.
    pub fn into_typed<T: serde::de::DeserializeOwned>(self) -> Result<T, TypedError> {
        match self {
            Self::Success { data } => Ok(serde_json::from_value(data)?),
            Self::Failure { errors } => Err(TypedError::Invalid(errors)),
        }
    }
}

impl fmt::Display for Validated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { .. } => write!(f, "valid"),
            Self::Failure { errors } => {
                writeln!(f, "invalid with {} error(s):", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

/// Error returned by [`Validated::into_typed`].
#[derive(Debug, thiserror::Error)]
pub enum TypedError {
    /// The value did not match the schema.
    #[error("value did not match the schema ({} error(s))", .0.len())]
    Invalid(Vec<ValidationError>),
    /// The value matched the schema but does not deserialize into the
    /// requested type.
    #[error("validated value could not be deserialized: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrong_type_at(locator: &Locator) -> Validated {
        Validated::reject(
            locator,
            "Expected value to be of type: number",
            json!("number"),
            Some(&json!("x")),
        )
    }

    #[test]
    fn success_has_no_errors() {
        let result = Validated::success(json!(5));
        assert!(result.is_success());
        assert!(result.errors().is_empty());
        assert_eq!(result.data(), Some(&json!(5)));
    }

    #[test]
    fn reject_carries_one_error() {
        let locator = Locator::root("*");
        let result = wrong_type_at(&locator);
        assert!(!result.is_success());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].location, "*");
        assert_eq!(result.errors()[0].value, Some(json!("x")));
    }

    #[test]
    fn merge_success_keeps_left_data() {
        let merged = Validated::success(json!({"a": 1})).merge(Validated::success(json!(2)));
        assert_eq!(merged.data(), Some(&json!({"a": 1})));
    }

    #[test]
    fn merge_concatenates_in_check_order() {
        let root = Locator::root("*");
        let first = wrong_type_at(&root.traverse("a"));
        let second = wrong_type_at(&root.traverse("b"));
        let merged = first.merge(second);
        let locations: Vec<_> = merged.errors().iter().map(|e| e.location.clone()).collect();
        assert_eq!(locations, vec!["*.a", "*.b"]);
    }

    #[test]
    fn merge_failure_wins_over_success() {
        let root = Locator::root("*");
        let merged = Validated::success(json!(1)).merge(wrong_type_at(&root));
        assert!(!merged.is_success());
        assert_eq!(merged.errors().len(), 1);

        let merged = wrong_type_at(&root).merge(Validated::success(json!(1)));
        assert!(!merged.is_success());
        assert_eq!(merged.errors().len(), 1);
    }

    #[test]
    fn into_typed_success() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
        }

        let result = Validated::success(json!({"name": "a"}));
        let user: User = result.into_typed().unwrap();
        assert_eq!(user, User { name: "a".into() });
    }

    #[test]
    fn into_typed_failure_keeps_errors() {
        let root = Locator::root("*");
        let result = wrong_type_at(&root);
        match result.into_typed::<i64>() {
            Err(TypedError::Invalid(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn error_serializes_without_absent_value() {
        let root = Locator::root("*");
        let error = ValidationError::new(&root.traverse("name"), "missing", json!("string"), None);
        let serialized = serde_json::to_value(&error).unwrap();
        assert_eq!(
            serialized,
            json!({"location": "*.name", "message": "missing", "expected": "string"})
        );
    }
}
