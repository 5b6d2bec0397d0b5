//! Top-level validation entry points

use serde_json::Value;

use crate::core::{Locator, Validate, Validated};

/// Default root segment for error locations.
pub const ROOT_NAME: &str = "*";

/// Validates `data` against `rule`, reporting locations under the root
/// segment `*`.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let result = validate(&json!(5), &number());
/// assert!(result.is_success());
///
/// let result = validate(&json!("x"), &number());
/// assert_eq!(result.errors()[0].location, "*");
/// ```
pub fn validate(data: &Value, rule: &dyn Validate) -> Validated {
    validate_named(data, rule, ROOT_NAME)
}

/// Validates `data` against `rule`, reporting locations under `name`.
///
/// Builds the root [`Locator`], invokes the rule, and returns the result
/// unmodified. The success/errors invariant is checked defensively: a
/// disagreement indicates a defect in a validator implementation and is
/// logged loudly, never silently corrected.
pub fn validate_named(data: &Value, rule: &dyn Validate, name: &str) -> Validated {
    let locator = Locator::root(name);
    let result = rule.validate(Some(data), &locator);

    if result.is_success() != result.errors().is_empty() {
        tracing::error!(
            schema = %rule.describe(),
            errors = result.errors().len(),
            "validation result violates the success/errors invariant; \
             this is a defect in a validator implementation"
        );
    }

    result
}
