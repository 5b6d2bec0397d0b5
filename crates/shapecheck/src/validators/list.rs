//! List validator

use serde_json::{Value, json};

use crate::core::{Locator, Rule, Validate, Validated};

/// Validates that a value is a JSON array whose every element matches one
/// element rule.
///
/// All invalid elements are reported in a single pass, each at its own index
/// path, rather than stopping at the first mismatch.
#[derive(Debug)]
pub struct ListValidator {
    of: Rule,
}

impl ListValidator {
    /// The element rule.
    #[must_use]
    pub fn element_rule(&self) -> &dyn Validate {
        self.of.as_ref()
    }
}

impl Validate for ListValidator {
    fn schema(&self) -> Value {
        json!({"$type": "list", "$of": self.of.schema()})
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        let Some(data @ Value::Array(items)) = value else {
            return self.wrong_type(locator, value);
        };

        let mut result = Validated::success(data.clone());
        for (index, item) in items.iter().enumerate() {
            let traversed = locator.traverse(index.to_string());
            if !self.of.validate(Some(item), &traversed).is_success() {
                result = result.merge(self.of.wrong_type(&traversed, Some(item)));
            }
        }
        result
    }
}

/// Creates a [`ListValidator`] with the given element rule.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let rule = list(number());
/// assert!(validate(&json!([1, 2, 3]), &rule).is_success());
/// assert!(!validate(&json!([1, "a"]), &rule).is_success());
/// ```
#[must_use]
pub fn list(of: impl Validate + 'static) -> ListValidator {
    ListValidator { of: Box::new(of) }
}
