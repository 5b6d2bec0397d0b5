//! OR combinator - ordered alternatives
//!
//! An [`OrValidator`] accepts a value that matches at least one of several
//! alternative rules. Alternatives are tried in order and the first match
//! wins, so the order decides which result is returned when several would
//! match. When every alternative rejects, a single aggregate error is
//! emitted; the individual failure details are not reported.

use serde_json::{Value, json};

use crate::core::messages::{fill, messages};
use crate::core::{Locator, Rule, Validate, Validated};
use crate::validators::nullable::undefined;

/// Validates that a value matches at least one of the alternative rules.
#[derive(Debug)]
pub struct OrValidator {
    rules: Vec<Rule>,
}

impl OrValidator {
    /// Creates an [`OrValidator`] from ordered alternatives.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The alternatives, in the order they are tried.
    #[must_use]
    pub fn alternatives(&self) -> &[Rule] {
        &self.rules
    }

    /// Chains one more alternative after the existing ones.
    #[must_use]
    pub fn or<V: Validate + 'static>(mut self, other: V) -> Self {
        self.rules.push(Box::new(other));
        self
    }
}

impl Validate for OrValidator {
    fn schema(&self) -> Value {
        let rules: Vec<Value> = self.rules.iter().map(Validate::schema).collect();
        json!({"$type": "or", "$rules": rules})
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        for rule in &self.rules {
            let result = rule.validate(value, locator);
            if result.is_success() {
                return result;
            }
        }

        let listed = self
            .rules
            .iter()
            .map(Validate::describe)
            .collect::<Vec<_>>()
            .join(", ");
        Validated::reject(
            locator,
            fill(&messages().not_among_rules, &[("rules", &listed)]),
            self.schema(),
            value,
        )
    }
}

/// Creates an [`OrValidator`] from a dynamic list of alternatives.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let rule = one_of([null().boxed(), number().boxed()]);
/// assert!(validate(&json!(null), &rule).is_success());
/// assert!(validate(&json!(5), &rule).is_success());
/// assert!(!validate(&json!("5"), &rule).is_success());
/// ```
#[must_use]
pub fn one_of<I: IntoIterator<Item = Rule>>(rules: I) -> OrValidator {
    OrValidator::new(rules.into_iter().collect())
}

/// Marks a rule optional: the absence value or a match both pass.
///
/// This is sugar for `one_of([undefined(), rule])`. The Object validator's
/// requiredness probe accepts absence through the `undefined` alternative,
/// so a property under this rule may be left out of the data.
#[must_use]
pub fn optional(rule: impl Validate + 'static) -> OrValidator {
    OrValidator::new(vec![Box::new(undefined()), Box::new(rule)])
}
