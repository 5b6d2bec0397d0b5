//! The validator capability contract
//!
//! Every schema node implements [`Validate`]: it can describe itself as a
//! JSON schema fragment and check a value at a given path. The variant set is
//! closed — scalar validators in [`crate::validators`], the Or combinator in
//! [`crate::combinators`] — and composites own their children by value as
//! boxed [`Rule`]s, constructed once and reused across calls.

use serde::Serialize;
use serde_json::Value;

use crate::core::error::Validated;
use crate::core::locator::Locator;
use crate::core::messages::{fill, messages};

/// A schema node: a self-description plus a validation operation.
///
/// `value` is `None` when the checked position is absent from the input
/// (a missing object property); only the Undefined validator accepts
/// absence. The driver always passes `Some`.
///
/// Implementations hold no per-call state, so one instance may serve any
/// number of concurrent validations.
pub trait Validate: std::fmt::Debug + Send + Sync {
    /// The JSON schema fragment describing this rule.
    ///
    /// Used for documentation and for the `expected` field of errors, never
    /// by the validation logic itself.
    fn schema(&self) -> Value;

    /// Checks `value` at the path recorded in `locator`.
    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated;

    /// Compact textual form of the schema fragment, used in messages.
    fn describe(&self) -> String {
        match self.schema() {
            Value::String(name) => name,
            other => other.to_string(),
        }
    }

    /// Pretty, 4-space-indented rendering of the schema fragment.
    fn format_schema(&self) -> String {
        let schema = self.schema();
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        if schema.serialize(&mut serializer).is_err() {
            return schema.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// The standard wrong-type failure for this rule.
    ///
    /// Composite validators call this on a child rule to report a rejected
    /// property or element at its traversed location.
    fn wrong_type(&self, locator: &Locator, value: Option<&Value>) -> Validated {
        Validated::reject(
            locator,
            fill(&messages().not_type, &[("type", &self.describe())]),
            self.schema(),
            value,
        )
    }
}

/// An owned schema node, the child-rule type of composite validators.
pub type Rule = Box<dyn Validate>;

impl Validate for Rule {
    fn schema(&self) -> Value {
        self.as_ref().schema()
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        self.as_ref().validate(value, locator)
    }

    fn describe(&self) -> String {
        self.as_ref().describe()
    }

    fn format_schema(&self) -> String {
        self.as_ref().format_schema()
    }

    fn wrong_type(&self, locator: &Locator, value: Option<&Value>) -> Validated {
        self.as_ref().wrong_type(locator, value)
    }
}

/// Extension methods for composing validators.
///
/// Automatically implemented for every sized [`Validate`] type.
pub trait ValidateExt: Validate + Sized + 'static {
    /// Boxes the validator into a [`Rule`] for use as a composite child.
    fn boxed(self) -> Rule {
        Box::new(self)
    }

    /// Combines two validators into an ordered alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapecheck::prelude::*;
    /// use serde_json::json;
    ///
    /// let rule = number().or(string());
    /// assert!(validate(&json!(5), &rule).is_success());
    /// assert!(validate(&json!("x"), &rule).is_success());
    /// assert!(!validate(&json!(true), &rule).is_success());
    /// ```
    fn or<V: Validate + 'static>(self, other: V) -> crate::combinators::OrValidator {
        crate::combinators::OrValidator::new(vec![self.boxed(), other.boxed()])
    }
}

impl<T: Validate + Sized + 'static> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct AnyNumber;

    impl Validate for AnyNumber {
        fn schema(&self) -> Value {
            json!("number")
        }

        fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
            match value {
                Some(data @ Value::Number(_)) => Validated::success(data.clone()),
                other => self.wrong_type(locator, other),
            }
        }
    }

    #[test]
    fn describe_unquotes_scalar_fragments() {
        assert_eq!(AnyNumber.describe(), "number");
    }

    #[test]
    fn wrong_type_uses_the_template() {
        let locator = Locator::root("*");
        let result = AnyNumber.wrong_type(&locator, Some(&json!("x")));
        assert_eq!(
            result.errors()[0].message,
            "Expected value to be of type: number"
        );
        assert_eq!(result.errors()[0].expected, json!("number"));
    }

    #[test]
    fn format_schema_indents_with_four_spaces() {
        #[derive(Debug)]
        struct Fragment;
        impl Validate for Fragment {
            fn schema(&self) -> Value {
                json!({"$type": "object"})
            }
            fn validate(&self, _: Option<&Value>, _: &Locator) -> Validated {
                Validated::success(Value::Null)
            }
        }

        assert_eq!(
            Fragment.format_schema(),
            "{\n    \"$type\": \"object\"\n}"
        );
    }

    #[test]
    fn boxed_rule_delegates() {
        let rule = AnyNumber.boxed();
        let locator = Locator::root("*");
        assert!(rule.validate(Some(&json!(1)), &locator).is_success());
        assert_eq!(rule.describe(), "number");
    }
}
