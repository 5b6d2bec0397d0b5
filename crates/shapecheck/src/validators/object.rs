//! Object validator
//!
//! The most involved node in the tree: a keyed-structure check followed by
//! two ordered passes over the property rules and the data's own keys.
//! Requiredness is not a declared flag — it is inferred by probing each child
//! rule with the absence value, so `one_of([undefined(), rule])` is the way
//! to mark a property optional.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use crate::core::messages::{fill, messages};
use crate::core::{Locator, Rule, Validate, Validated};
use crate::validators::nullable::UndefinedValidator;

/// Validates that a value is a keyed structure matching a per-property rule
/// set.
///
/// Without a rule set, any JSON object passes. With one, validation runs two
/// passes, accumulating every mismatch:
///
/// 1. for each rule key whose child rejects absence, a missing data key is a
///    `missing property` error at the traversed path;
/// 2. for each data key, a key with no rule is an `unknown property` error,
///    and a key whose child rejects the value is a wrong-type error
///    referencing the child's schema fragment.
#[derive(Debug)]
pub struct ObjectValidator {
    rules: Option<IndexMap<String, Rule>>,
}

impl ObjectValidator {
    fn required_pass(
        &self,
        rules: &IndexMap<String, Rule>,
        data: &Map<String, Value>,
        locator: &Locator,
        mut result: Validated,
    ) -> Validated {
        for (key, rule) in rules {
            let traversed = locator.traverse(key.as_str());
            let rejects_absence = !rule.validate(None, &traversed).is_success();
            if rejects_absence && !data.contains_key(key) {
                result = result.merge(Validated::reject(
                    &traversed,
                    fill(&messages().missing_property, &[("property", key.as_str())]),
                    rule.schema(),
                    None,
                ));
            }
        }
        result
    }

    fn data_pass(
        &self,
        rules: &IndexMap<String, Rule>,
        data: &Map<String, Value>,
        locator: &Locator,
        mut result: Validated,
    ) -> Validated {
        for (key, data_value) in data {
            let traversed = locator.traverse(key.as_str());
            match rules.get(key) {
                None => {
                    result = result.merge(Validated::reject(
                        &traversed,
                        fill(&messages().unknown_property, &[("property", key.as_str())]),
                        UndefinedValidator.schema(),
                        Some(data_value),
                    ));
                }
                Some(rule) => {
                    if !rule.validate(Some(data_value), &traversed).is_success() {
                        result = result.merge(rule.wrong_type(&traversed, Some(data_value)));
                    }
                }
            }
        }
        result
    }
}

impl Validate for ObjectValidator {
    fn schema(&self) -> Value {
        match &self.rules {
            None => json!({"$type": "object", "$properties": {"$any": {"$type": "any"}}}),
            Some(rules) if rules.is_empty() => json!({"$type": "object"}),
            Some(rules) => {
                let properties: Map<String, Value> = rules
                    .iter()
                    .map(|(key, rule)| (key.clone(), rule.schema()))
                    .collect();
                json!({"$type": "object", "$properties": properties})
            }
        }
    }

    fn validate(&self, value: Option<&Value>, locator: &Locator) -> Validated {
        let Some(data @ Value::Object(entries)) = value else {
            return self.wrong_type(locator, value);
        };

        let Some(rules) = &self.rules else {
            return Validated::success(data.clone());
        };

        let result = Validated::success(data.clone());
        let result = self.required_pass(rules, entries, locator, result);
        self.data_pass(rules, entries, locator, result)
    }
}

/// Creates an [`ObjectValidator`] with a per-property rule set.
///
/// Rule keys are iterated in the order given here, so missing-property
/// errors come out in declaration order.
///
/// # Examples
///
/// ```
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let rule = object([
///     ("name", string().boxed()),
///     ("age", number().boxed()),
/// ]);
/// assert!(validate(&json!({"name": "a", "age": 3}), &rule).is_success());
/// assert!(!validate(&json!({"name": "a"}), &rule).is_success());
/// ```
#[must_use]
pub fn object<K, I>(rules: I) -> ObjectValidator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Rule)>,
{
    ObjectValidator {
        rules: Some(
            rules
                .into_iter()
                .map(|(key, rule)| (key.into(), rule))
                .collect(),
        ),
    }
}

/// Creates an [`ObjectValidator`] that accepts any keyed structure.
#[must_use]
pub fn object_any() -> ObjectValidator {
    ObjectValidator { rules: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::optional;
    use crate::core::ValidateExt;
    use crate::validators::number::number;
    use crate::validators::string::string;

    #[test]
    fn any_object_passes_without_rules() {
        let locator = Locator::root("*");
        assert!(
            object_any()
                .validate(Some(&json!({"free": "form"})), &locator)
                .is_success()
        );
    }

    #[test]
    fn arrays_and_null_are_not_objects() {
        let locator = Locator::root("*");
        assert!(!object_any().validate(Some(&json!([])), &locator).is_success());
        assert!(!object_any().validate(Some(&json!(null)), &locator).is_success());
        assert!(!object_any().validate(None, &locator).is_success());
    }

    #[test]
    fn missing_required_property() {
        let locator = Locator::root("*");
        let rule = object([("name", string().boxed())]);
        let result = rule.validate(Some(&json!({})), &locator);

        assert_eq!(result.errors().len(), 1);
        let error = &result.errors()[0];
        assert_eq!(error.location, "*.name");
        assert_eq!(error.message, "Object requires this property but is missing");
        assert_eq!(error.expected, json!("string"));
        assert_eq!(error.value, None);
    }

    #[test]
    fn unknown_property() {
        let locator = Locator::root("*");
        let rule = object([("name", string().boxed())]);
        let result = rule.validate(Some(&json!({"name": "a", "extra": 1})), &locator);

        assert_eq!(result.errors().len(), 1);
        let error = &result.errors()[0];
        assert_eq!(error.location, "*.extra");
        assert_eq!(error.message, "Object has unknown property which is defined");
        assert_eq!(error.expected, json!("undefined"));
        assert_eq!(error.value, Some(json!(1)));
    }

    #[test]
    fn optional_property_may_be_absent() {
        let locator = Locator::root("*");
        let rule = object([
            ("name", string().boxed()),
            ("age", optional(number()).boxed()),
        ]);
        assert!(rule.validate(Some(&json!({"name": "a"})), &locator).is_success());
        assert!(
            rule.validate(Some(&json!({"name": "a", "age": 3})), &locator)
                .is_success()
        );
        assert!(
            !rule
                .validate(Some(&json!({"name": "a", "age": "3"})), &locator)
                .is_success()
        );
    }

    #[test]
    fn property_mismatch_references_the_child_fragment() {
        let locator = Locator::root("*");
        let rule = object([("age", number().boxed())]);
        let result = rule.validate(Some(&json!({"age": "old"})), &locator);

        let error = &result.errors()[0];
        assert_eq!(error.location, "*.age");
        assert_eq!(error.expected, json!("number"));
        assert_eq!(error.message, "Expected value to be of type: number");
    }

    #[test]
    fn nested_mismatch_is_reported_at_the_property_path() {
        let locator = Locator::root("*");
        let rule = object([("user", object([("name", string().boxed())]).boxed())]);
        let result = rule.validate(Some(&json!({"user": {"name": 1}})), &locator);

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].location, "*.user");
        assert_eq!(
            result.errors()[0].expected,
            json!({"$type": "object", "$properties": {"name": "string"}})
        );
    }

    #[test]
    fn missing_errors_precede_data_errors() {
        let locator = Locator::root("*");
        let rule = object([
            ("a", string().boxed()),
            ("b", number().boxed()),
        ]);
        let result = rule.validate(Some(&json!({"z": true})), &locator);

        let locations: Vec<_> = result.errors().iter().map(|e| e.location.clone()).collect();
        assert_eq!(locations, vec!["*.a", "*.b", "*.z"]);
    }

    #[test]
    fn empty_rule_set_flags_every_data_key_as_unknown() {
        let locator = Locator::root("*");
        let rule = object(Vec::<(String, Rule)>::new());
        assert!(rule.validate(Some(&json!({})), &locator).is_success());

        let result = rule.validate(Some(&json!({"a": 1})), &locator);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].location, "*.a");
    }

    #[test]
    fn schema_fragments_per_construction() {
        assert_eq!(
            object_any().schema(),
            json!({"$type": "object", "$properties": {"$any": {"$type": "any"}}})
        );
        assert_eq!(
            object(Vec::<(String, Rule)>::new()).schema(),
            json!({"$type": "object"})
        );
        assert_eq!(
            object([("name", string().boxed())]).schema(),
            json!({"$type": "object", "$properties": {"name": "string"}})
        );
    }
}
