//! # shapecheck
//!
//! Structural validation of untyped JSON input against composable schema
//! rules, reporting either success (with the input narrowed to a precise
//! shape) or a path-qualified list of every mismatch found in one pass.
//!
//! ## Quick Start
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let rule = object([
//!     ("name", string().boxed()),
//!     ("tags", list(string()).boxed()),
//!     ("age", optional(number()).boxed()),
//! ]);
//!
//! let result = validate(&json!({"name": "a", "tags": ["x"], "extra": 1}), &rule);
//! assert!(!result.is_success());
//! assert_eq!(result.errors()[0].location, "*.extra");
//! ```
//!
//! ## Building Rules
//!
//! Factory functions compose into an immutable validator tree:
//! [`null`](validators::null), [`undefined`](validators::undefined),
//! [`boolean`](validators::boolean), [`number`](validators::number),
//! [`string`](validators::string), [`list`](validators::list),
//! [`object`](validators::object), and [`one_of`](combinators::one_of).
//! A constructed rule holds no per-call state and may serve any number of
//! validations.
//!
//! ## Error Messages
//!
//! Default message templates can be overridden once at startup via
//! [`setup_validate_messages`](core::setup_validate_messages); see
//! [`core::Messages`] for the categories and their placeholders.

pub mod combinators;
pub mod core;
pub mod prelude;
pub mod validators;

mod validate;

#[cfg(feature = "http")]
pub mod http;

pub use crate::core::{
    MessageOverrides, Messages, Rule, TypedError, Validate, ValidateExt, Validated,
    ValidationError, setup_validate_messages,
};
pub use crate::validate::{ROOT_NAME, validate, validate_named};
