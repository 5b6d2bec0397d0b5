//! Prelude module for convenient imports.
//!
//! A single `use shapecheck::prelude::*;` brings in the validator factories,
//! the composition traits, and the entry points.
//!
//! # Examples
//!
//! ```
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let rule = object([
//!     ("name", string().boxed()),
//!     ("age", optional(number()).boxed()),
//! ]);
//! assert!(validate(&json!({"name": "a"}), &rule).is_success());
//! ```

pub use crate::core::{
    Locator, MessageOverrides, Messages, Rule, TypedError, Validate, ValidateExt, Validated,
    ValidationError, setup_validate_messages,
};

pub use crate::validators::{
    BooleanValidator, ListValidator, NullValidator, NumberValidator, ObjectValidator,
    StringValidator, UndefinedValidator, boolean, list, null, number, number_among, object,
    object_any, string, string_among, string_matching, undefined,
};

pub use crate::combinators::{OrValidator, one_of, optional};

pub use crate::validate::{ROOT_NAME, validate, validate_named};
