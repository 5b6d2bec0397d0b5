//! Built-in validators
//!
//! One file per shape, each exposing a lowercase factory function:
//!
//! - **Scalars**: [`null`], [`undefined`], [`boolean`], [`number`],
//!   [`string`] (with [`number_among`], [`string_among`],
//!   [`string_matching`] for restricted admissible values)
//! - **Composites**: [`list`], [`object`], [`object_any`]
//!
//! The Or combinator lives in [`crate::combinators`].
//!
//! # Examples
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
//! assert!(validate(&json!({"name": "a", "tags": []}), &rule).is_success());
//! ```

pub mod boolean;
pub mod list;
pub mod nullable;
pub mod number;
pub mod object;
pub mod string;

pub use boolean::{BooleanValidator, boolean};
pub use list::{ListValidator, list};
pub use nullable::{NullValidator, UndefinedValidator, null, undefined};
pub use number::{NumberValidator, number, number_among};
pub use object::{ObjectValidator, object, object_any};
pub use string::{StringValidator, string, string_among, string_matching};
