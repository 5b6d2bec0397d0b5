//! Core validation types
//!
//! The foundation layer of the crate:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], the [`Rule`] child-node type
//! - **Results**: [`Validated`], [`ValidationError`], [`TypedError`]
//! - **Paths**: [`Locator`]
//! - **Templates**: [`Messages`], [`MessageOverrides`],
//!   [`setup_validate_messages`]
//!
//! Validators are immutable once constructed and hold no per-call state;
//! results flow strictly upward, each level appending to the error list with
//! the path prefix already rewritten by the [`Locator`] it handed down.

pub mod error;
pub mod locator;
pub mod messages;
pub mod traits;

pub use error::{TypedError, Validated, ValidationError};
pub use locator::Locator;
pub use messages::{MessageOverrides, Messages, setup_validate_messages};
pub use traits::{Rule, Validate, ValidateExt};
