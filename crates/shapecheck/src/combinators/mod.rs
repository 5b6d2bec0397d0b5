//! Validator combinators
//!
//! Composition nodes that take other validators as children. The only
//! combinator in the closed variant set is [`OrValidator`]; [`optional`] is
//! sugar over it for the absence-probe optionality idiom.

pub mod or;

pub use or::{OrValidator, one_of, optional};
