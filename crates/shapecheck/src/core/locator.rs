//! Path tracking for error reporting
//!
//! A [`Locator`] records the path from the root of the validated value down
//! to the value currently being checked. Locators are immutable: descending
//! into a property or element produces a new locator and leaves the original
//! untouched, so sibling checks can never observe each other's paths.

use std::fmt;

/// Immutable accumulator for the path to the value under validation.
///
/// Serializes to a dotted path for error messages: the root segment followed
/// by one segment per traversed property name or element index.
///
/// # Examples
///
/// ```
/// use shapecheck::core::Locator;
///
/// let root = Locator::root("*");
/// let items = root.traverse("items");
/// let first = items.traverse("0");
///
/// assert_eq!(first.to_string(), "*.items.0");
/// // The originals are untouched:
/// assert_eq!(root.to_string(), "*");
/// assert_eq!(items.to_string(), "*.items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    segments: Vec<String>,
}

impl Locator {
    /// Creates a locator holding only the root segment.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Returns a new locator with `segment` appended.
    ///
    /// The receiver is not modified; no two locators share mutable state.
    #[must_use]
    pub fn traverse(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns the path segments from root to the current value.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Depth of the locator, counting the root segment.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
