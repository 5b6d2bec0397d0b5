//! Process-wide error-message templates
//!
//! Every error category has a default English template with `%placeholder%`
//! tokens substituted at report time. The templates may be overridden once,
//! during initialization, via [`setup_validate_messages`]; after the first
//! validation call the configuration is frozen for the process lifetime.

use std::borrow::Cow;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The full set of message templates, one per error category.
///
/// Placeholders recognized per category:
///
/// | category            | placeholders            |
/// |---------------------|-------------------------|
/// | `not_type`          | `%type%`                |
/// | `not_value`         | `%value%`               |
/// | `not_regex_match`   | `%regex%`               |
/// | `not_among_strings` | `%strings%`             |
/// | `not_among_numbers` | `%numbers%`             |
/// | `not_among_rules`   | `%rules%`               |
/// | `missing_property`  | `%property%`            |
/// | `unknown_property`  | `%property%`            |
#[derive(Debug, Clone)]
pub struct Messages {
    pub not_type: Cow<'static, str>,
    pub not_value: Cow<'static, str>,
    pub not_regex_match: Cow<'static, str>,
    pub not_among_strings: Cow<'static, str>,
    pub not_among_numbers: Cow<'static, str>,
    pub not_among_rules: Cow<'static, str>,
    pub missing_property: Cow<'static, str>,
    pub unknown_property: Cow<'static, str>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            not_type: Cow::Borrowed("Expected value to be of type: %type%"),
            not_value: Cow::Borrowed("Expected value to be: %value%"),
            not_regex_match: Cow::Borrowed("Expected value to match regex: %regex%"),
            not_among_strings: Cow::Borrowed("Expected value to be one of the strings: %strings%"),
            not_among_numbers: Cow::Borrowed("Expected value to be one of the numbers: %numbers%"),
            not_among_rules: Cow::Borrowed("Expected value to match one of the rules: %rules%"),
            missing_property: Cow::Borrowed("Object requires this property but is missing"),
            unknown_property: Cow::Borrowed("Object has unknown property which is defined"),
        }
    }
}

impl Messages {
    fn apply(mut self, overrides: MessageOverrides) -> Self {
        if let Some(template) = overrides.not_type {
            self.not_type = Cow::Owned(template);
        }
        if let Some(template) = overrides.not_value {
            self.not_value = Cow::Owned(template);
        }
        if let Some(template) = overrides.not_regex_match {
            self.not_regex_match = Cow::Owned(template);
        }
        if let Some(template) = overrides.not_among_strings {
            self.not_among_strings = Cow::Owned(template);
        }
        if let Some(template) = overrides.not_among_numbers {
            self.not_among_numbers = Cow::Owned(template);
        }
        if let Some(template) = overrides.not_among_rules {
            self.not_among_rules = Cow::Owned(template);
        }
        if let Some(template) = overrides.missing_property {
            self.missing_property = Cow::Owned(template);
        }
        if let Some(template) = overrides.unknown_property {
            self.unknown_property = Cow::Owned(template);
        }
        self
    }
}

/// Partial template overrides accepted by [`setup_validate_messages`].
///
/// Unset categories retain their defaults. Deserializable so the overrides
/// can be loaded from application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOverrides {
    pub not_type: Option<String>,
    pub not_value: Option<String>,
    pub not_regex_match: Option<String>,
    pub not_among_strings: Option<String>,
    pub not_among_numbers: Option<String>,
    pub not_among_rules: Option<String>,
    pub missing_property: Option<String>,
    pub unknown_property: Option<String>,
}

static MESSAGES: OnceLock<Messages> = OnceLock::new();

/// Installs custom message templates for the process lifetime.
///
/// Expected to be called at most once, before any validation occurs. If the
/// templates were already frozen (by an earlier setup call or by a validation
/// call that read the defaults), the overrides are discarded and a warning is
/// logged.
///
/// # Examples
///
/// ```rust,ignore
/// use shapecheck::core::{MessageOverrides, setup_validate_messages};
///
/// setup_validate_messages(MessageOverrides {
///     not_type: Some("Bad type, expected %type%".to_string()),
///     ..MessageOverrides::default()
/// });
/// ```
pub fn setup_validate_messages(overrides: MessageOverrides) {
    if MESSAGES.set(Messages::default().apply(overrides)).is_err() {
        tracing::warn!("validation message templates already frozen; overrides discarded");
    }
}

/// The active template set, freezing the defaults on first use.
pub(crate) fn messages() -> &'static Messages {
    MESSAGES.get_or_init(Messages::default)
}

/// Substitutes `%key%` tokens in `template`.
///
/// Unknown tokens are left in place so a misconfigured template still
/// produces a readable message.
pub(crate) fn fill(template: &str, params: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (key, value) in params {
        text = text.replace(&format!("%{key}%"), value);
    }
    text
}
