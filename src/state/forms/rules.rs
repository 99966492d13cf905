//! Per-field acceptance rules

use super::field::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;

/// Whitespace as browsers trim it: Unicode `Zs`, the line terminators,
/// tab/VT/FF and the byte-order mark (but not NEL)
const WEB_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

/// Something `@` something `.` something, no whitespace and a single `@`
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{WEB_WHITESPACE}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("Invalid email regex")
});

fn is_web_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip leading and trailing whitespace the way the browser's `trim` does
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_web_whitespace)
}

/// Length in UTF-16 code units, the unit browser string lengths use
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Why a field's current text is not acceptable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    EmptyField { field: FieldKind },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: FieldKind, min: usize },

    #[error("Please enter a valid {}", .field.noun())]
    InvalidFormat { field: FieldKind },
}

impl FieldError {
    /// The field this error belongs to
    pub fn field(&self) -> FieldKind {
        match self {
            FieldError::EmptyField { field }
            | FieldError::TooShort { field, .. }
            | FieldError::InvalidFormat { field } => *field,
        }
    }
}

/// Outcome of validating one field
pub type ValidationResult = Result<(), FieldError>;

/// Thresholds used by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub name_min_chars: usize,
    pub message_min_chars: usize,
    pub banner_duration: Duration,
}

impl Rules {
    pub const DEFAULT_NAME_MIN_CHARS: usize = 2;
    pub const DEFAULT_MESSAGE_MIN_CHARS: usize = 10;
    pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(5000);

    /// Check `value` against the rule for `field`
    pub fn check(&self, field: FieldKind, value: &str) -> ValidationResult {
        let trimmed = trim_input(value);
        if trimmed.is_empty() {
            return Err(FieldError::EmptyField { field });
        }

        match field {
            FieldKind::Name => min_chars(field, trimmed, self.name_min_chars),
            FieldKind::Message => min_chars(field, trimmed, self.message_min_chars),
            FieldKind::Email => {
                if EMAIL_REGEX.is_match(trimmed) {
                    Ok(())
                } else {
                    Err(FieldError::InvalidFormat { field })
                }
            }
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            name_min_chars: Self::DEFAULT_NAME_MIN_CHARS,
            message_min_chars: Self::DEFAULT_MESSAGE_MIN_CHARS,
            banner_duration: Self::DEFAULT_BANNER_DURATION,
        }
    }
}

fn min_chars(field: FieldKind, trimmed: &str, min: usize) -> ValidationResult {
    if input_len(trimmed) < min {
        Err(FieldError::TooShort { field, min })
    } else {
        Ok(())
    }
}
