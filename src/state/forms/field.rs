//! Form field value objects

use super::sink::FieldSink;
use std::fmt;

/// The three fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    /// All fields in display and validation order
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    /// Label shown on the field's border
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Message => "Message",
        }
    }

    /// Lowercase noun used inside error sentences
    pub fn noun(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Message => "message",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::Message)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single text input together with its inline error region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub value: String,
    /// Error text; `Some` exactly while the error region is shown
    error: Option<String>,
}

impl FormField {
    /// Create an empty field with no error
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            error: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.kind.is_multiline()
    }

    /// Current error text, if the error region is visible
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_error_visible(&self) -> bool {
        self.error.is_some()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline() {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

impl FieldSink for FormField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn clear_value(&mut self) {
        self.value.clear();
    }
}
