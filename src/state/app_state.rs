//! Application state definitions

use super::forms::{ContactForm, FieldKind, Rules};

/// Focus position in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Message,
    SubmitButton,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::SubmitButton,
            Self::SubmitButton => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::SubmitButton,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::SubmitButton => Self::Message,
        }
    }

    /// The field under focus, or `None` on the submit button
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            Self::Name => Some(FieldKind::Name),
            Self::Email => Some(FieldKind::Email),
            Self::Message => Some(FieldKind::Message),
            Self::SubmitButton => None,
        }
    }
}

/// Outcome that produced a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Sent,
    Rejected,
}

/// Last action shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub form: ContactForm,
    pub focus: Focus,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(rules: Rules) -> Self {
        Self {
            form: ContactForm::contact(rules),
            focus: Focus::default(),
            status: None,
        }
    }

    /// Move focus forward, validating the field being left
    pub fn next_focus(&mut self) {
        self.blur();
        self.focus = self.focus.next();
    }

    /// Move focus backward, validating the field being left
    pub fn prev_focus(&mut self) {
        self.blur();
        self.focus = self.focus.prev();
    }

    fn blur(&mut self) {
        if let Some(kind) = self.focus.field() {
            // Outcome is reflected on the field's error region
            let _ = self.form.validate_field(kind);
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(kind) = self.focus.field() {
            self.form.field_mut(kind).push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(kind) = self.focus.field() {
            self.form.field_mut(kind).pop_char();
        }
    }

    /// Try to submit the form and record the outcome for the status bar
    pub fn submit(&mut self) {
        self.status = Some(match self.form.attempt_submit() {
            Ok(_) => StatusMessage {
                kind: StatusKind::Sent,
                text: "Message sent".to_string(),
            },
            Err(rejected) => {
                let fields: Vec<&str> = rejected
                    .errors
                    .iter()
                    .map(|error| error.field().label())
                    .collect();
                StatusMessage {
                    kind: StatusKind::Rejected,
                    text: format!("{rejected}: {}", fields.join(", ")),
                }
            }
        });
    }

    /// Drop the status message if it reports a sent form.
    ///
    /// Rejections stay until the next submit.
    pub fn clear_sent_status(&mut self) {
        if matches!(&self.status, Some(status) if status.kind == StatusKind::Sent) {
            self.status = None;
        }
    }

    /// Hide a showing success banner early. Returns false if none was up.
    pub fn dismiss_banner(&mut self) -> bool {
        if !self.form.dismiss_banner() {
            return false;
        }
        self.clear_sent_status();
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
