//! Accepted submissions and the aggregate rejection

use super::rules::{trim_input, FieldError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Snapshot of a form that passed every rule.
///
/// Only ever logged; nothing is stored or sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Build from raw field values, trimming each one
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: trim_input(name).to_string(),
            email: trim_input(email).to_string(),
            message: trim_input(message).to_string(),
        }
    }
}

/// Submit attempt where at least one field failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .errors.len())]
pub struct Rejected {
    pub errors: Vec<FieldError>,
}

/// Outcome of a submit attempt
pub type SubmitResult = Result<Submission, Rejected>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldKind;

    #[test]
    fn test_new_trims_values() {
        let submission = Submission::new("  Ada ", "ada@example.com\n", " Hello there!  ");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hello there!");
    }

    #[test]
    fn test_new_trims_byte_order_mark() {
        let submission = Submission::new("\u{FEFF}Ada", "a@b.com", "0123456789\u{FEFF}");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.message, "0123456789");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Submission::new("Ada", "a@b.com", "0123456789");
        let b = Submission::new("Ada", "a@b.com", "0123456789");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_to_json() {
        let submission = Submission::new("Ada", "a@b.com", "0123456789");
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["message"], "0123456789");
        assert_eq!(json["id"], submission.id.to_string());
        assert!(json["submitted_at"].is_string());
    }

    #[test]
    fn test_rejected_display() {
        let rejected = Rejected {
            errors: vec![
                FieldError::EmptyField {
                    field: FieldKind::Name,
                },
                FieldError::InvalidFormat {
                    field: FieldKind::Email,
                },
            ],
        };
        assert_eq!(rejected.to_string(), "2 field(s) need attention");
    }
}
