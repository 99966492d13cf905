//! Form domain layer
//!
//! Field values and their error regions, the per-field rules, and the
//! validator that gates submission:
//! - `field`: field kinds and the terminal's text field
//! - `rules`: thresholds and the error taxonomy
//! - `sink`: display targets injected into the validator
//! - `timer`: the banner-hide deadline
//! - `validator`: `FormValidator` itself
//! - `submission`: accepted and rejected outcomes

mod field;
mod rules;
mod sink;
mod submission;
mod timer;
mod validator;

pub use field::{FieldKind, FormField};
pub use rules::Rules;
pub use validator::ContactForm;
