//! Contact form validation and the submission gate

use super::field::{FieldKind, FormField};
use super::rules::{FieldError, Rules, ValidationResult};
use super::sink::{BannerSink, Clock, FieldSink, SuccessBanner, TokioClock};
use super::submission::{Rejected, SubmitResult, Submission};
use super::timer::HideTimer;

/// Validator wired to the terminal form's own fields and banner
pub type ContactForm = FormValidator<FormField, SuccessBanner, TokioClock>;

/// Validates the name, email and message fields and gates submission.
///
/// Every check writes its outcome to the field's sink: failures show the
/// error text, successes hide it. A successful submit clears the form,
/// shows the banner and arms a [`HideTimer`]; [`FormValidator::poll_timers`]
/// hides the banner once the timer is due. A later success replaces any
/// pending timer.
#[derive(Debug)]
pub struct FormValidator<F, B, C> {
    name: F,
    email: F,
    message: F,
    banner: B,
    clock: C,
    rules: Rules,
    hide_timer: Option<HideTimer>,
}

impl ContactForm {
    /// Empty form using the tokio clock
    pub fn contact(rules: Rules) -> Self {
        Self::new(
            FormField::new(FieldKind::Name),
            FormField::new(FieldKind::Email),
            FormField::new(FieldKind::Message),
            SuccessBanner::new(),
            TokioClock,
            rules,
        )
    }
}

impl<F: FieldSink, B: BannerSink, C: Clock> FormValidator<F, B, C> {
    pub fn new(name: F, email: F, message: F, banner: B, clock: C, rules: Rules) -> Self {
        Self {
            name,
            email,
            message,
            banner,
            clock,
            rules,
            hide_timer: None,
        }
    }

    pub fn field(&self, kind: FieldKind) -> &F {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut F {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Message => &mut self.message,
        }
    }

    pub fn banner(&self) -> &B {
        &self.banner
    }

    pub fn validate_name(&mut self, value: &str) -> ValidationResult {
        self.validate(FieldKind::Name, value)
    }

    pub fn validate_email(&mut self, value: &str) -> ValidationResult {
        self.validate(FieldKind::Email, value)
    }

    pub fn validate_message(&mut self, value: &str) -> ValidationResult {
        self.validate(FieldKind::Message, value)
    }

    /// Validate one field against its current value (focus left the field)
    pub fn validate_field(&mut self, kind: FieldKind) -> ValidationResult {
        let value = self.field(kind).value();
        self.validate_value(kind, &value)
    }

    fn validate_value(&mut self, kind: FieldKind, value: &str) -> ValidationResult {
        match kind {
            FieldKind::Name => self.validate_name(value),
            FieldKind::Email => self.validate_email(value),
            FieldKind::Message => self.validate_message(value),
        }
    }

    fn validate(&mut self, kind: FieldKind, value: &str) -> ValidationResult {
        let result = self.rules.check(kind, value);
        let sink = self.field_mut(kind);
        match &result {
            Ok(()) => sink.hide_error(),
            Err(error) => {
                tracing::debug!(field = kind.noun(), %error, "field rejected");
                sink.show_error(&error.to_string());
            }
        }
        result
    }

    /// Validate all three fields and, if every one passes, accept the form.
    ///
    /// All fields are checked even after the first failure so every error
    /// region is refreshed together.
    pub fn attempt_submit(&mut self) -> SubmitResult {
        let values = FieldKind::ALL.map(|kind| self.field(kind).value());

        let errors: Vec<FieldError> = FieldKind::ALL
            .into_iter()
            .zip(values.iter())
            .filter_map(|(kind, value)| self.validate_value(kind, value).err())
            .collect();

        if !errors.is_empty() {
            tracing::debug!(invalid = errors.len(), "submission rejected");
            return Err(Rejected { errors });
        }

        let [name, email, message] = &values;
        let submission = Submission::new(name, email, message);

        for kind in FieldKind::ALL {
            let sink = self.field_mut(kind);
            sink.clear_value();
            sink.hide_error();
        }

        self.banner.set_visible(true);
        self.hide_timer = Some(HideTimer::schedule(
            self.clock.now(),
            self.rules.banner_duration,
        ));

        tracing::info!(id = %submission.id, "contact form submitted");
        match serde_json::to_string(&submission) {
            Ok(json) => tracing::debug!(submission = %json),
            Err(e) => tracing::warn!("failed to serialize submission: {e}"),
        }

        Ok(submission)
    }

    /// Hide the banner now and cancel its pending timer.
    ///
    /// Returns false when no banner was showing.
    pub fn dismiss_banner(&mut self) -> bool {
        match self.hide_timer.as_mut() {
            Some(timer) if !timer.is_cancelled() => {
                timer.cancel();
                self.banner.set_visible(false);
                tracing::debug!("success banner dismissed");
                true
            }
            _ => false,
        }
    }

    /// Hide the banner if its timer is due. Returns true when it fired.
    pub fn poll_timers(&mut self) -> bool {
        let Some(timer) = self.hide_timer else {
            return false;
        };

        if timer.is_cancelled() {
            self.hide_timer = None;
            return false;
        }

        if !timer.is_due(self.clock.now()) {
            return false;
        }

        self.banner.set_visible(false);
        self.hide_timer = None;
        tracing::debug!("success banner hidden");
        true
    }
}
