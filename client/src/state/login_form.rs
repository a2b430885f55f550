//! Login form model: field values, touched markers, errors and the
//! validate-then-authenticate submit flow.
//!
//! DESIGN
//! ======
//! The page keeps one `RwSignal<LoginForm>` and forwards input, blur and
//! submit events here, so the whole flow is testable without a browser.
//! A submit runs synchronously: schema validation first, then the demo
//! credential check, and only a passing check touches the session.
//!
//! Errors are recomputed for the whole form on every edit or blur, but only
//! shown for touched fields. A submit touches both fields.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::state::session::Session;
use crate::util::credentials::{self, Credentials};
use crate::util::route::AppRoute;
use crate::util::validation::{self, Field, FieldErrors};

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credentials matched and the session is now authenticated.
    Authenticated,
    /// Validation or the credential check failed; see the field errors.
    Rejected,
    /// Another attempt was still in flight.
    Ignored,
}

impl SubmitOutcome {
    /// Where the page should navigate after this outcome, if anywhere.
    pub fn destination(self) -> Option<AppRoute> {
        match self {
            Self::Authenticated => Some(AppRoute::Dashboard),
            Self::Rejected | Self::Ignored => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    errors: FieldErrors,
    email_touched: bool,
    password_touched: bool,
    submitting: bool,
}

impl LoginForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::Email => self.email_touched,
            Field::Password => self.password_touched,
        }
    }

    /// Error to render under `field`, if it has been touched.
    pub fn visible_error(&self, field: Field) -> Option<validation::FieldError> {
        if self.is_touched(field) { self.errors.get(field) } else { None }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Signing in..." } else { "Sign In" }
    }

    /// Replace a field's value and re-validate the form.
    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
        self.revalidate();
    }

    /// Mark a field touched and re-validate the form.
    pub fn blur(&mut self, field: Field) {
        self.touch(field);
        self.revalidate();
    }

    /// Start an attempt. Returns `false` while a previous attempt is in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Run validation and the credential check for an attempt started with
    /// `begin_submit`. Always clears `submitting` before returning.
    pub fn complete_submit(&mut self, session: &mut Session) -> SubmitOutcome {
        self.touch(Field::Email);
        self.touch(Field::Password);

        let outcome = self.check(session);
        self.submitting = false;
        outcome
    }

    /// Full submit: `begin_submit` followed by `complete_submit`.
    pub fn submit(&mut self, session: &mut Session) -> SubmitOutcome {
        if !self.begin_submit() {
            log::debug!("login: submit ignored, attempt in flight");
            return SubmitOutcome::Ignored;
        }
        self.complete_submit(session)
    }

    fn check(&mut self, session: &mut Session) -> SubmitOutcome {
        let creds = Credentials { email: &self.email, password: &self.password };

        if let Err(errors) = validation::validate(&creds) {
            log::debug!("login: validation failed: {errors:?}");
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }

        match credentials::verify(&creds) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                session.login();
                SubmitOutcome::Authenticated
            }
            Err(e) => {
                log::warn!("login: credentials rejected for {}", creds.email);
                self.errors = FieldErrors { email: None, password: Some(e) };
                SubmitOutcome::Rejected
            }
        }
    }

    fn touch(&mut self, field: Field) {
        match field {
            Field::Email => self.email_touched = true,
            Field::Password => self.password_touched = true,
        }
    }

    fn revalidate(&mut self) {
        let creds = Credentials { email: &self.email, password: &self.password };
        self.errors = validation::validate(&creds).err().unwrap_or_default();
    }
}
