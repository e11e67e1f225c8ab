//! Per-view submit state: Idle, then Pending, then Idle with an error or
//! navigated away.

use super::validation::{FieldErrors, Validate};
use crate::auth::AuthError;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    values: F,
    errors: FieldErrors,
    pending: bool,
    error: Option<String>,
    submitted: bool,
}

impl<F: Default> Default for FormState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> FormState<F> {
    pub fn new(values: F) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            pending: false,
            error: None,
            submitted: false,
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Message of the last failed submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Gate for actions without a schema (provider buttons). Returns
    /// `false` while a submission is in flight.
    pub fn begin_action(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.error = None;
        self.pending = true;
        true
    }

    /// Clear pending; on `Err` keep its message for display. Returns
    /// whether the result was a success.
    pub fn settle<T>(&mut self, result: &Result<T, AuthError>) -> bool {
        self.pending = false;
        match result {
            Ok(_) => {
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.message());
                false
            }
        }
    }
}

impl<F: Validate> FormState<F> {
    /// Change a value; once a submit was attempted, errors follow the edits.
    pub fn edit(&mut self, change: impl FnOnce(&mut F)) {
        change(&mut self.values);
        if self.submitted {
            self.errors = self.values.validate().err().unwrap_or_default();
        }
    }

    /// Validated values to send, or `None` when pending or invalid.
    pub fn begin_submit(&mut self) -> Option<F::Output> {
        if self.pending {
            return None;
        }
        self.submitted = true;
        match self.values.validate() {
            Ok(output) => {
                self.errors = FieldErrors::new();
                self.error = None;
                self.pending = true;
                Some(output)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
