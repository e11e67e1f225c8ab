//! Form schemas
//!
//! Validation is purely local: a form that fails it never reaches the
//! auth service.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field name to message, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A form schema: raw input in, validated output or per-field errors out
pub trait Validate {
    type Output;

    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
    })
}

/// Well-formed address check
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_pattern().is_match(email)
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !is_valid_email(email) {
        errors.insert("email", "Invalid email");
    }
}

fn check_required(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.is_empty() {
        errors.insert(field, message);
    }
}

// ============ Sign in ============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

impl Validate for SignInForm {
    type Output = SignInCredentials;

    fn validate(&self) -> Result<SignInCredentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_required(&mut errors, "password", &self.password, "Password is required");

        if errors.is_empty() {
            Ok(SignInCredentials {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

// ============ Sign up ============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignUpDetails {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Validate for SignUpForm {
    type Output = SignUpDetails;

    fn validate(&self) -> Result<SignUpDetails, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        check_required(&mut errors, "password", &self.password, "Password is required");
        check_required(&mut errors, "confirm_password", &self.confirm_password, "Password is required");

        // mismatch is reported on the confirmation field
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords don't match");
        }

        if errors.is_empty() {
            Ok(SignUpDetails {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}
