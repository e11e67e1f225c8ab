//! Auth form schemas and the submit state machine shared by the auth views.

mod state;
mod validation;

pub use state::FormState;
pub use validation::{is_valid_email, FieldErrors, SignInCredentials, SignInForm, SignUpDetails, SignUpForm, Validate};
