//! Submitted credentials and the fixed demo account check.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::util::validation::FieldError;

/// The only email that signs in.
pub const DEMO_EMAIL: &str = "test@example.com";

/// The only password that signs in.
pub const DEMO_PASSWORD: &str = "123456A*";

/// One submit attempt's inputs. Borrowed from the form; never stored.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl std::fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Compare against the demo account by exact string equality.
///
/// # Errors
///
/// Returns `FieldError::InvalidCredentials` when either value differs. The
/// caller reports it on the password field regardless of which one differed.
pub fn verify(credentials: &Credentials<'_>) -> Result<(), FieldError> {
    if credentials.email == DEMO_EMAIL && credentials.password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(FieldError::InvalidCredentials)
    }
}
