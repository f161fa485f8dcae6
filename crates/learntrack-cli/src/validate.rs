//! Credential validation for the `add students` command.
//!
//! The engine assumes validated input; all pattern checks live here.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// At least two word characters, with optional single apostrophes or
/// hyphens between them.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\w+['-]?)+\w+$").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.\-_]+@[\w.\-_]+\.[\w]+$").unwrap());

/// A rejected credential line. The display strings are the exact console
/// messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Incorrect credentials")]
    Credentials,
    #[error("Incorrect first name.")]
    FirstName,
    #[error("Incorrect last name.")]
    LastName,
    #[error("Incorrect email.")]
    Email,
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub first_name: String,
    /// One or more validated tokens joined by single spaces.
    pub last_name: String,
    pub email: String,
}

/// Parse a `first [middle...] last email` credential line.
pub fn parse_credentials(line: &str) -> Result<Credentials, CredentialError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(CredentialError::Credentials);
    }

    let first_name = tokens[0];
    if !NAME_PATTERN.is_match(first_name) {
        return Err(CredentialError::FirstName);
    }

    let last_tokens = &tokens[1..tokens.len() - 1];
    if last_tokens.iter().any(|t| !NAME_PATTERN.is_match(t)) {
        return Err(CredentialError::LastName);
    }

    let email = tokens[tokens.len() - 1];
    if !EMAIL_PATTERN.is_match(email) {
        return Err(CredentialError::Email);
    }

    Ok(Credentials {
        first_name: first_name.to_string(),
        last_name: last_tokens.join(" "),
        email: email.to_string(),
    })
}
