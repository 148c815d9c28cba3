//! Input rules applied before a create or update request is sent. The API
//! client itself forwards whatever it is given.

use anyhow::{Result, bail};
use regex::Regex;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

pub fn valid_name(name: &str) -> bool {
    Regex::new(r"^[\p{L}\p{N}\s]+$").map_or(false, |re| re.is_match(name))
}

/// Trims and checks a display name.
///
/// # Errors
/// Returns an error if the name is blank or has characters other than
/// letters, digits and whitespace.
pub fn name(value: &str) -> Result<String> {
    let name = value.trim();
    if name.is_empty() {
        bail!("Name is required.");
    }
    if !valid_name(name) {
        bail!("Name may only contain letters, numbers and spaces.");
    }
    Ok(name.to_string())
}

/// Trims and checks an email address.
///
/// # Errors
/// Returns an error if the email is blank or not shaped like `local@domain.tld`.
pub fn email(value: &str) -> Result<String> {
    let email = value.trim();
    if email.is_empty() {
        bail!("Email is required.");
    }
    if !valid_email(email) {
        bail!("Please enter a valid email address.");
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("first.last+tag@mail.example.org"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("ann at b.com"));
        assert!(!valid_email("a@@b.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn test_valid_name() {
        assert!(valid_name("Ann"));
        assert!(valid_name("Ann Lee 2"));
        assert!(valid_name("Zoë Ñúñez"));
        assert!(!valid_name("Ann; DROP TABLE"));
        assert!(!valid_name("<b>Ann</b>"));
    }

    #[test]
    fn test_name_trims_and_rejects_blank() {
        assert_eq!(name("  Ann  ").ok(), Some("Ann".to_string()));
        assert!(name("   ").is_err());
        assert!(name("R2-D2").is_err());
    }

    #[test]
    fn test_email_messages() {
        assert_eq!(
            email("").map_err(|e| e.to_string()).err(),
            Some("Email is required.".to_string())
        );
        assert_eq!(
            email("nope").map_err(|e| e.to_string()).err(),
            Some("Please enter a valid email address.".to_string())
        );
        assert_eq!(email(" a@b.com ").ok(), Some("a@b.com".to_string()));
    }
}
