//! Input validation functions
//!
//! Validation rules for the registration and profile-update paths. The
//! backend services call these before touching the store; email format is
//! checked there with the `validator` crate.

/// Validate a username: at least 5 characters, alphanumeric only
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 5 {
        return Err("A username is required, minimum 5 characters".to_string());
    }
    if username.len() > 64 {
        return Err("Username too long".to_string());
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("The username contains non alphanumeric characters - not allowed".to_string());
    }
    Ok(())
}

/// Validate a password: must be present
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("A password is required".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a date of birth: must not be in the future
pub fn validate_date_of_birth(dob: chrono::NaiveDate) -> Result<(), String> {
    let today = chrono::Utc::now().date_naive();
    if dob > today {
        return Err("Date of birth cannot be in the future".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice01", true)]
    #[case("Bob42", true)]
    #[case("abcd", false)] // too short
    #[case("", false)]
    #[case("alice 01", false)] // whitespace
    #[case("alice-01", false)] // punctuation
    #[case("ålice01", false)] // non-ascii
    fn test_validate_username(#[case] username: &str, #[case] valid: bool) {
        assert_eq!(validate_username(username).is_ok(), valid);
    }

    #[rstest]
    #[case("Secr3t!", true)]
    #[case("x", true)]
    #[case("", false)]
    fn test_validate_password(#[case] password: &str, #[case] valid: bool) {
        assert_eq!(validate_password(password).is_ok(), valid);
    }

    #[test]
    fn test_dob_in_the_future_rejected() {
        let future = chrono::Utc::now().date_naive() + chrono::Days::new(30);
        assert!(validate_date_of_birth(future).is_err());
    }

    #[test]
    fn test_dob_in_the_past_accepted() {
        let dob = chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert!(validate_date_of_birth(dob).is_ok());
    }
}
