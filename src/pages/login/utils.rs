pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email".into());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_credentials() {
        assert!(validate_credentials("admin@company.com", "admin123").is_ok());
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
        assert!(validate_credentials("admin@company.com", "").is_err());
    }

    #[test]
    fn rejects_an_address_without_at_sign() {
        let error = validate_credentials("admin.company.com", "secret").unwrap_err();
        assert!(error.contains("valid email"));
    }
}
