//! Password policy enforcement for new passwords.

use jobportal_core::config::AuthConfig;
use jobportal_core::error::AppError;

/// Enforces the configured minimum password length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Rejects passwords shorter than the minimum, counted in characters.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_length() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("123456").is_ok());
        let err = validator.validate("12345").unwrap_err();
        assert_eq!(err.message, "Password must be at least 6 characters long");
    }
}
