//! Password strength policy.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Minimum password length used when nothing else is configured.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Password strength requirements.
///
/// The order in which rules are checked never changes; switching a
/// character class off only skips that step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    min_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_digit: bool,
}

impl PasswordPolicy {
    /// Policy with the given minimum length and every character class required.
    pub fn new(min_length: usize) -> Result<Self, DomainError> {
        if min_length == 0 {
            return Err(DomainError::InvalidPolicy {
                reason: "minimum password length must be at least 1".into(),
            });
        }
        Ok(Self {
            min_length,
            ..Self::default()
        })
    }

    pub fn require_uppercase(mut self, yes: bool) -> Self {
        self.require_uppercase = yes;
        self
    }

    pub fn require_lowercase(mut self, yes: bool) -> Self {
        self.require_lowercase = yes;
        self
    }

    pub fn require_digit(mut self, yes: bool) -> Self {
        self.require_digit = yes;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn requires_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn requires_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn requires_digit(&self) -> bool {
        self.require_digit
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requires_everything() {
        let p = PasswordPolicy::default();
        assert_eq!(p.min_length(), 6);
        assert!(p.requires_uppercase());
        assert!(p.requires_lowercase());
        assert!(p.requires_digit());
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(
            PasswordPolicy::new(0),
            Err(DomainError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn builder_toggles_classes() {
        let p = PasswordPolicy::new(8)
            .unwrap()
            .require_digit(false)
            .require_uppercase(false);
        assert_eq!(p.min_length(), 8);
        assert!(!p.requires_digit());
        assert!(!p.requires_uppercase());
        assert!(p.requires_lowercase());
    }
}
