use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The five inputs of the sign-up form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order.
    ///
    /// `Password` precedes `ConfirmPassword`: the confirmation rule reads the
    /// password value, so anything iterating this list in order evaluates
    /// the password first.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable machine name (`snake_case`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Human label, as shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
        }
    }

    /// Whether the input should be masked when echoed.
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    /// Accepts `snake_case`, `kebab-case` and `camelCase` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "firstname" | "first" => Ok(Self::FirstName),
            "lastname" | "last" => Ok(Self::LastName),
            "email" | "mail" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirmpassword" | "confirm" => Ok(Self::ConfirmPassword),
            _ => Err(DomainError::UnknownField { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_spellings() {
        assert_eq!("first_name".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("first-name".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("firstName".parse::<Field>().unwrap(), Field::FirstName);
        assert_eq!("confirmPassword".parse::<Field>().unwrap(), Field::ConfirmPassword);
        assert_eq!("confirm".parse::<Field>().unwrap(), Field::ConfirmPassword);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "nickname".parse::<Field>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownField {
                name: "nickname".into()
            }
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn password_is_ordered_before_confirmation() {
        let pos = |f| Field::ALL.iter().position(|x| *x == f).unwrap();
        assert!(pos(Field::Password) < pos(Field::ConfirmPassword));
    }

    #[test]
    fn only_password_fields_are_secret() {
        assert!(Field::Password.is_secret());
        assert!(Field::ConfirmPassword.is_secret());
        assert!(!Field::Email.is_secret());
    }
}
