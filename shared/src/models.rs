//! Data models for the inventory application

use crate::errors::UnknownRole;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access tier of a user account
///
/// The serialized spellings are exact: `Regular`, `Admin`, `Superadmin`.
/// Anything else is rejected rather than mapped to a default tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Regular,
    Admin,
    Superadmin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Regular, Role::Admin, Role::Superadmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Regular => "Regular",
            Role::Admin => "Admin",
            Role::Superadmin => "Superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(Role::Regular),
            "Admin" => Ok(Role::Admin),
            "Superadmin" => Ok(Role::Superadmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Resolved caller identity
///
/// Built from a verified token at request time. It is a snapshot of the
/// user record when the token was issued and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i32,
    pub role: Role,
}

impl Identity {
    pub fn new(id: i32, role: Role) -> Self {
        Self { id, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Regular", Role::Regular)]
    #[case("Admin", Role::Admin)]
    #[case("Superadmin", Role::Superadmin)]
    fn test_role_parses_known_spellings(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(input.parse::<Role>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("admin")]
    #[case("SUPERADMIN")]
    #[case("Root")]
    #[case("")]
    fn test_role_rejects_unknown_spellings(#[case] input: &str) {
        let err = input.parse::<Role>().unwrap_err();
        assert_eq!(err.0, input);
    }

    #[test]
    fn test_role_serde_uses_exact_names() {
        let json = serde_json::to_string(&Role::Superadmin).unwrap();
        assert_eq!(json, "\"Superadmin\"");

        let parsed: Result<Role, _> = serde_json::from_str("\"Owner\"");
        assert!(parsed.is_err());
    }
}
