//! User roles.
//!
//! Roles are stored as lowercase text in the `users.role` column and embedded
//! verbatim in JWT claims, so the serde and string representations must stay
//! in sync with the CHECK constraint in the users migration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// Lets sqlx decode a TEXT column straight into [`Role`] via
/// `#[sqlx(try_from = "String")]`.
impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_strings() {
        for role in [Role::Admin, Role::Teacher, Role::Student] {
            let parsed: Role = role.as_str().parse().expect("known role must parse");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Role::Teacher).unwrap();
        assert_eq!(json, "\"teacher\"");
        let back: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(back, Role::Student);
    }
}
