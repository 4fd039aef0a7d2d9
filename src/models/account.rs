// SPDX-License-Identifier: MIT

//! Account model for storage and API.

use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Trainer,
}

impl Role {
    /// Parse a role string as sent by clients ("client" / "trainer").
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "client" => Some(Role::Client),
            "trainer" => Some(Role::Trainer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Trainer => "trainer",
        }
    }
}

/// Role-specific account fields.
///
/// Stored flattened into the account document, tagged by the `role` field, so
/// a client document carries `goal` and a trainer document carries
/// `specialization` / `experience` / `certification`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Client {
        goal: String,
    },
    Trainer {
        specialization: String,
        experience: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        certification: Option<String>,
    },
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Client { .. } => Role::Client,
            RoleProfile::Trainer { .. } => Role::Trainer,
        }
    }
}

/// Account document stored in the `accounts` collection.
///
/// The password is an opaque cleartext string compared by equality at login.
/// That is deliberate current behavior, not an oversight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub fullname: String,
    /// Email address, the unique account identifier.
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
    /// When the account was registered (RFC 3339)
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_account_serializes_with_role_tag() {
        let account = Account {
            fullname: "Ada Client".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            profile: RoleProfile::Client {
                goal: "lose weight".to_string(),
            },
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["role"], "client");
        assert_eq!(value["goal"], "lose weight");
        assert!(value.get("specialization").is_none());
    }

    #[test]
    fn test_trainer_account_roundtrip() {
        let json = serde_json::json!({
            "fullname": "Tom Trainer",
            "email": "tom@example.com",
            "password": "pw",
            "role": "trainer",
            "specialization": "strength",
            "experience": "5 years",
            "created_at": "2024-01-01T00:00:00Z",
        });

        let account: Account = serde_json::from_value(json).unwrap();
        assert_eq!(account.profile.role(), Role::Trainer);
        match account.profile {
            RoleProfile::Trainer { certification, .. } => assert!(certification.is_none()),
            _ => panic!("expected trainer profile"),
        }
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse("trainer"), Some(Role::Trainer));
        assert_eq!(Role::parse("admin"), None);
    }
}
