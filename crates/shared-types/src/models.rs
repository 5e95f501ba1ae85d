use crate::{AppError, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user as returned by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
}

/// Raw `profiles` row. The role is still an unchecked string here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRow {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub institution: Option<String>,
}

/// Validated profile with a known role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = AppError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            role: Role::parse(&row.role)?,
            name: row.name,
            institution: row.institution.filter(|s| !s.trim().is_empty()),
        })
    }
}

impl Profile {
    /// Up to two uppercase initials, `"U"` when the name is blank.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    /// Secondary line in the top bar. Researchers show their institution.
    pub fn role_label(&self) -> String {
        match (self.role, self.institution.as_deref()) {
            (Role::Researcher, Some(institution)) => institution.to_string(),
            (role, _) => role.display_name().to_string(),
        }
    }
}

/// Token pair returned by a successful password sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub user: AuthUser,
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// User metadata attached at signup; the backend copies it into `profiles`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupMetadata {
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}
