use crate::{AuthUser, Profile, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage key holding the raw access token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the serialized [`SessionRecord`].
pub const USER_KEY: &str = "user";

/// Client-side record of the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
    pub profile: Profile,
    pub expires_at: Option<DateTime<Utc>>,
}

/// The part of a session persisted under [`USER_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub user: AuthUser,
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn role(&self) -> Role {
        self.profile.role
    }

    /// A session without an expiry never expires client-side.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && self.expires_at.map_or(true, |exp| exp > now)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Split into the two persisted values: token and user record JSON.
    pub fn to_stored(&self) -> Result<(String, String), serde_json::Error> {
        let record = SessionRecord {
            user: self.user.clone(),
            profile: self.profile.clone(),
            expires_at: self.expires_at,
        };
        Ok((self.access_token.clone(), serde_json::to_string(&record)?))
    }

    /// Rebuild a session from the persisted values.
    ///
    /// Returns `None` when the token is blank or the record does not parse, so a
    /// corrupted record reads as "signed out" rather than an error.
    pub fn from_stored(token: &str, record_json: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        let record: SessionRecord = serde_json::from_str(record_json).ok()?;
        Some(Session {
            access_token: token.to_string(),
            user: record.user,
            profile: record.profile,
            expires_at: record.expires_at,
        })
    }
}
