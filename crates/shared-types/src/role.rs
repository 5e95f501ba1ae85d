use crate::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Veritas user role, assigned once at signup.
///
/// Drives which dashboard, sidebar links and profile fields a user sees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Researcher,
    Mentor,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Student, Role::Teacher, Role::Researcher, Role::Mentor];

impl Role {
    /// Parse the backend's role column. Exact and case-sensitive.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "researcher" => Ok(Role::Researcher),
            "mentor" => Ok(Role::Mentor),
            other => Err(AppError::invalid_role(other)),
        }
    }

    /// Lowercase string stored in the `profiles.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Researcher => "researcher",
            Role::Mentor => "mentor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Researcher => "Researcher",
            Role::Mentor => "Mentor",
        }
    }

    /// Dashboard path a user of this role lands on after login.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Teacher => "/teacher",
            Role::Researcher => "/researcher",
            Role::Mentor => "/mentor",
        }
    }

    /// Subtitle shown under the brand in the sidebar.
    pub fn portal_label(&self) -> &'static str {
        match self {
            Role::Student => "Student Portal",
            Role::Teacher => "Teacher Studio",
            Role::Researcher => "Research Hub",
            Role::Mentor => "Mentor Desk",
        }
    }

    /// Short pitch used on the signup role cards.
    pub fn tagline(&self) -> &'static str {
        match self {
            Role::Student => "Learn to spot misinformation and build verification habits.",
            Role::Teacher => "Guide classes through verified knowledge and structured paths.",
            Role::Researcher => "Publish, review and track research on information integrity.",
            Role::Mentor => "Support researchers with reviews and integrity checks.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}
