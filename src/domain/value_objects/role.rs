//! Account role.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role chosen at registration. Selects which profile a user owns
/// and which routes the user may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Aspirant,
    Company,
}

impl UserRole {
    /// Parse the database / token representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "aspirant" => Some(Self::Aspirant),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    /// Database / token representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aspirant => "aspirant",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
