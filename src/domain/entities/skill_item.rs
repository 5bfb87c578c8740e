//! Skill item entity and repository trait.
//!
//! Maps to the `skill_items` table in the database schema.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Proficiency attached to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Novice,
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Map the numeric 1-5 scale clients send.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 5 => Self::Expert,
            4 => Self::Advanced,
            3 => Self::Intermediate,
            2 => Self::Basic,
            _ => Self::Novice,
        }
    }

    /// Parse the database representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Novice" => Some(Self::Novice),
            "Basic" => Some(Self::Basic),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            "Expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named skill on an aspirant's CV.
///
/// Maps to the `skill_items` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - profile_id: BIGINT NOT NULL REFERENCES aspirant_profiles(id) ON DELETE CASCADE
/// - skill_name: VARCHAR(100) NOT NULL
/// - level: VARCHAR(20) NOT NULL DEFAULT 'Basic'
/// - UNIQUE (profile_id, skill_name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: i64,
    pub profile_id: i64,
    pub skill_name: String,
    pub level: SkillLevel,
}

/// Repository trait for SkillItem data access operations.
#[async_trait]
pub trait SkillItemRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<SkillItem>, AppError>;

    /// All skills of a profile, by name.
    async fn find_by_profile(&self, profile_id: i64) -> Result<Vec<SkillItem>, AppError>;

    /// Insert a skill. A name already used on the same profile is a `Conflict`.
    async fn create(&self, skill: &SkillItem) -> Result<SkillItem, AppError>;

    async fn update(&self, skill: &SkillItem) -> Result<SkillItem, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
