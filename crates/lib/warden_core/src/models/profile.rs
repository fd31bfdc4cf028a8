//! Profile domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl ProfilePatch {
    /// Apply the present fields to `profile`. Does not touch timestamps.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(tags) = &self.tags {
            profile.tags = tags.clone();
        }
    }
}
