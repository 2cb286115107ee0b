//! Item domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::generate_id;

/// Lifecycle status of a listed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Available,
    Requested,
    Swapped,
}

impl ItemStatus {
    /// Legal transitions: available -> requested -> swapped,
    /// or available -> swapped directly (points redemption).
    pub fn can_transition_to(self, next: ItemStatus) -> bool {
        matches!(
            (self, next),
            (ItemStatus::Available, ItemStatus::Requested)
                | (ItemStatus::Available, ItemStatus::Swapped)
                | (ItemStatus::Requested, ItemStatus::Swapped)
        )
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::Requested => "Requested",
            ItemStatus::Swapped => "Swapped",
        }
    }
}

/// A piece of clothing listed for exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    /// Item type (e.g. "shirt", "dress"); serialized as `type`
    #[serde(rename = "type")]
    pub kind: String,
    pub condition: String,
    /// Normalized: trimmed, deduplicated, no empties
    pub tags: Vec<String>,
    /// Base64-encoded image blobs
    pub images: Vec<String>,
    /// Point cost to redeem this item
    pub points: i64,
    /// Reference to the owning user; resolved at read time
    pub owner_id: String,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new available item owned by `owner_id`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        size: impl Into<String>,
        kind: impl Into<String>,
        condition: impl Into<String>,
        tags: &[String],
        points: i64,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            size: size.into(),
            kind: kind.into(),
            condition: condition.into(),
            tags: Self::normalize_tags(tags),
            images: Vec::new(),
            points,
            owner_id: owner_id.into(),
            status: ItemStatus::Available,
            created_at: Utc::now(),
        }
    }

    /// Normalize tags: deduplicate, trim whitespace, remove empty
    pub fn normalize_tags(tags: &[String]) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut result = Vec::new();

        for tag in tags {
            let trimmed = tag.trim().to_string();
            if !trimmed.is_empty() && seen.insert(trimmed.clone()) {
                result.push(trimmed);
            }
        }

        result
    }

    /// True if a case-insensitive substring of title, description, or a tag
    /// matches the search term
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }

    /// Validate item data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title cannot be empty");
        }
        if self.description.trim().is_empty() {
            return Err("description cannot be empty");
        }
        if self.category.trim().is_empty() {
            return Err("category cannot be empty");
        }
        if self.size.trim().is_empty() {
            return Err("size cannot be empty");
        }
        if self.condition.trim().is_empty() {
            return Err("condition cannot be empty");
        }
        if self.points <= 0 {
            return Err("point cost must be positive");
        }
        Ok(())
    }
}
