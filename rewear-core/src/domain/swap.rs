//! Swap domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::generate_id;

/// Status of a swap record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Completed,
}

/// How the exchange happens: a direct swap or a points redemption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapKind {
    Swap,
    Points,
}

/// A record linking a requester to an item and its owner.
///
/// Holds id references only; display names and the item title are joined
/// at read time (see `SwapView` in the swap service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swap {
    pub id: String,
    pub item_id: String,
    pub requester_id: String,
    pub owner_id: String,
    pub status: SwapStatus,
    #[serde(rename = "type")]
    pub kind: SwapKind,
    /// Point cost, present only for points redemptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Swap {
    /// A pending direct-swap request
    pub fn direct(
        item_id: impl Into<String>,
        requester_id: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            item_id: item_id.into(),
            requester_id: requester_id.into(),
            owner_id: owner_id.into(),
            status: SwapStatus::Pending,
            kind: SwapKind::Swap,
            points: None,
            created_at: Utc::now(),
        }
    }

    /// A completed points redemption at the given price
    pub fn redemption(
        item_id: impl Into<String>,
        requester_id: impl Into<String>,
        owner_id: impl Into<String>,
        points: i64,
    ) -> Self {
        Self {
            id: generate_id(),
            item_id: item_id.into(),
            requester_id: requester_id.into(),
            owner_id: owner_id.into(),
            status: SwapStatus::Completed,
            kind: SwapKind::Points,
            points: Some(points),
            created_at: Utc::now(),
        }
    }

    /// True if the given user is either side of this swap
    pub fn involves(&self, user_id: &str) -> bool {
        self.requester_id == user_id || self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_swap_is_pending_without_points() {
        let swap = Swap::direct("item-1", "req-1", "own-1");
        assert_eq!(swap.status, SwapStatus::Pending);
        assert_eq!(swap.kind, SwapKind::Swap);
        assert!(swap.points.is_none());
    }

    #[test]
    fn test_redemption_is_completed_with_points() {
        let swap = Swap::redemption("item-1", "req-1", "own-1", 40);
        assert_eq!(swap.status, SwapStatus::Completed);
        assert_eq!(swap.kind, SwapKind::Points);
        assert_eq!(swap.points, Some(40));
    }

    #[test]
    fn test_involves_either_side() {
        let swap = Swap::direct("item-1", "req-1", "own-1");
        assert!(swap.involves("req-1"));
        assert!(swap.involves("own-1"));
        assert!(!swap.involves("other"));
    }

    #[test]
    fn test_points_field_omitted_when_absent() {
        let swap = Swap::direct("item-1", "req-1", "own-1");
        let json = serde_json::to_value(&swap).unwrap();
        assert!(json.get("points").is_none());
        assert_eq!(json["type"], "swap");
    }
}
