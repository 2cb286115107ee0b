//! Swap service - swap requests and points redemption
//!
//! Every lifecycle operation is one store commit: the swap record and the
//! item status flip (and the points debit, for redemptions) land together
//! or not at all.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{ItemStatus, Swap};
use crate::ports::{Store, StoreData};

/// A swap joined with display fields at read time
#[derive(Debug, Clone, Serialize)]
pub struct SwapView {
    #[serde(flatten)]
    pub swap: Swap,
    /// None if the item was deleted by an admin after the swap
    pub item_title: Option<String>,
    pub requester_name: String,
    pub owner_name: String,
}

impl SwapView {
    pub(crate) fn build(data: &StoreData, swap: &Swap) -> Self {
        Self {
            swap: swap.clone(),
            item_title: data.item_by_id(&swap.item_id).map(|i| i.title.clone()),
            requester_name: data
                .user_by_id(&swap.requester_id)
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            owner_name: data
                .user_by_id(&swap.owner_id)
                .map(|u| u.name.clone())
                .unwrap_or_default(),
        }
    }
}

/// Result of a points redemption
#[derive(Debug, Clone, Serialize)]
pub struct RedemptionResult {
    pub swap: SwapView,
    /// Requester balance after the debit
    pub remaining_points: i64,
}

/// Swap service for the exchange lifecycle
pub struct SwapService {
    store: Arc<dyn Store>,
}

impl SwapService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Request a direct swap: pending swap record + item flips to requested
    pub fn request_swap(&self, requester_id: &str, item_id: &str) -> Result<SwapView> {
        let mut created: Option<SwapView> = None;

        self.store.commit(&mut |data| {
            let item = data
                .item_by_id(item_id)
                .ok_or_else(|| Error::not_found(format!("item {}", item_id)))?
                .clone();
            if !item.status.can_transition_to(ItemStatus::Requested) {
                return Err(Error::ItemUnavailable(item.title.clone()));
            }
            if data.user_by_id(requester_id).is_none() {
                return Err(Error::not_found(format!("user {}", requester_id)));
            }
            if item.owner_id == requester_id {
                return Err(Error::validation("you cannot request your own item"));
            }

            let swap = Swap::direct(&item.id, requester_id, &item.owner_id);
            data.item_by_id_mut(item_id)
                .ok_or_else(|| Error::not_found(format!("item {}", item_id)))?
                .status = ItemStatus::Requested;
            data.swaps.push(swap.clone());
            created = Some(SwapView::build(data, &swap));
            Ok(())
        })?;

        created.ok_or_else(|| Error::storage("swap request committed without a record"))
    }

    /// Redeem an item for points: debit, completed swap record, item swapped
    pub fn redeem_with_points(&self, requester_id: &str, item_id: &str) -> Result<RedemptionResult> {
        let mut created: Option<RedemptionResult> = None;

        self.store.commit(&mut |data| {
            let item = data
                .item_by_id(item_id)
                .ok_or_else(|| Error::not_found(format!("item {}", item_id)))?
                .clone();
            if !item.status.can_transition_to(ItemStatus::Swapped) {
                return Err(Error::ItemUnavailable(item.title.clone()));
            }
            if item.owner_id == requester_id {
                return Err(Error::validation("you cannot redeem your own item"));
            }

            let requester = data
                .user_by_id_mut(requester_id)
                .ok_or_else(|| Error::not_found(format!("user {}", requester_id)))?;
            if requester.points < item.points {
                return Err(Error::InsufficientPoints {
                    required: item.points,
                    available: requester.points,
                });
            }
            requester.points -= item.points;
            let remaining = requester.points;

            let swap = Swap::redemption(&item.id, requester_id, &item.owner_id, item.points);
            data.item_by_id_mut(item_id)
                .ok_or_else(|| Error::not_found(format!("item {}", item_id)))?
                .status = ItemStatus::Swapped;
            data.swaps.push(swap.clone());
            created = Some(RedemptionResult {
                swap: SwapView::build(data, &swap),
                remaining_points: remaining,
            });
            Ok(())
        })?;

        created.ok_or_else(|| Error::storage("redemption committed without a record"))
    }

    /// Swaps where the user is requester or owner, newest first
    pub fn swaps_for_user(&self, user_id: &str) -> Result<Vec<SwapView>> {
        let data = self.store.snapshot()?;
        let mut swaps: Vec<&Swap> = data.swaps.iter().filter(|s| s.involves(user_id)).collect();
        swaps.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(swaps
            .into_iter()
            .map(|swap| SwapView::build(&data, swap))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::config::Config;
    use crate::domain::{SwapKind, SwapStatus};
    use crate::services::marketplace::NewItem;
    use crate::services::{IdentityService, MarketplaceService, NewUser};

    struct Fixture {
        store: Arc<MemoryStore>,
        swaps: SwapService,
        owner_id: String,
        requester_id: String,
        item_id: String,
    }

    /// Owner lists a 40-point jacket; requester starts with 100 points
    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let config = Config::default();
        let identity = IdentityService::new(store.clone(), &config);
        let marketplace = MarketplaceService::new(store.clone(), &config);

        let owner_id = identity
            .register(&NewUser {
                name: "Olivia".to_string(),
                email: "olivia@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap()
            .id;
        let requester_id = identity
            .register(&NewUser {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap()
            .id;

        let item_id = marketplace
            .add_item(
                &owner_id,
                &NewItem {
                    title: "Denim Jacket".to_string(),
                    description: "Lightly worn".to_string(),
                    category: "Outerwear".to_string(),
                    size: "M".to_string(),
                    kind: "jacket".to_string(),
                    condition: "good".to_string(),
                    tags: vec![],
                    images: vec![],
                    points: 40,
                },
            )
            .unwrap()
            .item
            .id;

        Fixture {
            swaps: SwapService::new(store.clone()),
            store,
            owner_id,
            requester_id,
            item_id,
        }
    }

    #[test]
    fn test_request_swap_creates_pending_and_flips_status() {
        let fx = fixture();
        let view = fx.swaps.request_swap(&fx.requester_id, &fx.item_id).unwrap();

        assert_eq!(view.swap.status, SwapStatus::Pending);
        assert_eq!(view.swap.kind, SwapKind::Swap);
        assert_eq!(view.item_title.as_deref(), Some("Denim Jacket"));
        assert_eq!(view.requester_name, "Ravi");
        assert_eq!(view.owner_name, "Olivia");

        let data = fx.store.snapshot().unwrap();
        assert_eq!(data.item_by_id(&fx.item_id).unwrap().status, ItemStatus::Requested);
        assert_eq!(data.swaps.len(), 1);
    }

    #[test]
    fn test_requested_item_cannot_be_requested_again() {
        let fx = fixture();
        fx.swaps.request_swap(&fx.requester_id, &fx.item_id).unwrap();

        let err = fx.swaps.request_swap(&fx.requester_id, &fx.item_id).unwrap_err();
        assert!(matches!(err, Error::ItemUnavailable(_)));
    }

    #[test]
    fn test_cannot_request_own_item() {
        let fx = fixture();
        let err = fx.swaps.request_swap(&fx.owner_id, &fx.item_id).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_redeem_debits_exactly_item_points() {
        let fx = fixture();
        let result = fx.swaps.redeem_with_points(&fx.requester_id, &fx.item_id).unwrap();

        assert_eq!(result.remaining_points, 60); // 100 - 40
        assert_eq!(result.swap.swap.status, SwapStatus::Completed);
        assert_eq!(result.swap.swap.kind, SwapKind::Points);
        assert_eq!(result.swap.swap.points, Some(40));

        let data = fx.store.snapshot().unwrap();
        assert_eq!(data.item_by_id(&fx.item_id).unwrap().status, ItemStatus::Swapped);
        assert_eq!(data.user_by_id(&fx.requester_id).unwrap().points, 60);
    }

    #[test]
    fn test_redeem_with_insufficient_balance_changes_nothing() {
        let fx = fixture();
        // Drain the requester below the item price
        fx.store
            .commit(&mut |data| {
                data.user_by_id_mut(&fx.requester_id).unwrap().points = 10;
                Ok(())
            })
            .unwrap();

        let err = fx.swaps.redeem_with_points(&fx.requester_id, &fx.item_id).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientPoints {
                required: 40,
                available: 10
            }
        ));

        // Atomicity: no debit, no swap record, item still available
        let data = fx.store.snapshot().unwrap();
        assert_eq!(data.user_by_id(&fx.requester_id).unwrap().points, 10);
        assert!(data.swaps.is_empty());
        assert_eq!(data.item_by_id(&fx.item_id).unwrap().status, ItemStatus::Available);
    }

    #[test]
    fn test_requested_item_can_still_be_redeemed() {
        // available -> requested -> swapped is a legal path
        let fx = fixture();
        fx.swaps.request_swap(&fx.requester_id, &fx.item_id).unwrap();
        fx.swaps.redeem_with_points(&fx.requester_id, &fx.item_id).unwrap();

        let data = fx.store.snapshot().unwrap();
        assert_eq!(data.item_by_id(&fx.item_id).unwrap().status, ItemStatus::Swapped);
    }

    #[test]
    fn test_swaps_for_user_covers_both_sides() {
        let fx = fixture();
        fx.swaps.request_swap(&fx.requester_id, &fx.item_id).unwrap();

        assert_eq!(fx.swaps.swaps_for_user(&fx.requester_id).unwrap().len(), 1);
        assert_eq!(fx.swaps.swaps_for_user(&fx.owner_id).unwrap().len(), 1);
        assert!(fx.swaps.swaps_for_user("someone-else").unwrap().is_empty());
    }
}
