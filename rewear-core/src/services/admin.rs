//! Admin service - moderation and platform oversight
//!
//! Every operation takes the acting user's id and verifies the admin flag
//! against the store before doing anything, so a stale or forged actor id
//! cannot slip through.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::SwapStatus;
use crate::ports::{Store, StoreData};
use crate::services::ItemView;

/// Platform-wide counters for the admin panel
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_items: usize,
    pub total_swaps: usize,
    pub pending_swaps: usize,
}

/// Per-user row for the admin user list
#[derive(Debug, Clone, Serialize)]
pub struct UserOverview {
    pub id: String,
    pub name: String,
    pub email: String,
    pub points: i64,
    pub is_admin: bool,
    pub items_listed: usize,
    pub created_at: DateTime<Utc>,
}

/// Result of a cascading user deletion
#[derive(Debug, Clone, Serialize)]
pub struct UserDeletion {
    pub user_id: String,
    pub items_removed: usize,
}

/// Admin service for moderation
pub struct AdminService {
    store: Arc<dyn Store>,
}

impl AdminService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    fn check_admin(data: &StoreData, actor_id: &str) -> Result<()> {
        match data.user_by_id(actor_id) {
            Some(user) if user.is_admin => Ok(()),
            _ => Err(Error::Forbidden("admin access required".to_string())),
        }
    }

    /// Platform counters
    pub fn stats(&self, actor_id: &str) -> Result<AdminStats> {
        let data = self.store.snapshot()?;
        Self::check_admin(&data, actor_id)?;
        Ok(AdminStats {
            total_users: data.users.len(),
            total_items: data.items.len(),
            total_swaps: data.swaps.len(),
            pending_swaps: data
                .swaps
                .iter()
                .filter(|s| s.status == SwapStatus::Pending)
                .count(),
        })
    }

    /// Every user with their listing count
    pub fn list_users(&self, actor_id: &str) -> Result<Vec<UserOverview>> {
        let data = self.store.snapshot()?;
        Self::check_admin(&data, actor_id)?;
        Ok(data
            .users
            .iter()
            .map(|user| UserOverview {
                id: user.id.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
                points: user.points,
                is_admin: user.is_admin,
                items_listed: data.items.iter().filter(|i| i.owner_id == user.id).count(),
                created_at: user.created_at,
            })
            .collect())
    }

    /// Every item regardless of status, newest first
    pub fn list_items(&self, actor_id: &str) -> Result<Vec<ItemView>> {
        let data = self.store.snapshot()?;
        Self::check_admin(&data, actor_id)?;
        let mut items: Vec<ItemView> = data
            .items
            .iter()
            .map(|item| ItemView::build(&data, item))
            .collect();
        items.sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
        Ok(items)
    }

    /// Remove an item. Swap history referencing it is kept.
    pub fn delete_item(&self, actor_id: &str, item_id: &str) -> Result<()> {
        self.store.commit(&mut |data| {
            Self::check_admin(data, actor_id)?;
            if data.item_by_id(item_id).is_none() {
                return Err(Error::not_found(format!("item {}", item_id)));
            }
            data.items.retain(|i| i.id != item_id);
            Ok(())
        })
    }

    /// Remove a user and cascade removal of all their items in one commit.
    /// Clears the session if it belonged to the deleted user.
    pub fn delete_user(&self, actor_id: &str, user_id: &str) -> Result<UserDeletion> {
        let mut items_removed = 0;

        self.store.commit(&mut |data| {
            Self::check_admin(data, actor_id)?;
            let target = data
                .user_by_id(user_id)
                .ok_or_else(|| Error::not_found(format!("user {}", user_id)))?;
            if target.is_admin {
                return Err(Error::validation("cannot delete an admin account"));
            }

            let before = data.items.len();
            data.items.retain(|i| i.owner_id != user_id);
            items_removed = before - data.items.len();

            data.users.retain(|u| u.id != user_id);
            if data.session.as_ref().is_some_and(|s| s.user_id == user_id) {
                data.session = None;
            }
            Ok(())
        })?;

        Ok(UserDeletion {
            user_id: user_id.to_string(),
            items_removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::config::Config;
    use crate::services::marketplace::NewItem;
    use crate::services::{IdentityService, MarketplaceService, NewUser, SwapService};

    struct Fixture {
        store: Arc<MemoryStore>,
        admin_service: AdminService,
        admin_id: String,
        member_id: String,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let config = Config::default();
        let identity = IdentityService::new(store.clone(), &config);

        let admin_id = identity
            .register(&NewUser {
                name: "Admin".to_string(),
                email: "admin@rewear.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap()
            .id;
        let member_id = identity
            .register(&NewUser {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap()
            .id;

        Fixture {
            admin_service: AdminService::new(store.clone()),
            store,
            admin_id,
            member_id,
        }
    }

    fn list_item(fx: &Fixture, owner_id: &str, title: &str) -> String {
        let marketplace = MarketplaceService::new(fx.store.clone(), &Config::default());
        marketplace
            .add_item(
                owner_id,
                &NewItem {
                    title: title.to_string(),
                    description: "desc".to_string(),
                    category: "Tops".to_string(),
                    size: "M".to_string(),
                    kind: "shirt".to_string(),
                    condition: "good".to_string(),
                    tags: vec![],
                    images: vec![],
                    points: 10,
                },
            )
            .unwrap()
            .item
            .id
    }

    #[test]
    fn test_non_admin_is_forbidden() {
        let fx = fixture();
        assert!(matches!(
            fx.admin_service.stats(&fx.member_id),
            Err(Error::Forbidden(_))
        ));
        assert!(matches!(
            fx.admin_service.delete_item(&fx.member_id, "any"),
            Err(Error::Forbidden(_))
        ));
        assert!(matches!(
            fx.admin_service.stats("unknown-actor"),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn test_stats_counts_pending_swaps() {
        let fx = fixture();
        let item_id = list_item(&fx, &fx.member_id, "Jacket");
        let other = IdentityService::new(fx.store.clone(), &Config::default())
            .register(&NewUser {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap()
            .id;
        SwapService::new(fx.store.clone())
            .request_swap(&other, &item_id)
            .unwrap();

        let stats = fx.admin_service.stats(&fx.admin_id).unwrap();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.total_items, 1);
        assert_eq!(stats.total_swaps, 1);
        assert_eq!(stats.pending_swaps, 1);
    }

    #[test]
    fn test_delete_user_cascades_items() {
        let fx = fixture();
        list_item(&fx, &fx.member_id, "Jacket");
        list_item(&fx, &fx.member_id, "Scarf");
        list_item(&fx, &fx.admin_id, "Coat");

        let deletion = fx
            .admin_service
            .delete_user(&fx.admin_id, &fx.member_id)
            .unwrap();
        assert_eq!(deletion.items_removed, 2);

        let data = fx.store.snapshot().unwrap();
        assert!(data.user_by_id(&fx.member_id).is_none());
        // Only the admin's own item survives
        assert_eq!(data.items.len(), 1);
        assert!(data.items.iter().all(|i| i.owner_id == fx.admin_id));
    }

    #[test]
    fn test_delete_user_clears_their_session() {
        let fx = fixture();
        let identity = IdentityService::new(fx.store.clone(), &Config::default());
        identity.login("jane@example.com", "secret1").unwrap();

        fx.admin_service
            .delete_user(&fx.admin_id, &fx.member_id)
            .unwrap();
        assert!(fx.store.snapshot().unwrap().session.is_none());
    }

    #[test]
    fn test_admins_cannot_be_deleted() {
        let fx = fixture();
        let err = fx
            .admin_service
            .delete_user(&fx.admin_id, &fx.admin_id)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_delete_item_keeps_swap_history() {
        let fx = fixture();
        let item_id = list_item(&fx, &fx.member_id, "Jacket");
        let other = IdentityService::new(fx.store.clone(), &Config::default())
            .register(&NewUser {
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap()
            .id;
        let swaps = SwapService::new(fx.store.clone());
        swaps.request_swap(&other, &item_id).unwrap();

        fx.admin_service.delete_item(&fx.admin_id, &item_id).unwrap();

        let views = swaps.swaps_for_user(&other).unwrap();
        assert_eq!(views.len(), 1);
        assert!(views[0].item_title.is_none()); // title no longer resolvable
    }
}
