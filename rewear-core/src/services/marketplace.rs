//! Marketplace service - item listing and browsing

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{Item, ItemStatus};
use crate::ports::{Store, StoreData};

/// Input for listing a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub size: String,
    pub kind: String,
    pub condition: String,
    pub tags: Vec<String>,
    /// Base64-encoded image blobs
    pub images: Vec<String>,
    pub points: i64,
}

/// Result of listing an item
#[derive(Debug, Clone, Serialize)]
pub struct ListingResult {
    pub item: Item,
    pub points_awarded: i64,
    /// Owner balance after the listing reward
    pub owner_points: i64,
}

/// An item joined with its owner's display fields at read time
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,
    pub owner_name: String,
    pub owner_email: String,
}

impl ItemView {
    /// Join owner fields from the document
    pub(crate) fn build(data: &StoreData, item: &Item) -> Self {
        let owner = data.user_by_id(&item.owner_id);
        Self {
            item: item.clone(),
            owner_name: owner.map(|u| u.name.clone()).unwrap_or_default(),
            owner_email: owner.map(|u| u.email.clone()).unwrap_or_default(),
        }
    }
}

/// Browse sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    PointsLow,
    PointsHigh,
}

/// Browse filters; all optional, applied as one linear pass
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub sort: SortOrder,
}

/// Marketplace service for item listing and browsing
pub struct MarketplaceService {
    store: Arc<dyn Store>,
    listing_reward: i64,
}

impl MarketplaceService {
    pub fn new(store: Arc<dyn Store>, config: &Config) -> Self {
        Self {
            store,
            listing_reward: config.listing_reward,
        }
    }

    /// List an item and credit the owner's listing reward
    ///
    /// The item append and the points grant are one commit; a failure of
    /// either leaves neither applied.
    pub fn add_item(&self, owner_id: &str, new_item: &NewItem) -> Result<ListingResult> {
        let mut item = Item::new(
            owner_id,
            new_item.title.trim(),
            new_item.description.trim(),
            new_item.category.trim(),
            new_item.size.trim(),
            new_item.kind.trim(),
            new_item.condition.trim(),
            &new_item.tags,
            new_item.points,
        );
        item.images = new_item.images.clone();
        item.validate().map_err(Error::validation)?;

        let reward = self.listing_reward;
        let mut owner_points = 0;
        self.store.commit(&mut |data| {
            let owner = data
                .user_by_id_mut(owner_id)
                .ok_or_else(|| Error::not_found(format!("user {}", owner_id)))?;
            owner.points += reward;
            owner_points = owner.points;
            data.items.push(item.clone());
            Ok(())
        })?;

        Ok(ListingResult {
            item,
            points_awarded: reward,
            owner_points,
        })
    }

    /// Browse available items with filters and sorting (linear scan)
    pub fn browse(&self, query: &ItemQuery) -> Result<Vec<ItemView>> {
        let data = self.store.snapshot()?;

        let mut items: Vec<&Item> = data
            .items
            .iter()
            .filter(|item| item.status == ItemStatus::Available)
            .filter(|item| match &query.search {
                Some(term) => item.matches_search(term),
                None => true,
            })
            .filter(|item| match &query.category {
                Some(category) => item.category.eq_ignore_ascii_case(category),
                None => true,
            })
            .filter(|item| match &query.size {
                Some(size) => item.size.eq_ignore_ascii_case(size),
                None => true,
            })
            .collect();

        match query.sort {
            SortOrder::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::PointsLow => items.sort_by_key(|i| i.points),
            SortOrder::PointsHigh => items.sort_by_key(|i| std::cmp::Reverse(i.points)),
        }

        Ok(items
            .into_iter()
            .map(|item| ItemView::build(&data, item))
            .collect())
    }

    /// Newest available items, capped (home-page carousel)
    pub fn featured(&self, limit: usize) -> Result<Vec<ItemView>> {
        let mut items = self.browse(&ItemQuery::default())?;
        items.truncate(limit);
        Ok(items)
    }

    /// A single item with owner fields joined
    pub fn item(&self, item_id: &str) -> Result<ItemView> {
        let data = self.store.snapshot()?;
        let item = data
            .item_by_id(item_id)
            .ok_or_else(|| Error::not_found(format!("item {}", item_id)))?;
        Ok(ItemView::build(&data, item))
    }

    /// All items a user has listed, any status, newest first
    pub fn items_by_owner(&self, owner_id: &str) -> Result<Vec<Item>> {
        let data = self.store.snapshot()?;
        let mut items: Vec<Item> = data
            .items
            .iter()
            .filter(|item| item.owner_id == owner_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }
}
