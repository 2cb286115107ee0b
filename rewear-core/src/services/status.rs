//! Status service - public community counters

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::ItemStatus;
use crate::ports::Store;

/// Home-page counters; visible without logging in
#[derive(Debug, Clone, Serialize)]
pub struct CommunitySummary {
    pub total_users: usize,
    pub total_items: usize,
    pub available_items: usize,
    pub total_swaps: usize,
}

/// Status service for community summaries
pub struct StatusService {
    store: Arc<dyn Store>,
}

impl StatusService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> Result<CommunitySummary> {
        let data = self.store.snapshot()?;
        Ok(CommunitySummary {
            total_users: data.users.len(),
            total_items: data.items.len(),
            available_items: data
                .items
                .iter()
                .filter(|i| i.status == ItemStatus::Available)
                .count(),
            total_swaps: data.swaps.len(),
        })
    }
}
