//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic over the store port. Each service
//! focuses on a specific use case or feature area.

mod admin;
mod demo;
mod identity;
pub mod logging;
mod marketplace;
mod status;
mod swap;

pub use admin::{AdminService, AdminStats, UserDeletion, UserOverview};
pub use demo::{DemoService, DEMO_PASSWORD};
pub use identity::{IdentityService, NewUser};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use marketplace::{ItemQuery, ItemView, ListingResult, MarketplaceService, NewItem, SortOrder};
pub use status::{CommunitySummary, StatusService};
pub use swap::{RedemptionResult, SwapService, SwapView};
