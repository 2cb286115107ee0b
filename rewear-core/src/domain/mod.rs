//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod item;
mod session;
mod swap;
mod user;
pub mod id;
pub mod result;

pub use item::{Item, ItemStatus};
pub use session::Session;
pub use swap::{Swap, SwapKind, SwapStatus};
pub use user::User;
