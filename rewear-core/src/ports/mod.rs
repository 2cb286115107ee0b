//! Port definitions - trait abstractions over external dependencies

mod store;

pub use store::{Store, StoreData};
