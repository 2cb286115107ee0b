//! Time-based record identifiers
//!
//! Record ids are strings of the form `<unix-millis>-<counter>`. The counter
//! disambiguates ids minted within the same millisecond, which a bare
//! timestamp cannot do.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique record id based on timestamp + counter
pub fn generate_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64;

    // 65536 unique ids per millisecond before the counter wraps
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    format!("{}-{:04x}", timestamp, counter)
}
