//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rewear_core::{ItemStatus, SwapStatus};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Colored label for an item status
pub fn item_status_label(status: ItemStatus) -> String {
    match status {
        ItemStatus::Available => status.label().green().to_string(),
        ItemStatus::Requested => status.label().yellow().to_string(),
        ItemStatus::Swapped => status.label().dimmed().to_string(),
    }
}

/// Colored label for a swap status
pub fn swap_status_label(status: SwapStatus) -> String {
    match status {
        SwapStatus::Pending => "pending".yellow().to_string(),
        SwapStatus::Completed => "completed".green().to_string(),
    }
}

/// Format a points balance for display
pub fn format_points(points: i64) -> String {
    format!("{} pts", points)
}
