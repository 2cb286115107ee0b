//! Status command - community statistics

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

/// Home-page carousel size
const FEATURED_LIMIT: usize = 6;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let summary = ctx.status_service.summary()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "ReWear Community".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Members", &summary.total_users.to_string()]);
    table.add_row(vec!["Items listed", &summary.total_items.to_string()]);
    table.add_row(vec!["Available now", &summary.available_items.to_string()]);
    table.add_row(vec!["Swaps completed", &summary.total_swaps.to_string()]);
    println!("{}", table);

    let featured = ctx.marketplace_service.featured(FEATURED_LIMIT)?;
    if !featured.is_empty() {
        println!();
        println!("{}", "Featured".bold());
        for view in &featured {
            println!(
                "  {} ({}, {}) - {}",
                view.item.title,
                view.item.category,
                output::format_points(view.item.points),
                view.item.id
            );
        }
    }

    if ctx.config.demo_mode {
        println!();
        output::warning("Demo mode is on. Turn it off with: rw demo off");
    }

    Ok(())
}
