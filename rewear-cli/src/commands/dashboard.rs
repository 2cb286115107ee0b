//! Dashboard command - profile, listed items, and swaps in one view

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = ctx.identity_service.require_user()?;

    let items = ctx.marketplace_service.items_by_owner(&user.id)?;
    let swaps = ctx.swap_service.swaps_for_user(&user.id)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "user": {
                    "id": user.id,
                    "name": user.name,
                    "email": user.email,
                    "points": user.points,
                    "is_admin": user.is_admin,
                },
                "items": items,
                "swaps": swaps,
            }))?
        );
        return Ok(());
    }

    println!("{}", user.name.bold());
    println!("  Email: {}", user.email);
    println!("  Balance: {}", output::format_points(user.points).bold());
    println!();

    println!("{}", "My Items".bold());
    if items.is_empty() {
        println!("  None listed. Earn points with: rw add");
    } else {
        let mut table = output::create_table();
        table.set_header(vec!["ID", "Title", "Points", "Status"]);
        for item in &items {
            table.add_row(vec![
                item.id.clone(),
                item.title.clone(),
                item.points.to_string(),
                output::item_status_label(item.status),
            ]);
        }
        println!("{}", table);
    }
    println!();

    println!("{}", "My Swaps".bold());
    if swaps.is_empty() {
        println!("  None yet. Browse items with: rw browse");
    } else {
        let mut table = output::create_table();
        table.set_header(vec!["Item", "Type", "Status"]);
        for view in &swaps {
            table.add_row(vec![
                view.item_title.clone().unwrap_or_else(|| "(removed)".to_string()),
                match view.swap.points {
                    Some(p) => format!("points ({})", p),
                    None => "swap".to_string(),
                },
                output::swap_status_label(view.swap.status),
            ]);
        }
        println!("{}", table);
    }

    Ok(())
}
