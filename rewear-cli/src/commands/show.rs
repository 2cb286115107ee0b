//! Show command - display one item

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(item_id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let view = ctx.marketplace_service.item(item_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let item = &view.item;
    println!("{}  [{}]", item.title.bold(), output::item_status_label(item.status));
    println!();
    println!("  {}", item.description);
    println!();
    println!("  Category:  {}", item.category);
    println!("  Size:      {}", item.size);
    println!("  Type:      {}", item.kind);
    println!("  Condition: {}", item.condition);
    println!("  Points:    {}", output::format_points(item.points));
    if !item.tags.is_empty() {
        println!("  Tags:      {}", item.tags.join(", "));
    }
    if !item.images.is_empty() {
        println!("  Images:    {} attached", item.images.len());
    }
    println!("  Listed by: {} <{}>", view.owner_name, view.owner_email);
    println!("  Listed on: {}", item.created_at.format("%Y-%m-%d"));
    println!();
    println!("  Swap:   rw request {}", item.id);
    println!("  Redeem: rw redeem {}", item.id);

    Ok(())
}
