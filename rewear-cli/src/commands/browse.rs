//! Browse command - list available items

use anyhow::Result;
use rewear_core::services::{ItemQuery, SortOrder};

use super::get_context;
use crate::output;

fn parse_sort(sort: &str) -> Result<SortOrder> {
    match sort {
        "newest" => Ok(SortOrder::Newest),
        "oldest" => Ok(SortOrder::Oldest),
        "points-low" => Ok(SortOrder::PointsLow),
        "points-high" => Ok(SortOrder::PointsHigh),
        other => Err(anyhow::anyhow!(
            "Unknown sort order '{}'. Use newest, oldest, points-low, or points-high",
            other
        )),
    }
}

pub fn run(
    search: Option<String>,
    category: Option<String>,
    size: Option<String>,
    sort: &str,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;

    let items = ctx.marketplace_service.browse(&ItemQuery {
        search,
        category,
        size,
        sort: parse_sort(sort)?,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No items match. Try widening the filters, or list one: rw add");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Title", "Category", "Size", "Points", "Owner"]);
    for view in &items {
        table.add_row(vec![
            view.item.id.clone(),
            view.item.title.clone(),
            view.item.category.clone(),
            view.item.size.clone(),
            view.item.points.to_string(),
            view.owner_name.clone(),
        ]);
    }

    println!("{}", table);
    println!("{} item(s). Details: rw show <id>", items.len());

    Ok(())
}
