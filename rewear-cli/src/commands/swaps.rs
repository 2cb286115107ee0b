//! Swaps command - list swaps involving the logged-in user

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = ctx.identity_service.require_user()?;

    let swaps = ctx.swap_service.swaps_for_user(&user.id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&swaps)?);
        return Ok(());
    }

    if swaps.is_empty() {
        println!("No swaps yet. Browse items with: rw browse");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Item", "Type", "Status", "With", "Date"]);
    for view in &swaps {
        let counterparty = if view.swap.requester_id == user.id {
            view.owner_name.clone()
        } else {
            view.requester_name.clone()
        };
        table.add_row(vec![
            view.swap.id.clone(),
            view.item_title.clone().unwrap_or_else(|| "(removed)".to_string()),
            match view.swap.points {
                Some(p) => format!("points ({})", p),
                None => "swap".to_string(),
            },
            output::swap_status_label(view.swap.status),
            counterparty,
            view.swap.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("{}", table);

    Ok(())
}
