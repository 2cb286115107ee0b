//! Request command - ask for a direct swap

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use rewear_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(item_id: &str, yes: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let user = ctx.identity_service.require_user()?;

    let view = ctx.marketplace_service.item(item_id)?;

    if !yes {
        println!(
            "Request '{}' from {}?",
            view.item.title.bold(),
            view.owner_name
        );
        if !Confirm::new()
            .with_prompt("Send swap request?")
            .default(false)
            .interact()?
        {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let swap = ctx.swap_service.request_swap(&user.id, item_id)?;
    log_event(
        &logger,
        LogEvent::new("swap_requested")
            .with_command("request")
            .with_user(&user.id)
            .with_item(item_id),
    );

    output::success(&format!(
        "Swap requested for '{}'",
        swap.item_title.as_deref().unwrap_or(item_id)
    ));
    println!("  Swap ID: {}", swap.swap.id);
    println!("  Owner: {}", swap.owner_name);
    println!("  Track it with: rw swaps");

    Ok(())
}
