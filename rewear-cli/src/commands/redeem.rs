//! Redeem command - claim an item with points

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
            "Redeem '{}' for {}? Your balance: {}",
            view.item.title.bold(),
            output::format_points(view.item.points),
            output::format_points(user.points)
        );
        if !Confirm::new()
            .with_prompt("Spend the points?")
            .default(false)
            .interact()?
        {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    match ctx.swap_service.redeem_with_points(&user.id, item_id) {
        Ok(result) => {
            log_event(
                &logger,
                LogEvent::new("item_redeemed")
                    .with_command("redeem")
                    .with_user(&user.id)
                    .with_item(item_id),
            );
            output::success(&format!(
                "Redeemed '{}'",
                result.swap.item_title.as_deref().unwrap_or(item_id)
            ));
            println!(
                "  Remaining balance: {}",
                output::format_points(result.remaining_points).bold()
            );
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("redemption_failed")
                    .with_command("redeem")
                    .with_user(&user.id)
                    .with_item(item_id)
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
