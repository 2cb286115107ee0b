//! Admin command - platform administration

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;
use rewear_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Show platform statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all items, any status
    Items {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all users
    Users {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove an item listing
    DeleteItem {
        /// Item ID
        item_id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
    /// Remove a user and their listed items
    DeleteUser {
        /// User ID
        user_id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

pub fn run(command: AdminCommands) -> Result<()> {
    let ctx = get_context()?;
    let admin = ctx.identity_service.require_admin()?;

    match command {
        AdminCommands::Stats { json } => {
            let stats = ctx.admin_service.stats(&admin.id)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("{}", "Platform Statistics".bold());
            println!();
            let mut table = output::create_table();
            table.add_row(vec!["Users", &stats.total_users.to_string()]);
            table.add_row(vec!["Items", &stats.total_items.to_string()]);
            table.add_row(vec!["Swaps", &stats.total_swaps.to_string()]);
            table.add_row(vec!["Pending swaps", &stats.pending_swaps.to_string()]);
            println!("{}", table);
            Ok(())
        }
        AdminCommands::Items { json } => {
            let items = ctx.admin_service.list_items(&admin.id)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
                return Ok(());
            }

            if items.is_empty() {
                println!("No items listed.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Title", "Status", "Points", "Owner"]);
            for view in &items {
                table.add_row(vec![
                    view.item.id.clone(),
                    view.item.title.clone(),
                    output::item_status_label(view.item.status),
                    view.item.points.to_string(),
                    format!("{} <{}>", view.owner_name, view.owner_email),
                ]);
            }
            println!("{}", table);
            Ok(())
        }
        AdminCommands::Users { json } => {
            let users = ctx.admin_service.list_users(&admin.id)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Name", "Email", "Points", "Items", "Role"]);
            for user in &users {
                table.add_row(vec![
                    user.id.clone(),
                    user.name.clone(),
                    user.email.clone(),
                    user.points.to_string(),
                    user.items_listed.to_string(),
                    if user.is_admin {
                        "admin".cyan().to_string()
                    } else {
                        "member".to_string()
                    },
                ]);
            }
            println!("{}", table);
            Ok(())
        }
        AdminCommands::DeleteItem { item_id, force } => {
            let view = ctx.marketplace_service.item(&item_id)?;

            if !force {
                println!(
                    "\n{}",
                    format!("This will remove '{}' from the marketplace.", view.item.title)
                        .yellow()
                );
                println!("{}\n", "Swap history referring to it is kept.".dimmed());
                if !Confirm::new()
                    .with_prompt("Are you sure?")
                    .default(false)
                    .interact()?
                {
                    println!("{}\n", "Cancelled".dimmed());
                    return Ok(());
                }
            }

            ctx.admin_service.delete_item(&admin.id, &item_id)?;
            log_event(
                &get_logger(),
                LogEvent::new("item_deleted")
                    .with_command("admin delete-item")
                    .with_user(&admin.id)
                    .with_item(&item_id),
            );
            output::success(&format!("Removed '{}'", view.item.title));
            Ok(())
        }
        AdminCommands::DeleteUser { user_id, force } => {
            if !force {
                println!(
                    "\n{}",
                    "This will remove the user and every item they listed.".yellow()
                );
                if !Confirm::new()
                    .with_prompt("Are you sure?")
                    .default(false)
                    .interact()?
                {
                    println!("{}\n", "Cancelled".dimmed());
                    return Ok(());
                }
            }

            let deletion = ctx.admin_service.delete_user(&admin.id, &user_id)?;
            log_event(
                &get_logger(),
                LogEvent::new("user_deleted")
                    .with_command("admin delete-user")
                    .with_user(&admin.id),
            );
            output::success("User removed");
            println!("  Items removed with them: {}", deletion.items_removed);
            Ok(())
        }
    }
}
