//! Add command - list a clothing item

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use colored::Colorize;
use dialoguer::Input;
use rewear_core::services::NewItem;
use rewear_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

#[allow(clippy::too_many_arguments)]
pub fn run(
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    size: Option<String>,
    kind: Option<String>,
    condition: Option<String>,
    tags: Vec<String>,
    points: Option<i64>,
    images: Vec<PathBuf>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let user = ctx.identity_service.require_user()?;

    let title = prompt_if_missing(title, "Title")?;
    let description = prompt_if_missing(description, "Description")?;
    let category = prompt_if_missing(category, "Category")?;
    let size = prompt_if_missing(size, "Size")?;
    let kind = prompt_if_missing(kind, "Kind")?;
    let condition = prompt_if_missing(condition, "Condition")?;

    let points = match points {
        Some(p) => p,
        None => Input::new()
            .with_prompt("Points cost")
            .default(10i64)
            .interact_text()?,
    };

    // Images are embedded in the item document as base64
    let mut encoded_images = Vec::with_capacity(images.len());
    for path in &images {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read image: {}", path.display()))?;
        encoded_images.push(STANDARD.encode(&bytes));
    }

    let result = ctx.marketplace_service.add_item(
        &user.id,
        &NewItem {
            title,
            description,
            category,
            size,
            kind,
            condition,
            tags,
            images: encoded_images,
            points,
        },
    )?;
    log_event(
        &logger,
        LogEvent::new("item_listed")
            .with_command("add")
            .with_user(&user.id)
            .with_item(&result.item.id),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::success(&format!("Listed '{}'", result.item.title));
    println!("  Item ID: {}", result.item.id);
    println!(
        "  Listing reward: +{}",
        output::format_points(result.points_awarded).bold()
    );
    println!("  New balance: {}", output::format_points(result.owner_points));

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}
