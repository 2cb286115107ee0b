//! Logs command - view recent application events

use anyhow::Result;
use chrono::{TimeZone, Utc};
use colored::Colorize;
use rewear_core::{EntryPoint, LoggingService};

use super::get_rewear_dir;
use crate::output;

fn format_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

pub fn run(limit: usize, json: bool) -> Result<()> {
    let rewear_dir = get_rewear_dir();
    let service = LoggingService::new(&rewear_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))?;
    let entries = service.recent(limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Command", "Error"]);

    for entry in entries {
        let error_indicator = if entry.event.error_message.is_some() {
            "!".red().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.event.event.clone(),
            entry.event.command.clone().unwrap_or_default(),
            error_indicator,
        ]);
    }

    println!("{}", table);

    Ok(())
}
