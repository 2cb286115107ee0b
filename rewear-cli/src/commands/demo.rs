//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_context;
use rewear_core::services::DEMO_PASSWORD;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let ctx = get_context()?;

    match command {
        Some(DemoCommands::On) => {
            ctx.demo_service.enable()?;
            println!("{}", "Demo mode enabled".green());
            println!("Sample members and items have been seeded.");
            println!(
                "Log in as sasha@demo.rewear or riley@demo.rewear (password: {}).",
                DEMO_PASSWORD
            );
            Ok(())
        }
        Some(DemoCommands::Off) => {
            ctx.demo_service.disable()?;
            println!("{}", "Demo mode disabled".yellow());
            Ok(())
        }
        Some(DemoCommands::Status) | None => {
            if ctx.demo_service.is_enabled()? {
                println!("Demo mode is {}", "ON".green());
            } else {
                println!("Demo mode is {}", "OFF".yellow());
            }
            Ok(())
        }
    }
}
