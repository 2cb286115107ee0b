//! Login command - start a session

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use rewear_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(email: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx.identity_service.login(&email, &password) {
        Ok(user) => {
            log_event(
                &logger,
                LogEvent::new("user_logged_in")
                    .with_command("login")
                    .with_user(&user.id),
            );
            output::success(&format!("Logged in as {}", user.name));
            println!("  Balance: {}", output::format_points(user.points).bold());
            if user.is_admin {
                println!("  Admin access: rw admin stats");
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("login_failed")
                    .with_command("login")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
