//! Register command - create a new account

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use rewear_core::services::NewUser;
use rewear_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(name: Option<String>, email: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let user = ctx.identity_service.register(&NewUser {
        name,
        email,
        password,
    })?;
    log_event(
        &logger,
        LogEvent::new("user_registered")
            .with_command("register")
            .with_user(&user.id),
    );

    output::success(&format!("Welcome to ReWear, {}!", user.name));
    println!(
        "  You start with {}. List an item to earn more.",
        output::format_points(user.points).bold()
    );
    println!("  Log in with: rw login {}", user.email);

    Ok(())
}
