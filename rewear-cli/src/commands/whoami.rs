//! Whoami command - show the logged-in user

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let Some(user) = ctx.identity_service.current_user()? else {
        if json {
            println!("{}", serde_json::json!({ "logged_in": false }));
        } else {
            output::warning("Not logged in");
            println!("  Log in with: rw login <email>");
        }
        return Ok(());
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "logged_in": true,
                "id": user.id,
                "name": user.name,
                "email": user.email,
                "points": user.points,
                "is_admin": user.is_admin,
            })
        );
        return Ok(());
    }

    println!("{}", user.name.bold());
    println!("  Email: {}", user.email);
    println!("  Balance: {}", output::format_points(user.points));
    if user.is_admin {
        println!("  Role: {}", "admin".cyan());
    }

    Ok(())
}
