//! Logout command - end the current session

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;

    let was_logged_in = ctx.identity_service.session()?.is_some();
    ctx.identity_service.logout()?;

    if was_logged_in {
        output::success("Logged out");
    } else {
        output::info("No active session");
    }

    Ok(())
}
