use anyhow::Result;
use gymplan_core::config::GymplanConfig;
use owo_colors::OwoColorize;

use crate::context::Context;

pub fn run(ctx: &Context, init: bool) -> Result<()> {
    let config_path = GymplanConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("{} {}", "Config already exists:".dimmed(), config_path.display());
        } else {
            GymplanConfig::create_default_config(&config_path)?;
            println!("{} {}", "Created".green(), config_path.display());
        }
        return Ok(());
    }

    let exists = if config_path.exists() { "" } else { " (not created, using defaults)" };
    println!("Config:   {}{}", config_path.display(), exists.dimmed());
    println!("Plan:     {}", ctx.store.path().display());
    println!("Share to: {}", ctx.config.share_base_url);
    println!("Calendar: {}", ctx.config.calendar_name);

    Ok(())
}
