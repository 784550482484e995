use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::context::Context;

pub fn run(ctx: &Context, yes: bool) -> Result<()> {
    let mut plan = ctx.plan();

    if plan.is_empty() {
        println!("{}", "Nothing to clear".dimmed());
        return Ok(());
    }

    // Confirm unless --yes
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Clear all {} {}?",
                plan.len(),
                if plan.len() == 1 { "workout" } else { "workouts" }
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    plan.clear();
    ctx.save(&plan)?;

    println!("{}", "Cleared all workouts".red());
    Ok(())
}
