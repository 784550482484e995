use std::path::Path;

use anyhow::{Context as _, Result};
use gymplan_core::plan::Plan;
use owo_colors::OwoColorize;

use crate::context::Context;

/// Write the plan as pretty JSON to `output`, or stdout.
pub fn export(ctx: &Context, output: Option<&Path>) -> Result<()> {
    let json = ctx.plan().to_pretty_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Replace the plan with the one in `file`. Nothing changes if it is invalid.
pub fn import(ctx: &Context, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;
    let plan = Plan::from_json(&text)
        .with_context(|| format!("{} is not a valid plan", file.display()))?;

    ctx.save(&plan)?;
    println!(
        "{} {} workouts from {}",
        "Imported".green(),
        plan.len(),
        file.display()
    );

    Ok(())
}
