use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Utc;
use gymplan_core::ics::{ExportOptions, export_plan};
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context, output: &Path) -> Result<()> {
    let plan = ctx.plan();
    let options = ExportOptions::at(Utc::now()).with_calendar_name(&ctx.config.calendar_name);
    let export = export_plan(&plan, &options);

    for warning in &export.warnings {
        eprintln!("{}", warning.render());
    }

    std::fs::write(output, &export.document)
        .with_context(|| format!("Could not write {}", output.display()))?;

    println!(
        "{} {} weekly {} to {}",
        "Exported".green(),
        export.exported,
        if export.exported == 1 { "workout" } else { "workouts" },
        output.display()
    );

    Ok(())
}
