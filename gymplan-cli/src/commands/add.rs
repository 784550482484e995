use anyhow::{Result, anyhow};
use gymplan_core::event::{DEFAULT_DURATION_MIN, DEFAULT_START_TIME, WorkoutEvent};
use gymplan_core::time::ClockTime;
use owo_colors::OwoColorize;

use super::apply_fields;
use crate::WorkoutArgs;
use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context, name: String, fields: WorkoutArgs) -> Result<()> {
    let default_start: ClockTime = DEFAULT_START_TIME.parse()?;
    let mut event = WorkoutEvent::new(name, 0, default_start, DEFAULT_DURATION_MIN);
    apply_fields(&mut event, fields)?;

    let mut plan = ctx.plan();
    let id = plan.add(event)?;
    ctx.save(&plan)?;

    let added = plan
        .find(&id)
        .ok_or_else(|| anyhow!("Workout '{}' vanished after adding it", id))?;
    println!("{} {}", "Added".green(), added.name.bold());
    println!("{}", added.render());

    Ok(())
}
