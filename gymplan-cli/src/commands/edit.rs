use anyhow::{Result, anyhow};
use owo_colors::OwoColorize;

use super::apply_fields;
use crate::WorkoutArgs;
use crate::context::{Context, resolve_id};
use crate::render::Render;

pub fn run(ctx: &Context, id: &str, name: Option<String>, fields: WorkoutArgs) -> Result<()> {
    let mut plan = ctx.plan();
    let id = resolve_id(&plan, id)?;

    let mut event = plan
        .find(&id)
        .cloned()
        .ok_or_else(|| anyhow!("No workout with id '{}'", id))?;
    if let Some(name) = name {
        event.name = name;
    }
    apply_fields(&mut event, fields)?;

    plan.update(&id, event)?;
    ctx.save(&plan)?;

    if let Some(updated) = plan.find(&id) {
        println!("{} {}", "Updated".yellow(), updated.name.bold());
        println!("{}", updated.render());
    }

    Ok(())
}
