use anyhow::Result;
use owo_colors::OwoColorize;

use crate::context::{Context, resolve_id};

pub fn run(ctx: &Context, id: &str) -> Result<()> {
    let mut plan = ctx.plan();
    let id = resolve_id(&plan, id)?;
    let name = plan.find(&id).map(|e| e.name.clone()).unwrap_or_default();

    plan.remove(&id);
    ctx.save(&plan)?;

    println!("{} {}", "Deleted".red(), name.bold());
    Ok(())
}
