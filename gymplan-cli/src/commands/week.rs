use anyhow::Result;
use gymplan_core::plan::{group_by_day, legend};

use crate::context::Context;
use crate::render::{render_legend, render_week};

pub fn run(ctx: &Context) -> Result<()> {
    let plan = ctx.plan();

    println!("{}", render_legend(&legend(&plan)));
    println!();
    println!("{}", render_week(&group_by_day(&plan)));

    Ok(())
}
