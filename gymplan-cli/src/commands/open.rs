use anyhow::{Result, bail};
use gymplan_core::token;
use owo_colors::OwoColorize;

use crate::context::Context;

use super::week;

pub fn run(ctx: &Context, link: &str) -> Result<()> {
    let fragment = token::fragment_of(link);

    let Some(plan) = token::decode(&fragment)? else {
        bail!("Not a plan link: expected a '#{}...' fragment", token::TOKEN_PREFIX);
    };

    ctx.save(&plan)?;
    println!(
        "{} {} {}",
        "Opened".green(),
        plan.len(),
        if plan.len() == 1 { "workout" } else { "workouts" }
    );
    println!();

    week::run(ctx)
}
