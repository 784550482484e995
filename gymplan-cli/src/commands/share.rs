use anyhow::{Context as _, Result};
use gymplan_core::token;
use owo_colors::OwoColorize;
use url::Url;

use crate::context::Context;

pub fn run(ctx: &Context, base_url: Option<&str>) -> Result<()> {
    let base = match base_url {
        Some(raw) => Url::parse(raw).with_context(|| format!("Invalid base URL '{}'", raw))?,
        None => ctx.config.share_base()?,
    };

    let plan = ctx.plan();
    let url = token::share_url(&base, &plan)?;

    eprintln!(
        "{}",
        format!(
            "Sharing {} {} ({} characters)",
            plan.len(),
            if plan.len() == 1 { "workout" } else { "workouts" },
            url.as_str().len()
        )
        .dimmed()
    );
    println!("{}", url);

    Ok(())
}
