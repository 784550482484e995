use anyhow::Result;
use chrono::{Duration, Local};
use gymplan_core::recurrence::plan_agenda;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context, days: u32) -> Result<()> {
    let plan = ctx.plan();

    let from = Local::now().date_naive().and_time(chrono::NaiveTime::MIN);
    let to = from + Duration::days(i64::from(days)) - Duration::seconds(1);

    let agenda = plan_agenda(&plan, from, to);
    if agenda.is_empty() {
        println!("{}", format!("No workouts in the next {} days", days).dimmed());
        return Ok(());
    }

    let mut current_date = None;
    for occurrence in &agenda {
        let date = occurrence.start.date();
        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date.format("%A %Y-%m-%d").bold());
            current_date = Some(date);
        }
        println!("{}", occurrence.render());
    }

    Ok(())
}
