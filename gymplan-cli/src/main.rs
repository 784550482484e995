mod commands;
mod context;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::context::Context;

#[derive(Parser)]
#[command(name = "gymplan")]
#[command(about = "Plan your weekly workouts, share them as a link and export them to your calendar")]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this directory for the stored plan instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Workout fields shared by `add` and `edit`.
#[derive(Args, Clone, Default)]
pub struct WorkoutArgs {
    /// Day of the week (mon..sun, monday..sunday or 0-6)
    #[arg(short, long)]
    day: Option<String>,

    /// Start time (HH:MM)
    #[arg(short, long)]
    start: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    duration: Option<u32>,

    /// Muscle group, e.g. "Chest"
    #[arg(short, long)]
    group: Option<String>,

    /// Easy, Moderate, Hard, Max, or any label you like
    #[arg(short, long)]
    intensity: Option<String>,

    /// Display color, e.g. "#66c2ff"
    #[arg(short, long)]
    color: Option<String>,

    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the week, grouped by day
    Week,
    /// Add a workout
    Add {
        name: String,

        #[command(flatten)]
        fields: WorkoutArgs,
    },
    /// Change a workout (by id or id prefix)
    Edit {
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: WorkoutArgs,
    },
    /// Delete a workout (by id or id prefix)
    Delete { id: String },
    /// Delete every workout
    Clear {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Print a link that opens this plan
    Share {
        /// Page the link points at (defaults to share_base_url from the config)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Replace the plan with one from a share link or token
    Open { link: String },
    /// Write the plan as JSON
    ExportJson {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace the plan with one from a JSON file
    ImportJson { file: PathBuf },
    /// Export the plan as a weekly recurring .ics calendar
    ExportIcs {
        /// Output file
        #[arg(short, long, default_value = gymplan_core::ics::FILE_NAME)]
        output: PathBuf,
    },
    /// List upcoming sessions
    Agenda {
        /// How many days ahead to look (1-3660)
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=3660))]
        days: u32,
    },
    /// Show paths, or create a config file
    Config {
        /// Write a commented config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let ctx = Context::load(cli.data_dir)?;

    match cli.command {
        Commands::Week => commands::week::run(&ctx),
        Commands::Add { name, fields } => commands::add::run(&ctx, name, fields),
        Commands::Edit { id, name, fields } => commands::edit::run(&ctx, &id, name, fields),
        Commands::Delete { id } => commands::delete::run(&ctx, &id),
        Commands::Clear { yes } => commands::clear::run(&ctx, yes),
        Commands::Share { base_url } => commands::share::run(&ctx, base_url.as_deref()),
        Commands::Open { link } => commands::open::run(&ctx, &link),
        Commands::ExportJson { output } => commands::json::export(&ctx, output.as_deref()),
        Commands::ImportJson { file } => commands::json::import(&ctx, &file),
        Commands::ExportIcs { output } => commands::export_ics::run(&ctx, &output),
        Commands::Agenda { days } => commands::agenda::run(&ctx, days),
        Commands::Config { init } => commands::config::run(&ctx, init),
    }
}
