//! What every command works against: the config and the plan store.

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use gymplan_core::config::GymplanConfig;
use gymplan_core::plan::Plan;
use gymplan_core::store::PlanStore;

pub struct Context {
    pub config: GymplanConfig,
    pub store: PlanStore,
}

impl Context {
    /// Load the config; `data_dir` overrides the configured data directory.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let config = GymplanConfig::load().context("Could not load config")?;
        let data_path = data_dir.unwrap_or_else(|| config.data_path());
        tracing::debug!("Using data directory {}", data_path.display());

        Ok(Context {
            store: PlanStore::new(&data_path),
            config,
        })
    }

    /// The current plan: stored plan, or the starter plan on first use.
    pub fn plan(&self) -> Plan {
        self.store.load_or_starter()
    }

    pub fn save(&self, plan: &Plan) -> Result<()> {
        self.store
            .save(plan)
            .with_context(|| format!("Could not save plan to {}", self.store.path().display()))
    }
}

/// Resolve a full id or an unambiguous id prefix.
pub fn resolve_id(plan: &Plan, input: &str) -> Result<String> {
    if plan.find(input).is_some() {
        return Ok(input.to_string());
    }

    let mut matches: Vec<&str> = plan
        .events()
        .iter()
        .map(|e| e.id.as_str())
        .filter(|id| id.starts_with(input))
        .collect();
    matches.dedup();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => bail!("No workout with id '{}'", input),
        _ => bail!(
            "Id '{}' is ambiguous, it matches: {}",
            input,
            matches.join(", ")
        ),
    }
}
