//! Local plan storage.
//!
//! The plan lives in a single JSON file named after a fixed storage
//! namespace. Anything unreadable in that file counts as "no stored plan".

use std::path::{Path, PathBuf};

use crate::error::PlanResult;
use crate::plan::Plan;
use crate::token;

/// Storage namespace for the current plan format.
pub const STORAGE_KEY: &str = "gym-scheduler:v1";

/// Plan persistence rooted at a data directory.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(data_dir: &Path) -> Self {
        PlanStore {
            path: data_dir.join(file_name_for(STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored plan, or `None` when nothing usable is stored.
    pub fn load(&self) -> Option<Plan> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Could not read stored plan {}: {}", self.path.display(), e);
                return None;
            }
        };

        match Plan::from_json(&content) {
            Ok(plan) => Some(plan),
            Err(e) => {
                tracing::warn!("Ignoring stored plan {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, plan: &Plan) -> PlanResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, plan.to_pretty_json()?)?;
        tracing::debug!("Saved {} workouts to {}", plan.len(), self.path.display());
        Ok(())
    }

    /// The stored plan, or the starter plan when nothing is stored.
    pub fn load_or_starter(&self) -> Plan {
        self.load().unwrap_or_else(Plan::starter)
    }
}

/// The plan to open with, in priority order: a plan carried by `fragment`
/// (saved right away), the stored plan, then the starter plan.
///
/// A fragment that claims to be a plan but cannot be decoded is logged and
/// ignored; it never leaves a partially applied plan behind.
pub fn startup_plan(store: &PlanStore, fragment: Option<&str>) -> PlanResult<Plan> {
    if let Some(fragment) = fragment {
        match token::decode(fragment) {
            Ok(Some(plan)) => {
                store.save(&plan)?;
                return Ok(plan);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring shared plan: {}", e),
        }
    }

    Ok(store.load_or_starter())
}

/// File name for a storage key, with characters that are awkward in paths replaced.
fn file_name_for(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("{}.json", stem)
}
