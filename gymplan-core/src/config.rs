//! Global gymplan configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PlanError, PlanResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/gymplan";
static DEFAULT_SHARE_BASE_URL: &str = "https://gymplan.app/";
static DEFAULT_CALENDAR_NAME: &str = "Gym Plan";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

/// Configuration at ~/.config/gymplan/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GymplanConfig {
    /// Where the plan is stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Page that share links point at
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// X-WR-CALNAME of exported calendars
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
}

impl Default for GymplanConfig {
    fn default() -> Self {
        GymplanConfig {
            data_dir: default_data_dir(),
            share_base_url: default_share_base_url(),
            calendar_name: default_calendar_name(),
        }
    }
}

impl GymplanConfig {
    pub fn config_path() -> PlanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanError::Config("Could not determine config directory".into()))?
            .join("gymplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> PlanResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> PlanResult<Self> {
        let config: GymplanConfig = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .build()
            .map_err(|e| PlanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlanError::Config(e.to_string()))?;

        tracing::debug!("Loaded config (data_dir = {})", config.data_dir.display());
        Ok(config)
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned())
    }

    pub fn share_base(&self) -> PlanResult<Url> {
        Url::parse(&self.share_base_url).map_err(|e| {
            PlanError::Config(format!("Invalid share_base_url '{}': {}", self.share_base_url, e))
        })
    }

    /// Write a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> PlanResult<()> {
        let contents = format!(
            "\
# gymplan configuration

# Where your plan is stored:
# data_dir = \"{}\"

# Page that share links open:
# share_base_url = \"{}\"

# Calendar name used for .ics exports:
# calendar_name = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_SHARE_BASE_URL, DEFAULT_CALENDAR_NAME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
