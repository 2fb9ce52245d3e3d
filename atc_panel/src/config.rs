use std::{fs, path::PathBuf};

use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ApplicationResult;

const BUNDLED_CONFIG: &str = include_str!("../config.toml");
const DEFAULT_CLICK_HINT: &str = "Press Enter to contact ATC (Ctrl-D to quit)";

pub(crate) fn atc_panel_project_dir() -> Option<ProjectDirs> {
    ProjectDirs::from("", "meltinglava", "atc_panel")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct PanelConfig {
    pub title: String,
    pub idle_message: String,
    #[serde(default)]
    click_hint: Option<String>,
}

impl PanelConfig {
    pub fn click_hint(&self) -> &str {
        self.click_hint.as_deref().unwrap_or(DEFAULT_CLICK_HINT)
    }

    /// Loads the user config file, creating it from the bundled one when
    /// missing. Without a home directory only the bundled file is used.
    pub fn load(clean_config: bool) -> ApplicationResult<Self> {
        let builder = Config::builder();
        let builder = match setup_config_file(clean_config)? {
            Some(path) => {
                debug!("Reading panel config from {:?}", path);
                builder.add_source(File::from(path).required(true))
            }
            None => {
                warn!("No config directory found, using bundled panel config");
                builder.add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml))
            }
        };
        Ok(builder
            .add_source(Environment::with_prefix("ATC_PANEL"))
            .build()?
            .try_deserialize()?)
    }
}

fn setup_config_file(clean_config: bool) -> ApplicationResult<Option<PathBuf>> {
    let Some(project_dir) = atc_panel_project_dir() else {
        return Ok(None);
    };
    let config_dir = project_dir.config_dir();
    let config_file = config_dir.join("config.toml");
    if clean_config || !config_file.exists() {
        fs::create_dir_all(config_dir)?;
        fs::write(&config_file, BUNDLED_CONFIG)?;
        debug!("Wrote default panel config to {:?}", config_file);
    }
    Ok(Some(config_file))
}
