use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::unit::UnitReference;

pub const DEFAULT_HELPER_PATH: &str = "/usr/bin/deb-systemd-helper";
pub const DEFAULT_MANAGER_CONTROL_DIR: &str = "/run/systemd/system";
pub const DEFAULT_RELOAD_PROGRAM: &str = "systemctl";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HookConfig {
    pub unit: UnitReference,
    #[serde(default = "default_helper_path")]
    pub helper_path: PathBuf,
    #[serde(default = "default_manager_control_dir")]
    pub manager_control_dir: PathBuf,
    #[serde(default = "default_reload_program")]
    pub reload_program: String,
    #[serde(default)]
    pub strict_actions: bool,
}

fn default_helper_path() -> PathBuf {
    PathBuf::from(DEFAULT_HELPER_PATH)
}

fn default_manager_control_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MANAGER_CONTROL_DIR)
}

fn default_reload_program() -> String {
    DEFAULT_RELOAD_PROGRAM.to_string()
}

impl HookConfig {
    pub fn for_unit(unit: UnitReference) -> Self {
        Self {
            unit,
            helper_path: default_helper_path(),
            manager_control_dir: default_manager_control_dir(),
            reload_program: default_reload_program(),
            strict_actions: false,
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("failed to parse unitsync hook config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read hook config: {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid hook config: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.reload_program.trim().is_empty() {
            return Err(anyhow!("reload_program must not be empty"));
        }
        if self.helper_path.as_os_str().is_empty() {
            return Err(anyhow!("helper_path must not be empty"));
        }
        if self.manager_control_dir.as_os_str().is_empty() {
            return Err(anyhow!("manager_control_dir must not be empty"));
        }
        Ok(())
    }
}
