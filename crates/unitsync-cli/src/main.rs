use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use unitsync_core::{HookConfig, LifecycleAction, UnitReference};
use unitsync_hook::run_lifecycle_hook;

const DEFAULT_CONFIG_PATH: &str = "/etc/unitsync/hook.toml";

#[derive(Parser, Debug)]
#[command(name = "unitsync")]
#[command(about = "Package lifecycle unit-state synchronizer", long_about = None)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    unit: Option<String>,
    action: String,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    package_manager_args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.unit.as_deref())?;
    let action = resolve_action(&cli.action, &config)?;
    if action.is_none() {
        eprintln!(
            "unitsync: ignoring unrecognized lifecycle action: {}",
            cli.action
        );
    }

    for warning in run_lifecycle_hook(&config, action)? {
        eprintln!("unitsync: {warning}");
    }
    Ok(())
}

fn resolve_config(config_path: Option<&Path>, unit_override: Option<&str>) -> Result<HookConfig> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let unit_override = unit_override.map(UnitReference::parse).transpose()?;

    if path.exists() {
        let mut config = HookConfig::load(&path)?;
        if let Some(unit) = unit_override {
            config.unit = unit;
        }
        return Ok(config);
    }

    match unit_override {
        Some(unit) => Ok(HookConfig::for_unit(unit)),
        None => Err(anyhow!(
            "hook config not found: {} (pass --config or --unit)",
            path.display()
        )),
    }
}

fn resolve_action(token: &str, config: &HookConfig) -> Result<Option<LifecycleAction>> {
    match LifecycleAction::parse(token) {
        Some(action) => Ok(Some(action)),
        None if config.strict_actions => Err(anyhow!("unrecognized lifecycle action: {token}")),
        None => Ok(None),
    }
}
