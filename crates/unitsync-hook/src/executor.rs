use std::process::Command;

use anyhow::{anyhow, Context, Result};
use unitsync_core::{HookConfig, LifecycleAction};

use crate::probes::{helper_tool_present, service_manager_present};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStateOp {
    Mask,
    Purge,
    Unmask,
}

impl UnitStateOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mask => "mask",
            Self::Purge => "purge",
            Self::Unmask => "unmask",
        }
    }
}

pub fn run_lifecycle_hook(
    config: &HookConfig,
    action: Option<LifecycleAction>,
) -> Result<Vec<String>> {
    run_lifecycle_hook_with_executor(config, action, run_command)
}

pub fn run_lifecycle_hook_with_executor<RunCommand>(
    config: &HookConfig,
    action: Option<LifecycleAction>,
    mut run_command_executor: RunCommand,
) -> Result<Vec<String>>
where
    RunCommand: FnMut(&mut Command, &str) -> Result<()>,
{
    let mut warnings = Vec::new();

    invoke_guarded(
        service_manager_present(&config.manager_control_dir),
        build_reload_command(config),
        "failed to reload service manager metadata",
        &mut run_command_executor,
        &mut warnings,
    );

    match action {
        Some(LifecycleAction::Remove) => {
            invoke_guarded(
                helper_tool_present(&config.helper_path),
                build_unit_state_command(config, UnitStateOp::Mask),
                "failed to mask unit",
                &mut run_command_executor,
                &mut warnings,
            );
        }
        Some(LifecycleAction::Purge) => {
            let helper_present = helper_tool_present(&config.helper_path);
            invoke_guarded(
                helper_present,
                build_unit_state_command(config, UnitStateOp::Purge),
                "failed to purge unit state",
                &mut run_command_executor,
                &mut warnings,
            );
            invoke_guarded(
                helper_present,
                build_unit_state_command(config, UnitStateOp::Unmask),
                "failed to unmask unit",
                &mut run_command_executor,
                &mut warnings,
            );
        }
        _ => {}
    }

    Ok(warnings)
}

fn invoke_guarded<RunCommand>(
    collaborator_present: bool,
    mut command: Command,
    context_message: &str,
    run_command_executor: &mut RunCommand,
    warnings: &mut Vec<String>,
) where
    RunCommand: FnMut(&mut Command, &str) -> Result<()>,
{
    if !collaborator_present {
        return;
    }
    if let Err(err) = run_command_executor(&mut command, context_message) {
        warnings.push(format!("lifecycle hook warning: {err:#}"));
    }
}

pub(crate) fn build_reload_command(config: &HookConfig) -> Command {
    let mut command = Command::new(&config.reload_program);
    command.arg("daemon-reload");
    command
}

pub(crate) fn build_unit_state_command(config: &HookConfig, op: UnitStateOp) -> Command {
    let mut command = Command::new(&config.helper_path);
    command.arg(op.as_str());
    command.arg(config.unit.unit_file_name());
    command
}

pub(crate) fn run_command(command: &mut Command, context_message: &str) -> Result<()> {
    let output = command
        .output()
        .with_context(|| format!("{context_message}: command failed to start"))?;
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    Err(anyhow!(
        "{context_message}: status={} stdout='{}' stderr='{}'",
        output.status,
        stdout.trim(),
        stderr.trim()
    ))
}
