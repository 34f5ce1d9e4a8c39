use std::path::Path;

pub fn service_manager_present(control_dir: &Path) -> bool {
    control_dir.is_dir()
}

#[cfg(unix)]
pub fn helper_tool_present(helper_path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(helper_path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn helper_tool_present(helper_path: &Path) -> bool {
    helper_path.is_file()
}
