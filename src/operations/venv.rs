use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::reporter;

/// Files whose presence marks a Python project
pub const MANIFEST_FILES: [&str; 2] = ["requirements.txt", "pyproject.toml"];

pub const VENV_DIR: &str = "venv";

#[derive(Debug, PartialEq, Eq)]
pub enum VenvOutcome {
    /// Environment provisioning was run at this path
    Created(PathBuf),
    /// No manifest in the project; nothing was created
    NoManifest,
}

/// First recognized manifest present in `project_dir`
pub fn find_manifest(project_dir: &Path) -> Option<&'static str> {
    MANIFEST_FILES
        .into_iter()
        .find(|name| project_dir.join(name).is_file())
}

/// Create `<project_dir>/venv` when the project looks like Python.
/// The provisioning command is fire-and-forget: failures are logged, never returned.
pub fn setup_venv(project_dir: &Path, config: &Config) -> VenvOutcome {
    let Some(manifest) = find_manifest(project_dir) else {
        info!("setup_venv: no manifest in {}, skipping", project_dir.display());
        return VenvOutcome::NoManifest;
    };

    reporter::venv_started();
    let venv_path = project_dir.join(VENV_DIR);
    info!(
        "setup_venv: found {}, running {} -m venv {}",
        manifest,
        config.python_program,
        venv_path.display()
    );

    match Command::new(&config.python_program)
        .arg("-m")
        .arg("venv")
        .arg(&venv_path)
        .status()
    {
        Ok(status) if !status.success() => {
            warn!("setup_venv: {} exited with {}", config.python_program, status);
        }
        Ok(_) => {}
        Err(e) => {
            warn!("setup_venv: failed to run {}: {}", config.python_program, e);
        }
    }

    VenvOutcome::Created(venv_path)
}

/// Path to show in the activation hint: relative to `cwd` when the venv lives under it.
pub fn display_path(venv_path: &Path, cwd: &Path) -> PathBuf {
    venv_path
        .strip_prefix(cwd)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| venv_path.to_path_buf())
}
