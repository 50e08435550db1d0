use log::info;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::operations::{self, VenvOutcome};
use crate::reporter;
use crate::request::CloneRequest;

/// Execute a resolved request: either print the plan, or clone and run the post-clone steps.
pub fn handle_clone(request: &CloneRequest, cwd: &Path, config: &Config) -> Result<()> {
    let url = request.remote_url(config);
    info!(
        "handle_clone: repo={}, target={}, branch={:?}, venv={}, index={}, dry_run={}, interactive={}",
        request.repo,
        request.target_dir.display(),
        request.branch,
        request.wants_env_setup,
        request.wants_indexing,
        request.is_dry_run,
        request.is_interactive
    );

    reporter::cloning();

    if request.is_dry_run {
        reporter::dry_run_preview(
            &url,
            &request.target_dir,
            request.branch.as_deref(),
            request.wants_env_setup,
            request.wants_indexing,
        );
        reporter::done();
        return Ok(());
    }

    operations::clone_repo(&url, request.branch.as_deref(), &request.target_dir, config)?;
    operations::write_clone_log(&request.target_dir, &url)?;

    if request.wants_env_setup {
        match operations::setup_venv(&request.target_dir, config) {
            VenvOutcome::Created(venv_path) => {
                reporter::venv_ready(&operations::venv::display_path(&venv_path, cwd));
            }
            VenvOutcome::NoManifest => reporter::venv_skipped(),
        }
    }

    if request.wants_indexing {
        operations::register_project(&request.repo, &request.target_dir, config)?;
        reporter::indexed();
    }

    reporter::done();
    Ok(())
}
