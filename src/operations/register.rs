use log::{debug, info};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::index::ProjectIndex;

/// Record `repo -> target` in the project index, replacing any earlier entry.
pub fn register_project(repo: &str, target: &Path, config: &Config) -> Result<()> {
    let mut index = ProjectIndex::load(&config.index_file)?;

    if let Some(previous) = index.insert(repo.to_string(), target.to_path_buf()) {
        debug!("register_project: '{}' was at {}", repo, previous.display());
    }

    index.save(&config.index_file)?;
    info!(
        "register_project: '{}' -> {} ({} entries in {})",
        repo,
        target.display(),
        index.len(),
        config.index_file.display()
    );
    Ok(())
}
