use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{QuickcloneError, Result};

/// Personal registry of cloned projects: repo identifier -> local path.
/// Serialized as a flat JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProjectIndex {
    pub entries: BTreeMap<String, PathBuf>,
}

impl ProjectIndex {
    /// Load index from disk, or return an empty index if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| QuickcloneError::IndexLoadError(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| QuickcloneError::IndexLoadError(e.to_string()))
    }

    /// Rewrite the whole file. No locking: concurrent writers race and the last one wins.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| QuickcloneError::IndexSaveError(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| QuickcloneError::IndexSaveError(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| QuickcloneError::IndexSaveError(e.to_string()))
    }

    /// Insert or overwrite the entry for `repo`. Returns the previous path, if any.
    pub fn insert(&mut self, repo: String, path: PathBuf) -> Option<PathBuf> {
        self.entries.insert(repo, path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
