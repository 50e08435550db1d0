use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickcloneError {
    #[error("Repo required.")]
    MissingRepo,

    #[error("Target directory '{}' already exists and is not empty.", .0.display())]
    TargetNotEmpty(PathBuf),

    #[error("Git clone failed: {0}")]
    CloneFailed(String),

    #[error("Git clone failed: could not run '{0}': {1}")]
    CloneLaunch(String, std::io::Error),

    #[error("Failed to write clone log in '{0}': {1}")]
    CloneLogError(String, String),

    #[error("Failed to load project index: {0}")]
    IndexLoadError(String),

    #[error("Failed to save project index: {0}")]
    IndexSaveError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuickcloneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_empty_message() {
        let err = QuickcloneError::TargetNotEmpty(PathBuf::from("/work/demo"));
        assert_eq!(
            err.to_string(),
            "Target directory '/work/demo' already exists and is not empty."
        );
    }

    #[test]
    fn test_clone_failed_carries_detail() {
        let err = QuickcloneError::CloneFailed("exit status: 128".to_string());
        assert!(err.to_string().contains("exit status: 128"));
    }
}
