use chrono::Local;
use log::{debug, error, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::error::{QuickcloneError, Result};

pub const CLONE_LOG_FILE: &str = "clone_log.txt";

/// Arguments handed to `git`: `clone [-b <branch>] <url> <target>`
/// The target is passed as raw OS bytes so non-UTF-8 paths reach git untouched.
pub fn clone_args(url: &str, branch: Option<&str>, target: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["clone".into()];
    if let Some(branch) = branch {
        args.push("-b".into());
        args.push(branch.into());
    }
    args.push(url.into());
    args.push(target.as_os_str().to_os_string());
    args
}

fn display_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the external clone. Blocks until git exits; stdio is inherited so
/// the user sees git's own progress.
pub fn clone_repo(url: &str, branch: Option<&str>, target: &Path, config: &Config) -> Result<()> {
    let args = clone_args(url, branch, target);
    info!("clone_repo: {} {}", config.git_program, display_args(&args));

    let status = Command::new(&config.git_program)
        .args(&args)
        .status()
        .map_err(|e| {
            error!("clone_repo: failed to launch '{}': {}", config.git_program, e);
            QuickcloneError::CloneLaunch(config.git_program.clone(), e)
        })?;

    if !status.success() {
        error!("clone_repo: git exited with {}", status);
        return Err(QuickcloneError::CloneFailed(format!(
            "command '{} {}' returned non-zero {}",
            config.git_program,
            display_args(&args),
            status
        )));
    }

    debug!("clone_repo: clone finished into {}", target.display());
    Ok(())
}

/// Drop `clone_log.txt` into the fresh clone with the source URL and a local timestamp.
pub fn write_clone_log(target: &Path, url: &str) -> Result<PathBuf> {
    let log_path = target.join(CLONE_LOG_FILE);
    let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
    let contents = format!("Cloned from: {}\nDate: {}\n", url, timestamp);

    std::fs::write(&log_path, contents).map_err(|e| {
        QuickcloneError::CloneLogError(target.display().to_string(), e.to_string())
    })?;

    debug!("write_clone_log: wrote {}", log_path.display());
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    #[test]
    fn test_clone_args_without_branch() {
        let args = clone_args("https://github.com/acme/demo.git", None, Path::new("/work/demo"));
        assert_eq!(args, vec!["clone", "https://github.com/acme/demo.git", "/work/demo"]);
    }

    #[test]
    fn test_clone_args_with_branch() {
        let args = clone_args(
            "https://github.com/acme/demo.git",
            Some("main"),
            Path::new("/work/demo"),
        );
        assert_eq!(
            args,
            vec!["clone", "-b", "main", "https://github.com/acme/demo.git", "/work/demo"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_clone_args_keep_non_utf8_target() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let target = Path::new("/work").join(OsStr::from_bytes(b"caf\xe9"));
        let args = clone_args("https://github.com/acme/demo.git", None, &target);
        assert_eq!(args.last().unwrap().as_bytes(), b"/work/caf\xe9");
    }

    #[test]
    fn test_clone_repo_missing_program() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            git_program: temp.path().join("no-such-git").to_string_lossy().into_owned(),
            ..Config::default()
        };

        let result = clone_repo("https://example.invalid/x.git", None, &temp.path().join("x"), &config);
        assert!(matches!(result, Err(QuickcloneError::CloneLaunch(_, _))));
        assert!(!temp.path().join("x").exists());
    }

    #[test]
    fn test_write_clone_log() {
        let temp = TempDir::new().unwrap();
        let path = write_clone_log(temp.path(), "https://github.com/acme/demo.git").unwrap();
        assert_eq!(path, temp.path().join(CLONE_LOG_FILE));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Cloned from: https://github.com/acme/demo.git");

        let stamp = lines[1].strip_prefix("Date: ").unwrap();
        assert!(NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }

    #[test]
    fn test_write_clone_log_missing_dir() {
        let temp = TempDir::new().unwrap();
        let result = write_clone_log(&temp.path().join("gone"), "url");
        assert!(matches!(result, Err(QuickcloneError::CloneLogError(_, _))));
    }
}
