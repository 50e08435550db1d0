use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{QuickcloneError, Result};
use crate::prompt::{PromptAnswer, Prompter};

const REPO_QUESTION: &str = "Enter GitHub repo (user/project):";
const PROCEED_QUESTION: &str = "Proceed with cloning here? (Y/n/q)";
const VENV_QUESTION: &str = "Set up Python virtualenv if needed? (y/N/q)";
const INDEX_QUESTION: &str = "Add to project index? (y/N/q)";

/// Raw values as they arrive from the command line
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub target_dir: Option<PathBuf>,
    pub venv: bool,
    pub index: bool,
    pub dry_run: bool,
    pub no_interactive: bool,
}

/// A fully resolved invocation. Nothing is asked after this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub repo: String,
    pub branch: Option<String>,
    pub target_dir: PathBuf,
    pub wants_env_setup: bool,
    pub wants_indexing: bool,
    pub is_dry_run: bool,
    pub is_interactive: bool,
}

impl CloneRequest {
    pub fn remote_url(&self, config: &Config) -> String {
        remote_url(&config.remote_base, &self.repo)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Proceed(CloneRequest),
    /// Quit sentinel entered (or input closed) at some prompt
    Quit,
    /// Target confirmation answered with anything but yes
    Declined,
}

/// `{base}/{owner/project}.git`
pub fn remote_url(remote_base: &str, repo: &str) -> String {
    format!("{}/{}.git", remote_base.trim_end_matches('/'), repo)
}

/// Last path segment of the repo identifier
pub fn folder_name(repo: &str) -> &str {
    repo.rsplit('/').next().unwrap_or(repo)
}

/// Explicit override wins; otherwise `cwd/<project>`. Relative overrides are anchored at `cwd`.
pub fn resolve_target_dir(repo: &str, override_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    match override_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd.join(folder_name(repo)),
    }
}

/// True when `path` exists and cloning into it would clobber something.
pub fn is_occupied(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if !path.is_dir() {
        return Ok(true);
    }
    Ok(std::fs::read_dir(path)?.next().is_some())
}

/// Turn raw arguments into a `CloneRequest`, prompting where allowed.
pub fn resolve<R: BufRead, W: Write>(
    args: RequestArgs,
    cwd: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<Resolution> {
    let interactive = !args.no_interactive;

    let repo = match args.repo.filter(|r| !r.trim().is_empty()) {
        Some(repo) => repo,
        None if interactive => match prompter.ask(REPO_QUESTION, false)? {
            PromptAnswer::Value(repo) => repo,
            PromptAnswer::Default | PromptAnswer::Quit => return Ok(Resolution::Quit),
        },
        None => return Err(QuickcloneError::MissingRepo),
    };
    let repo = repo.trim().trim_end_matches('/').to_string();

    let target_dir = resolve_target_dir(&repo, args.target_dir.as_deref(), cwd);
    debug!("resolve: repo='{}', target={}", repo, target_dir.display());

    if interactive {
        prompter.say(&format!("📁 Target folder: {}", target_dir.display()))?;
        match prompter.confirm(PROCEED_QUESTION, true)? {
            None => return Ok(Resolution::Quit),
            Some(false) => {
                info!("resolve: user declined target {}", target_dir.display());
                return Ok(Resolution::Declined);
            }
            Some(true) => {}
        }
    }

    if !args.dry_run && is_occupied(&target_dir)? {
        return Err(QuickcloneError::TargetNotEmpty(target_dir));
    }

    // Follow-up questions only matter when something will actually happen.
    let ask_follow_ups = interactive && !args.dry_run;

    let wants_env_setup = if args.venv {
        true
    } else if ask_follow_ups {
        match prompter.confirm(VENV_QUESTION, false)? {
            Some(answer) => answer,
            None => return Ok(Resolution::Quit),
        }
    } else {
        false
    };

    let wants_indexing = if args.index {
        true
    } else if ask_follow_ups {
        match prompter.confirm(INDEX_QUESTION, false)? {
            Some(answer) => answer,
            None => return Ok(Resolution::Quit),
        }
    } else {
        false
    };

    Ok(Resolution::Proceed(CloneRequest {
        repo,
        branch: args.branch,
        target_dir,
        wants_env_setup,
        wants_indexing,
        is_dry_run: args.dry_run,
        is_interactive: interactive,
    }))
}
