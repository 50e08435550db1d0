use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{CombinedLogger, Config as LogConfig, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod index;
mod operations;
mod prompt;
mod reporter;
mod request;

use config::Config;
use error::Result;
use prompt::Prompter;
use request::{RequestArgs, Resolution};

#[derive(Parser)]
#[command(name = "quickclone")]
#[command(about = "🌱 quickclone - A friendly Git repo cloner")]
#[command(version)]
struct Cli {
    /// GitHub repo in format user/project
    repo: Option<String>,

    /// Set up a Python virtualenv if applicable
    #[arg(long)]
    venv: bool,

    /// Clone a specific branch
    #[arg(long)]
    branch: Option<String>,

    /// Add to local project index
    #[arg(long)]
    index: bool,

    /// Preview the steps without cloning
    #[arg(long)]
    dry_run: bool,

    /// Skip interactive prompts
    #[arg(long)]
    no_interactive: bool,

    /// Custom target directory for the cloned project
    #[arg(long)]
    target_dir: Option<PathBuf>,

    /// Print debug logs to console
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    init_logging(&config, cli.debug);

    if let Err(e) = run(cli, config) {
        error!("{}", e);
        reporter::failure(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Debug,
            LogConfig::default(),
            TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ));
    }

    // File logger only when configured; by default nothing is written to disk
    if let Some(ref log_path) = config.log_file {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
        {
            loggers.push(WriteLogger::new(LevelFilter::Debug, LogConfig::default(), file));
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let args = RequestArgs {
        repo: cli.repo,
        branch: cli.branch,
        target_dir: cli.target_dir,
        venv: cli.venv,
        index: cli.index,
        dry_run: cli.dry_run,
        no_interactive: cli.no_interactive,
    };
    info!("command: quickclone ({:?})", args);

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    match request::resolve(args, &cwd, &mut prompter)? {
        Resolution::Proceed(clone_request) => {
            commands::handle_clone(&clone_request, &cwd, &config)?;
        }
        Resolution::Quit | Resolution::Declined => {
            reporter::farewell();
        }
    }

    Ok(())
}
