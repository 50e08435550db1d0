//! Everything the user reads. Progress goes to stdout, failures to stderr.

use colored::Colorize;
use std::path::Path;

pub fn farewell() {
    println!("👋 Exiting. See you next time!");
}

pub fn cloning() {
    println!("🌀 Cloning...");
}

pub fn dry_run_preview(url: &str, target: &Path, branch: Option<&str>, venv: bool, index: bool) {
    println!(
        "🌿 Dry run: would clone {} to {}",
        url.cyan(),
        target.display().to_string().cyan()
    );
    if let Some(branch) = branch {
        println!("   with branch: {}", branch);
    }
    if venv {
        println!("   would set up Python virtualenv (if requirements.txt or pyproject.toml is present)");
    }
    if index {
        println!("   would add to project index");
    }
}

pub fn venv_started() {
    println!("🐍 Setting up virtual environment...");
}

pub fn venv_ready(activate_path: &Path) {
    println!("{}", "✅ venv ready. To activate:".green());
    println!("   source {}/bin/activate", activate_path.display());
}

pub fn venv_skipped() {
    println!("{}", "⚠️  No Python project files detected. Skipping venv.".yellow());
}

pub fn indexed() {
    println!("📚 Project added to index.");
}

pub fn done() {
    println!("✨ Done. May your code compile on the first try.");
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red());
}
