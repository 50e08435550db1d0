pub mod clone_op;
pub mod register;
pub mod venv;

pub use clone_op::{clone_repo, write_clone_log};
pub use register::register_project;
pub use venv::{setup_venv, VenvOutcome};
