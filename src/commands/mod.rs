mod clone_cmd;

pub use clone_cmd::handle_clone;
