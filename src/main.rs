//! RAX File Manager - Entry Point
//!
//! A menu-driven file management utility over standard input/output.

use log::{error, info};
use std::io;

use rax_file_manager::Shell;
use rax_file_manager::config::ManagerConfig;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching file manager...");

    let config = match ManagerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config.default_dir_path());

    if let Err(e) = shell.run() {
        error!("Shell terminated with error: {}", e);
        std::process::exit(1);
    }
}
