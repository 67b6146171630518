pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod install;
pub mod packages;
pub mod project_identity;
pub mod reconcile;
pub mod traits;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run bifrost-plugin CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal Handling (mark cancellation and let the installer roll back)
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Interrupt received, stopping after the current step...");
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 2. Parse & Run
    let args = cli::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        if e.is_cancellation() {
            ui::info(&e.to_string());
            return;
        }
        ui::error(&e.to_string());
        exit(1);
    }
}
