//! Command dispatcher
//!
//! Routes the parsed CLI to the install command.

use crate::cli::args::Cli;
use crate::commands::install::{self, InstallOptions};
use crate::error::Result;
use crate::ui as output;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;

    output::verbose(&format!("Project directory: {}", project_root.display()));

    install::run(InstallOptions {
        plugin: args.plugin.clone(),
        project_root,
        yes: args.global.yes,
    })
}
