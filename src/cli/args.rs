use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bifrost-plugin",
    about = "Plugin installer for bifrost projects",
    long_about = "Plugin installer for bifrost projects.\n\nFetches a plugin's files, reconciles its config fragments into existing project files and adds its dependencies. Every change is rolled back if any step fails.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    /// Name of the plugin to install (omit to pick from compatible plugins)
    #[arg(value_name = "PLUGIN_NAME")]
    pub plugin: Option<String>,

    #[command(flatten)]
    pub global: GlobalFlags,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Accept default file locations and auto-apply config changes
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,
}
