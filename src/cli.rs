use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Enable verbose debug output.
    #[arg(long, global = true, default_value_t = false)]
    pub(crate) verbose: bool,
    /// Enable diagnostic logging to a file.
    #[arg(long, global = true, default_value_t = false)]
    pub(crate) debug: bool,
    /// Path to debug log file (used with --debug). Overrides WINDOW_PLACER_DEBUG_LOG.
    #[arg(long, global = true)]
    pub(crate) debug_log: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Strip the console window's frame and center it on the primary display (default).
    Place,
    /// Print the placement that would be applied without touching any window.
    Plan {
        /// Screen width to plan for. Read from the display when omitted.
        #[arg(long)]
        screen_width: Option<i32>,
        /// Screen height to plan for. Read from the display when omitted.
        #[arg(long)]
        screen_height: Option<i32>,
        /// Print the placement as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
