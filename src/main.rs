mod cli;
mod commands;
mod debuglog;
mod placement;
mod placer;
mod port;
mod types;
mod util;
#[cfg(target_os = "windows")]
mod win32;

use clap::Parser;
use cli::{Cli, Commands};
use std::{error::Error, fmt};

#[derive(Debug)]
pub(crate) struct MyError(pub(crate) String);

impl fmt::Display for MyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for MyError {}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    debuglog::init_debug_logging(cli.debug, &cli.debug_log)?;
    debuglog::debug_log_line(&format!("command: {:?}", cli.command));

    match &cli.command {
        None | Some(Commands::Place) => {
            println!("WindowPlacer: Centering console window...");
            commands::place_console_window(cli.verbose)
        }
        Some(Commands::Plan {
            screen_width,
            screen_height,
            json,
        }) => commands::show_plan(*screen_width, *screen_height, *json),
    }
}
