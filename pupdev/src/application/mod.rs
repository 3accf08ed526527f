pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use pup_core::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            pup,
            dest,
            no_expand,
        } => handlers::handle_extract(pup, dest, no_expand),
        Commands::List { pup, json } => handlers::handle_list(pup, json),
        Commands::Version { pup } => handlers::handle_version(pup),
    }
}
