use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "pupdev: firmware update package extractor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract every entry into DEST, expand update_files.tar and print the dev_flash path
    Extract {
        pup: PathBuf,
        dest: PathBuf,

        /// write update_files.tar but do not unpack it
        #[arg(long)]
        no_expand: bool,
    },

    /// List header and entry table without extracting
    List {
        pup: PathBuf,

        /// emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the firmware version stored in version.txt
    Version { pup: PathBuf },
}
