use std::path::PathBuf;

use clap::Parser;
use profile_storage::DEFAULT_STORAGE_FILE;

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "profile-cli")]
#[clap(about = "Manage user profiles and who they follow", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        short,
        global = true,
        default_value = DEFAULT_STORAGE_FILE,
        help = "File the profiles are loaded from and saved to"
    )]
    pub storage: PathBuf,
    #[clap(subcommand)]
    pub command: Commands,
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[clap(name = "profile-cli", no_binary_name = true)]
pub struct ShellLine {
    #[clap(subcommand)]
    pub command: Commands,
}
