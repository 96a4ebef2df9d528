use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::parsers::PartnerStrategyKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keeps a player's profile and tournament data files in sync with the federation sites")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch current ranking positions and update the profile data file
    Rankings {
        /// Print a machine-readable result to stdout
        #[arg(long)]
        json: bool,
        /// Profile data file (defaults to $SITE_DATA_DIR/profile.json)
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },
    /// Rebuild past tournament results from the player's tournament pages
    Tournaments {
        /// Tournament data file (defaults to $SITE_DATA_DIR/tournaments.json)
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Season to fetch; repeat for several (defaults to the configured years)
        #[arg(short, long = "year")]
        years: Vec<u16>,
        /// How doubles and mixed partners are detected
        #[arg(long = "partner-strategy", value_enum, default_value_t)]
        partner_strategy: PartnerStrategyKind,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
