use anyhow::Result;

use athlete_profile_sync::cli::Command;
use athlete_profile_sync::errors::error_message;
use athlete_profile_sync::{handle_completions, handle_rankings, handle_tournaments, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        if let Some(message) = error_message(&e) {
            eprintln!("{message}");
        }
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Rankings { json, profile } => handle_rankings(profile, json),
        Command::Tournaments { data, years, partner_strategy } => {
            handle_tournaments(data, years, partner_strategy)
        }
        Command::Completions { shell } => handle_completions(shell),
    }
}
