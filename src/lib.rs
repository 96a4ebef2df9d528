pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod parsers;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::cli::Command;
use crate::config::settings::{self, AppConfig};
use crate::errors::AlreadyReported;
use crate::parsers::PartnerStrategyKind;
use crate::services::{report, RankingOutcome, RankingService, TournamentService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rankings(profile: Option<PathBuf>, json_output: bool) -> Result<()> {
    let result = run_blocking(async {
        let config = AppConfig::new();
        let profile = profile.unwrap_or_else(settings::default_profile_path);
        let mut service = RankingService::new(&config, profile)?;
        service.run().await
    });

    if json_output {
        let output = rankings_json(&result);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return result.map(|_| ()).map_err(|_| AlreadyReported.into());
    }

    let outcome = result?;
    report::print_rankings(&outcome.rankings, &outcome.changes);
    Ok(())
}

fn rankings_json(result: &Result<RankingOutcome>) -> Value {
    match result {
        Ok(outcome) => json!({ "success": true, "rankings": outcome.rankings }),
        Err(e) => json!({ "success": false, "error": format!("{:#}", e) }),
    }
}

pub fn handle_tournaments(
    data: Option<PathBuf>,
    years: Vec<u16>,
    partner_strategy: PartnerStrategyKind,
) -> Result<()> {
    run_blocking(async {
        let config = AppConfig::new();
        let data = data.unwrap_or_else(settings::default_tournaments_path);
        let service = TournamentService::new(&config, data, years, partner_strategy)?;
        service.run().await.map(|_| ())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

/// Every pipeline step runs in sequence, so one thread is enough.
fn run_blocking<F, T>(future: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
