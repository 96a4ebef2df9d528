use anyhow::Result;
use colored::Colorize;

use crate::domain::{PastTournament, RankingSet};
use crate::store::RankingChange;

const SAMPLE_SIZE: usize = 3;

pub fn print_rankings(rankings: &RankingSet, changes: &[RankingChange]) {
    println!("{}", "Rankings".bold());
    for (category, rank) in rankings {
        let changed = changes.iter().find(|change| change.category == *category);
        match changed {
            Some(change) => println!(
                "  {:<8} #{} {}",
                category.to_string(),
                rank.to_string().green().bold(),
                format!("(was {})", change.previous).dimmed()
            ),
            None => println!("  {:<8} #{}", category.to_string(), rank),
        }
    }
}

pub fn print_tournament_sample(past: &[PastTournament]) -> Result<()> {
    println!("\n{}\n", "--- Sample Tournament Data ---".bold());
    let sample = &past[..past.len().min(SAMPLE_SIZE)];
    println!("{}", serde_json::to_string_pretty(sample)?);
    println!(
        "... and {} more tournaments",
        past.len().saturating_sub(SAMPLE_SIZE).to_string().cyan()
    );
    Ok(())
}
