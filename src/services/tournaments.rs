use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;

use crate::config::settings::AppConfig;
use crate::domain::{PastTournament, ResultFormatter, TournamentRecord};
use crate::fetchers::TournamentFetcher;
use crate::parsers::{build_strategy, PartnerStrategyKind, TournamentParser};
use crate::services::report;
use crate::store::TournamentStore;

pub struct TournamentService {
    fetcher: TournamentFetcher,
    parser: TournamentParser,
    formatter: ResultFormatter,
    store: TournamentStore,
    years: Vec<u16>,
}

impl TournamentService {
    pub fn new(
        config: &AppConfig,
        data_path: PathBuf,
        years: Vec<u16>,
        partner_strategy: PartnerStrategyKind,
    ) -> Result<Self> {
        let settings = &config.tournaments;
        let years = if years.is_empty() { settings.years.clone() } else { years };

        Ok(Self {
            fetcher: TournamentFetcher::new(settings, &config.http)?,
            parser: TournamentParser::new(settings.tracked_player(), build_strategy(partner_strategy)?)?,
            formatter: ResultFormatter::new()?,
            store: TournamentStore::new(data_path),
            years,
        })
    }

    pub async fn run(&self) -> Result<Vec<PastTournament>> {
        info!("=== Starting Tournament Update ===");

        if let Some(&first) = self.years.first() {
            self.fetcher.accept_consent(first).await?;
        }

        let mut pages = Vec::with_capacity(self.years.len());
        for &year in &self.years {
            pages.push((year, self.fetcher.fetch_year(year).await));
        }

        let past = self.rebuild(pages)?;
        report::print_tournament_sample(&past)?;

        info!("=== Tournament Update Complete ===");
        Ok(past)
    }

    /// Format and persist the tournaments found on the fetched year pages.
    pub fn rebuild(&self, pages: Vec<(u16, Result<String>)>) -> Result<Vec<PastTournament>> {
        let tournaments = self.collect_tournaments(pages);
        info!("Total tournaments: {}", tournaments.len());

        let past = self.formatter.format(tournaments);
        self.store.replace_past(&past)?;
        Ok(past)
    }

    /// A failed year is logged and skipped; the remaining years still count.
    pub fn collect_tournaments(&self, pages: Vec<(u16, Result<String>)>) -> Vec<TournamentRecord> {
        let mut all = Vec::new();

        for (year, page) in pages {
            match page {
                Ok(html) => {
                    let tournaments = self.parser.parse_page(&html);
                    info!("{}: Found {} tournaments", year, tournaments.len());
                    all.extend(tournaments);
                }
                Err(e) => error!("Error fetching {}: {:#}", year, e),
            }
        }

        all
    }
}
