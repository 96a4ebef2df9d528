use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::config::settings::AppConfig;
use crate::domain::RankingSet;
use crate::fetchers::RankingFetcher;
use crate::store::{ProfileStore, RankingChange};

pub struct RankingOutcome {
    pub rankings: RankingSet,
    pub changes: Vec<RankingChange>,
}

pub struct RankingService {
    fetcher: RankingFetcher,
    store: ProfileStore,
}

impl RankingService {
    pub fn new(config: &AppConfig, profile_path: PathBuf) -> Result<Self> {
        Ok(Self {
            fetcher: RankingFetcher::new(&config.ranking, &config.http)?,
            store: ProfileStore::new(profile_path),
        })
    }

    pub async fn run(&mut self) -> Result<RankingOutcome> {
        info!("=== Starting Ranking Update ===");

        let fetched = self.fetcher.fetch_all_rankings().await;
        let outcome = self.merge(fetched)?;

        info!("=== Ranking Update Complete ({} changed) ===", outcome.changes.len());
        Ok(outcome)
    }

    /// Write fetched rankings into the profile.
    pub fn merge(&self, fetched: Result<RankingSet>) -> Result<RankingOutcome> {
        // Any unresolved category aborts before the profile is touched
        let rankings = fetched?;

        info!("Merging into {}", self.store.path().display());
        let changes = self.store.update_rankings(&rankings)?;
        Ok(RankingOutcome { rankings, changes })
    }
}
