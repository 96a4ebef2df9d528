use anyhow::Result;
use log::{info, warn};

use crate::config::settings::{HttpSettings, RankingSettings};
use crate::config::{get_ranking_categories, RankingCategory};
use crate::domain::{CategoryType, RankingSet};
use crate::http::SiteSession;
use crate::parsers::RankingPageParser;

/// Fetches the player's current positions from the federation ranking lists
pub struct RankingFetcher {
    session: SiteSession,
    parser: RankingPageParser,
    player_id: String,
    age_class: String,
    ranking_id: String,
}

impl RankingFetcher {
    pub fn new(settings: &RankingSettings, http: &HttpSettings) -> Result<Self> {
        Ok(Self {
            session: SiteSession::new(settings.base_url, http)?,
            parser: RankingPageParser::new()?,
            player_id: settings.player_id.to_string(),
            age_class: settings.age_class.to_string(),
            ranking_id: settings.base_ranking_id.to_string(),
        })
    }

    /// Resolve every tracked category, or fail listing each one that couldn't be.
    pub async fn fetch_all_rankings(&mut self) -> Result<RankingSet> {
        let return_url = format!("/ranking/ranking.aspx?id={}", self.ranking_id);
        self.session.accept_consent(&return_url).await?;
        self.resolve_latest_ranking_id().await;

        info!("Fetching rankings...");
        let mut results = Vec::new();
        for category in get_ranking_categories() {
            let rank = self.fetch_category_rank(&category).await;
            results.push((category.kind, rank));
        }

        aggregate_rankings(results)
    }

    // --- Ranking Week ---

    async fn resolve_latest_ranking_id(&mut self) {
        let Some(first) = get_ranking_categories().into_iter().next() else {
            return;
        };
        let url = self.build_category_url(&first);

        match self.session.get_text(&url).await {
            Ok(html) => match self.parser.extract_latest_ranking_id(&html) {
                Some(id) => {
                    info!("Using latest ranking week: {}", id);
                    self.ranking_id = id;
                }
                None => warn!("No ranking week selector found, keeping {}", self.ranking_id),
            },
            Err(e) => warn!("Failed to look up latest ranking week, keeping {}: {:#}", self.ranking_id, e),
        }
    }

    // --- Category Pages ---

    async fn fetch_category_rank(&self, category: &RankingCategory) -> Result<Option<u32>> {
        let url = self.build_category_url(category);
        let html = self.session.get_text(&url).await?;
        Ok(self.parser.extract_player_rank(&html, &self.player_id))
    }

    fn build_category_url(&self, category: &RankingCategory) -> String {
        build_category_url(self.session.base_url(), &self.ranking_id, category, &self.age_class)
    }
}

/// Every category must resolve; otherwise one error lists each failure.
pub fn aggregate_rankings(results: Vec<(CategoryType, Result<Option<u32>>)>) -> Result<RankingSet> {
    let mut rankings = RankingSet::new();
    let mut errors = Vec::new();

    for (kind, result) in results {
        match result {
            Ok(Some(rank)) => {
                info!("  {}: #{}", kind, rank);
                rankings.insert(kind, rank);
            }
            Ok(None) => errors.push(format!("Failed to fetch {} ranking - player not found in results", kind)),
            Err(e) => errors.push(format!("Failed to fetch {} ranking - {:#}", kind, e)),
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("Ranking fetch failed:\n  {}", errors.join("\n  "));
    }

    Ok(rankings)
}

fn build_category_url(base_url: &str, ranking_id: &str, category: &RankingCategory, age_class: &str) -> String {
    format!(
        "{}/ranking/category.aspx?id={}&category={}&{}={}",
        base_url, ranking_id, category.id, category.filter_param, age_class
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_category_url() {
        let category = RankingCategory::new(CategoryType::Doubles, "3369", "C3369CS");
        assert_eq!(
            build_category_url("https://www.turnier.de", "49512", &category, "13"),
            "https://www.turnier.de/ranking/category.aspx?id=49512&category=3369&C3369CS=13"
        );
    }

    #[test]
    fn test_aggregate_collects_every_rank() {
        let rankings = aggregate_rankings(vec![
            (CategoryType::Singles, Ok(Some(7))),
            (CategoryType::Doubles, Ok(Some(4))),
            (CategoryType::Mixed, Ok(Some(11))),
        ])
        .unwrap();

        assert_eq!(
            rankings,
            RankingSet::from([(CategoryType::Singles, 7), (CategoryType::Doubles, 4), (CategoryType::Mixed, 11)])
        );
    }

    #[test]
    fn test_aggregate_reports_all_failures_at_once() {
        let err = aggregate_rankings(vec![
            (CategoryType::Singles, Ok(Some(7))),
            (CategoryType::Doubles, Ok(None)),
            (CategoryType::Mixed, Err(anyhow::anyhow!("HTTP error: 503"))),
        ])
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Ranking fetch failed:\n  \
             Failed to fetch doubles ranking - player not found in results\n  \
             Failed to fetch mixed ranking - HTTP error: 503"
        );
    }

    #[test]
    fn test_fetcher_starts_from_base_ranking_week() {
        let fetcher = RankingFetcher::new(&RankingSettings::default(), &HttpSettings::default()).unwrap();
        let singles = &get_ranking_categories()[0];
        assert_eq!(
            fetcher.build_category_url(singles),
            "https://www.turnier.de/ranking/category.aspx?id=49291&category=3367&C3367CS=13"
        );
    }
}
