use anyhow::Result;

use crate::parsers::rules::{self, ExtractionRule};

/// Reads ranking positions and ranking-week ids from federation ranking pages
pub struct RankingPageParser {
    rank_cell: ExtractionRule,
    ranking_week: ExtractionRule,
}

impl RankingPageParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rank_cell: rules::rank_cell()?,
            ranking_week: rules::ranking_week()?,
        })
    }

    /// Rank on the first table line linking to `player=<id>` that carries a rank cell.
    pub fn extract_player_rank(&self, html: &str, player_id: &str) -> Option<u32> {
        let needle = format!("player={}", player_id);
        html.lines()
            .filter(|line| line.contains(&needle))
            .find_map(|line| self.rank_cell.capture(line)?.parse().ok())
    }

    /// Newest ranking week offered by the week selector.
    pub fn extract_latest_ranking_id(&self, html: &str) -> Option<String> {
        self.ranking_week.capture(html).map(str::to_string)
    }
}
