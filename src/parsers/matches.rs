use anyhow::Result;
use log::debug;

use crate::domain::{CategoryType, MatchEntry, TrackedPlayer};
use crate::parsers::entities::decode_html_entities;
use crate::parsers::partner::PartnerStrategy;
use crate::parsers::rules::{self, ExtractionRule, MATCH_MARKER};

/// Reads the tracked player's matches out of a category segment
pub struct MatchExtractor {
    round_label: ExtractionRule,
    match_status: ExtractionRule,
    player: TrackedPlayer,
    partner_strategy: Box<dyn PartnerStrategy>,
}

impl MatchExtractor {
    pub fn new(player: TrackedPlayer, partner_strategy: Box<dyn PartnerStrategy>) -> Result<Self> {
        Ok(Self {
            round_label: rules::round_label()?,
            match_status: rules::match_status()?,
            player,
            partner_strategy,
        })
    }

    pub fn player(&self) -> &TrackedPlayer {
        &self.player
    }

    /// Matches in document order. Blocks without the player are left out.
    pub fn extract_matches(&self, segment: &str, kind: CategoryType) -> Vec<MatchEntry> {
        segment
            .split(MATCH_MARKER)
            .skip(1)
            .filter_map(|fragment| self.extract_match(fragment, kind))
            .collect()
    }

    fn extract_match(&self, fragment: &str, kind: CategoryType) -> Option<MatchEntry> {
        let round = self
            .round_label
            .capture(fragment)
            .map(|label| decode_html_entities(label.trim()))
            .unwrap_or_default();

        let name_at = self.player.locate_in(fragment)?;

        // Status tags before the name belong to the opposing side
        let won = self
            .match_status
            .capture(&fragment[name_at..])
            .map(|status| status == "W");

        let partner = if kind.has_partner() {
            self.partner_strategy.find_partner(fragment, name_at, &self.player)
        } else {
            None
        };

        debug!(
            "    match '{}' won={:?} partner={:?} ({})",
            round,
            won,
            partner,
            self.partner_strategy.name()
        );

        Some(MatchEntry { round, won, partner })
    }
}
