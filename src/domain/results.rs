use anyhow::Result;
use std::cmp::Ordering;

use crate::domain::categories::CategoryTranslator;
use crate::domain::models::{CategoryResult, PastTournament, ResultEntry, TournamentRecord, TournamentResults};
use crate::parsers::placement::medal;

/// Builds the `past` list of the tournament data file from extracted records
pub struct ResultFormatter {
    translator: CategoryTranslator,
}

impl ResultFormatter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            translator: CategoryTranslator::new()?,
        })
    }

    /// Newest first; undated tournaments go last, ties keep extraction order.
    pub fn format(&self, tournaments: Vec<TournamentRecord>) -> Vec<PastTournament> {
        let mut past: Vec<PastTournament> = tournaments
            .into_iter()
            .filter_map(|tournament| self.format_tournament(tournament))
            .collect();

        past.sort_by(|a, b| compare_dates_descending(a, b));
        past
    }

    fn format_tournament(&self, tournament: TournamentRecord) -> Option<PastTournament> {
        let mut results = TournamentResults::default();

        for category in &tournament.categories {
            let slot = results.slot_mut(category.kind);
            // First category of a kind wins the slot
            if slot.is_none() {
                *slot = Some(self.format_entry(category));
            }
        }

        if results.is_empty() {
            return None;
        }

        Some(PastTournament {
            name: tournament.name,
            date: tournament.date,
            location: tournament.location,
            results,
        })
    }

    fn format_entry(&self, category: &CategoryResult) -> ResultEntry {
        let notes = match medal(category.place) {
            Some(medal) => Some(format!("{} Medal", medal)),
            None if !category.last_round.is_empty() => Some(category.last_round.clone()),
            None => None,
        };

        ResultEntry {
            place: category.place,
            category: self.translator.translate(&category.category),
            partner: category.partner.clone(),
            notes,
        }
    }
}

fn compare_dates_descending(a: &PastTournament, b: &PastTournament) -> Ordering {
    match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
