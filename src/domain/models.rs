use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Discipline of a ranking list or tournament category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Singles,
    Doubles,
    Mixed,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Singles => "singles",
            CategoryType::Doubles => "doubles",
            CategoryType::Mixed => "mixed",
        }
    }

    /// Doubles and mixed are played with a partner.
    pub fn has_partner(&self) -> bool {
        !matches!(self, CategoryType::Singles)
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Freshly fetched ranking positions, keyed by discipline
pub type RankingSet = BTreeMap<CategoryType, u32>;

/// The player whose results are tracked across tournament pages
#[derive(Debug, Clone)]
pub struct TrackedPlayer {
    full_name: String,
    given_name: String,
    surname_fragments: Vec<String>,
    profile_id: Option<String>,
}

impl TrackedPlayer {
    pub fn new(
        full_name: impl Into<String>,
        given_name: impl Into<String>,
        surname_fragments: Vec<String>,
        profile_id: Option<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            given_name: given_name.into(),
            surname_fragments,
            profile_id,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Byte offset of the full name in `text`, ignoring ASCII case.
    pub fn locate_in(&self, text: &str) -> Option<usize> {
        if self.full_name.is_empty() {
            return None;
        }
        // ASCII lowering keeps byte offsets aligned with the original text
        text.to_ascii_lowercase()
            .find(&self.full_name.to_ascii_lowercase())
    }

    /// True when `text` carries the given name and at least one surname fragment.
    pub fn is_identified_by(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        lowered.contains(&self.given_name.to_lowercase())
            && self
                .surname_fragments
                .iter()
                .any(|fragment| lowered.contains(&fragment.to_lowercase()))
    }

    /// True when a profile link points at this player.
    pub fn owns_profile(&self, href: &str) -> bool {
        self.profile_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .is_some_and(|id| href.to_lowercase().contains(&id.to_lowercase()))
    }
}

/// One bracket match involving the tracked player
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEntry {
    pub round: String,
    pub won: Option<bool>,
    pub partner: Option<String>,
}

/// Outcome of the tracked player in one tournament category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    pub category: String,
    pub kind: CategoryType,
    pub partner: Option<String>,
    pub place: Option<u8>,
    pub last_round: String,
    pub won: Option<bool>,
}

/// A tournament as extracted from one year page
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentRecord {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub categories: Vec<CategoryResult>,
}

// --- Persisted Structures ---

/// A single discipline result as stored in the tournament data file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub place: Option<u8>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TournamentResults {
    pub singles: Option<ResultEntry>,
    pub doubles: Option<ResultEntry>,
    pub mixed: Option<ResultEntry>,
}

impl TournamentResults {
    pub fn slot_mut(&mut self, kind: CategoryType) -> &mut Option<ResultEntry> {
        match kind {
            CategoryType::Singles => &mut self.singles,
            CategoryType::Doubles => &mut self.doubles,
            CategoryType::Mixed => &mut self.mixed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_none() && self.doubles.is_none() && self.mixed.is_none()
    }
}

/// Entry of the `past` list in the tournament data file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PastTournament {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub results: TournamentResults,
}
