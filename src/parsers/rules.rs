use anyhow::{Context, Result};
use regex::{CaptureMatches, Regex};
use std::borrow::Cow;

// --- Block Markers ---

/// Starts each tournament entry on a player's tournament page.
pub const TOURNAMENT_MARKER: &str = r#"<li class="list__item">"#;
/// Starts each bracket match inside a category.
pub const MATCH_MARKER: &str = r#"<li class="match-group__item">"#;
/// Loose row prefix; also hits `match__row-wrapper` and `match__row-title`.
pub const ROW_PREFIX: &str = r#"<div class="match__row"#;

/// A single named regex over raw page markup.
///
/// Every rule reports group 1 of its first match as the extracted value, so a
/// rule either yields a slice of the haystack or nothing at all.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    name: &'static str,
    pattern: Regex,
}

impl ExtractionRule {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Failed to compile extraction rule '{}'", name))?;
        Ok(Self { name, pattern })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Group 1 of the first match.
    pub fn capture<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        self.pattern
            .captures(haystack)?
            .get(1)
            .map(|group| group.as_str())
    }

    pub fn captures_iter<'r, 'h>(&'r self, haystack: &'h str) -> CaptureMatches<'r, 'h> {
        self.pattern.captures_iter(haystack)
    }

    /// Byte offsets where the rule matches, in document order.
    pub fn match_starts(&self, haystack: &str) -> Vec<usize> {
        self.pattern.find_iter(haystack).map(|m| m.start()).collect()
    }

    pub fn strip_all<'h>(&self, haystack: &'h str) -> Cow<'h, str> {
        self.pattern.replace_all(haystack, "")
    }
}

/// Ordered fallbacks: the first rule that captures wins.
#[derive(Debug, Clone)]
pub struct RuleChain {
    rules: Vec<ExtractionRule>,
}

impl RuleChain {
    pub fn new(rules: Vec<ExtractionRule>) -> Self {
        Self { rules }
    }

    pub fn first_capture<'h>(&self, haystack: &'h str) -> Option<(&'static str, &'h str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.capture(haystack).map(|value| (rule.name(), value)))
    }
}

// --- Tournament Page Rules ---

pub fn tournament_name() -> Result<ExtractionRule> {
    ExtractionRule::new("tournament_name", r#"title="([^"]+)" class="media__link""#)
}

pub fn start_date() -> Result<ExtractionRule> {
    ExtractionRule::new("start_date", r#"<time datetime="(\d{4}-\d{2}-\d{2})"#)
}

/// Federation name followed by `| <venue>`, most specific association first.
pub fn location_chain() -> Result<RuleChain> {
    Ok(RuleChain::new(vec![
        ExtractionRule::new("bavarian_association", r"Bayerischer Badminton-Verband \| ([^<]+)")?,
        ExtractionRule::new("state_association", r"Badminton-Landesverband[^|]*\| ([^<]+)")?,
        ExtractionRule::new("national_federation", r"Deutscher Badminton Verband[^|]*\| ([^<]+)")?,
        ExtractionRule::new("any_association", r"[A-Za-zäöüÄÖÜß\-]+ Badminton[^|]*\| ([^<]+)")?,
    ]))
}

/// Club codes such as `[01-0027]` or `[06-HAM]` appended to venue names.
pub fn club_code() -> Result<ExtractionRule> {
    ExtractionRule::new("club_code", r"\s*\[\d{2}-[A-Z0-9]+\]")
}

/// Trailing `City 2024` in a tournament name.
pub fn name_city() -> Result<ExtractionRule> {
    ExtractionRule::new("name_city", r"([A-Za-zäöüÄÖÜß\-]+)\s+\d{4}$")
}

pub fn category_header() -> Result<ExtractionRule> {
    ExtractionRule::new("category_header", r"Konkurrenz: ([^<]+)</span>")
}

// --- Match Rules ---

pub fn round_label() -> Result<ExtractionRule> {
    ExtractionRule::new(
        "round_label",
        r#"match__header-title-item[^>]*>[\s\S]*?<span class="nav-link__value">([^<]+)</span>"#,
    )
}

pub fn match_status() -> Result<ExtractionRule> {
    ExtractionRule::new("match_status", r"tag--(?:success|danger)[^>]*>([WL])<")
}

/// Player row container, without the `-wrapper`/`-title` variants.
pub fn match_row() -> Result<ExtractionRule> {
    ExtractionRule::new("match_row", r#"<div class="(match__row)(?:"|\s)"#)
}

/// Player-profile link: group 1 is the href, group 2 the displayed name.
pub fn profile_link() -> Result<ExtractionRule> {
    ExtractionRule::new(
        "profile_link",
        r#"<a[^>]*href="([^"]*player[^"]*)"[^>]*>[\s\S]*?<span class="nav-link__value">([^<]+)</span>"#,
    )
}

pub fn link_value() -> Result<ExtractionRule> {
    ExtractionRule::new("link_value", r#"<span class="nav-link__value">([^<]+)</span>"#)
}

// --- Ranking Page Rules ---

pub fn rank_cell() -> Result<ExtractionRule> {
    ExtractionRule::new("rank_cell", r#"<td class="rank"><div[^>]*>(\d+)</div></td>"#)
}

/// Ranking week selector entry such as `<option value="49512">2025-14</option>`.
pub fn ranking_week() -> Result<ExtractionRule> {
    ExtractionRule::new("ranking_week", r#"<option value="(\d+)">\d+-\d+</option>"#)
}

/// Largest char boundary at or below `index`, clamped to the string length.
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
