use anyhow::Result;
use clap::ValueEnum;

use crate::domain::TrackedPlayer;
use crate::parsers::entities::decode_html_entities;
use crate::parsers::rules::{self, ExtractionRule, floor_char_boundary, ROW_PREFIX};

/// Finds the tracked player's partner inside one doubles/mixed match block.
pub trait PartnerStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// `name_at` is the byte offset of the player's name in `fragment`.
    fn find_partner(&self, fragment: &str, name_at: usize, player: &TrackedPlayer) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PartnerStrategyKind {
    /// Isolate the player's row and read its profile links
    #[default]
    RowIsolation,
    /// Scan around the player's name and filter link labels by keyword
    NameLink,
}

pub fn build_strategy(kind: PartnerStrategyKind) -> Result<Box<dyn PartnerStrategy>> {
    Ok(match kind {
        PartnerStrategyKind::RowIsolation => Box::new(RowIsolationStrategy::new()?),
        PartnerStrategyKind::NameLink => Box::new(NameLinkStrategy::new()?),
    })
}

// --- Row Isolation ---

/// Picks the `match__row` holding the player, then returns the first
/// profile-linked name in that row that is not the player.
pub struct RowIsolationStrategy {
    row: ExtractionRule,
    profile_link: ExtractionRule,
}

impl RowIsolationStrategy {
    pub fn new() -> Result<Self> {
        Ok(Self {
            row: rules::match_row()?,
            profile_link: rules::profile_link()?,
        })
    }

    fn rows<'a>(&self, fragment: &'a str) -> Vec<&'a str> {
        let starts = self.row.match_starts(fragment);
        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(fragment.len());
                &fragment[start..end]
            })
            .collect()
    }
}

impl PartnerStrategy for RowIsolationStrategy {
    fn name(&self) -> &'static str {
        "row-isolation"
    }

    fn find_partner(&self, fragment: &str, _name_at: usize, player: &TrackedPlayer) -> Option<String> {
        let row = self
            .rows(fragment)
            .into_iter()
            .find(|row| player.is_identified_by(row))?;

        self.profile_link
            .captures_iter(row)
            .filter_map(|caps| {
                let href = caps.get(1)?.as_str();
                let name = decode_html_entities(caps.get(2)?.as_str().trim());
                Some((href, name))
            })
            .find(|(href, name)| {
                !name.is_empty() && !player.owns_profile(href) && !player.is_identified_by(name)
            })
            .map(|(_, name)| name)
    }
}

// --- Name Link (legacy) ---

/// Link labels that are bracket navigation, not player names.
const LINK_EXCLUSIONS: [&str; 7] = ["Round", "Quarter", "Semi", "Final", "place", "H2H", "Rast"];

/// Scans a window from the nearest row start before the name to a little past
/// it, keeping link labels that don't look like rounds, scores or W/L tags.
/// Kept as a fallback for older page layouts.
pub struct NameLinkStrategy {
    player_link: ExtractionRule,
    link_value: ExtractionRule,
}

impl NameLinkStrategy {
    pub fn new() -> Result<Self> {
        Ok(Self {
            player_link: rules::profile_link()?,
            link_value: rules::link_value()?,
        })
    }

    fn row_window<'a>(fragment: &'a str, name_at: usize, name_len: usize) -> Option<&'a str> {
        let start = fragment[..name_at].rfind(ROW_PREFIX)?;
        let search_from = floor_char_boundary(fragment, name_at + name_len + 200);
        let end = fragment[search_from..]
            .find("</div>")
            .map(|offset| floor_char_boundary(fragment, search_from + offset + 100))
            .unwrap_or(fragment.len());
        Some(&fragment[start..end.max(start)])
    }

    fn collect_names(rule: &ExtractionRule, row: &str, keep: impl Fn(&str) -> bool) -> Vec<String> {
        rule.captures_iter(row)
            .filter_map(|caps| caps.get(caps.len() - 1))
            .map(|group| decode_html_entities(group.as_str().trim()))
            .filter(|name| keep(name))
            .collect()
    }

    fn is_label(name: &str, extra: &[&str]) -> bool {
        LINK_EXCLUSIONS
            .iter()
            .chain(extra)
            .any(|word| name.contains(word))
            || name == "W"
            || name == "L"
            || is_number(name)
    }
}

impl PartnerStrategy for NameLinkStrategy {
    fn name(&self) -> &'static str {
        "name-link"
    }

    fn find_partner(&self, fragment: &str, name_at: usize, player: &TrackedPlayer) -> Option<String> {
        let row = Self::row_window(fragment, name_at, player.full_name().len())?;

        let mut names = Self::collect_names(&self.player_link, row, |name| {
            name.chars().count() > 2 && !Self::is_label(name, &[])
        });

        if names.is_empty() {
            names = Self::collect_names(&self.link_value, row, |name| {
                name.chars().count() > 5 && !Self::is_label(name, &["Platz"]) && !is_score(name)
            });
        }

        names.into_iter().find(|name| name != player.full_name())
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn is_score(text: &str) -> bool {
    text.split_once('-')
        .is_some_and(|(left, right)| is_number(left) && is_number(right))
}
