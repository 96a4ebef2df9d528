use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

use crate::domain::{TournamentRecord, TrackedPlayer};
use crate::parsers::categories::extract_categories;
use crate::parsers::entities::decode_html_entities;
use crate::parsers::matches::MatchExtractor;
use crate::parsers::partner::PartnerStrategy;
use crate::parsers::rules::{self, ExtractionRule, RuleChain, TOURNAMENT_MARKER};

pub const DEFAULT_LOCATION: &str = "Germany";

/// Turns a player's tournament page into tournament records
pub struct TournamentParser {
    tournament_name: ExtractionRule,
    start_date: ExtractionRule,
    location: RuleChain,
    club_code: ExtractionRule,
    name_city: ExtractionRule,
    category_header: ExtractionRule,
    matches: MatchExtractor,
}

impl TournamentParser {
    pub fn new(player: TrackedPlayer, partner_strategy: Box<dyn PartnerStrategy>) -> Result<Self> {
        Ok(Self {
            tournament_name: rules::tournament_name()?,
            start_date: rules::start_date()?,
            location: rules::location_chain()?,
            club_code: rules::club_code()?,
            name_city: rules::name_city()?,
            category_header: rules::category_header()?,
            matches: MatchExtractor::new(player, partner_strategy)?,
        })
    }

    /// Tournaments in page order. Blocks without a title or without any
    /// category the player took part in are dropped.
    pub fn parse_page(&self, html: &str) -> Vec<TournamentRecord> {
        html.split(TOURNAMENT_MARKER)
            .skip(1)
            .filter_map(|block| self.parse_tournament(block))
            .collect()
    }

    pub fn parse_tournament(&self, block: &str) -> Option<TournamentRecord> {
        let name = decode_html_entities(self.tournament_name.capture(block)?);

        let date = self.start_date.capture(block).and_then(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .inspect_err(|e| debug!("  Ignoring start date '{}' of '{}': {}", raw, name, e))
                .ok()
        });

        let location = self.extract_location(block, &name);
        let categories = extract_categories(block, &self.category_header, &self.matches);

        if categories.is_empty() {
            debug!("  Skipping '{}': {} not entered", name, self.matches.player().full_name());
            return None;
        }

        Some(TournamentRecord {
            name,
            date,
            location,
            categories,
        })
    }

    fn extract_location(&self, block: &str, name: &str) -> String {
        let location = match self.location.first_capture(block) {
            Some((rule, raw)) => {
                debug!("  Location matched by rule '{}'", rule);
                decode_html_entities(raw.trim())
            }
            None => DEFAULT_LOCATION.to_string(),
        };

        let location = self.club_code.strip_all(&location).trim().to_string();
        if !location.is_empty() && location != DEFAULT_LOCATION {
            return location;
        }

        match self.name_city.capture(name) {
            Some(city) => format!("{}, {}", city, DEFAULT_LOCATION),
            None => DEFAULT_LOCATION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryType;
    use crate::parsers::partner::RowIsolationStrategy;

    const PLAYER: &str = "Linus de Oliveira Cantante de Matos";

    fn parser() -> TournamentParser {
        let player = TrackedPlayer::new(
            PLAYER,
            "Linus",
            vec!["Oliveira".to_string(), "Matos".to_string()],
            None,
        );
        TournamentParser::new(player, Box::new(RowIsolationStrategy::new().unwrap())).unwrap()
    }

    fn singles_category(code: &str, round: &str, tag: &str) -> String {
        format!(
            r#"<span>Konkurrenz: {code}</span>
            <ol><li class="match-group__item">
              <li class="match__header-title-item"><span class="nav-link__value">{round}</span></li>
              <div class="match__row"><span class="nav-link__value">{PLAYER}</span><span class="tag {tag}">{letter}</span></div>
            </li></ol>"#,
            letter = if tag == "tag--success" { "W" } else { "L" },
        )
    }

    fn tournament(title: &str, date: &str, org: &str, body: &str) -> String {
        format!(
            r#"<li class="list__item">
              <a href="/t/1" title="{title}" class="media__link">{title}</a>
              {date}
              <span class="media__subheading">{org}</span>
              {body}
            </li>"#
        )
    }

    #[test]
    fn test_parses_name_date_location_and_category() {
        let html = format!(
            "<html><ul>{}</ul></html>",
            tournament(
                "Bayerische Ranglistenturnier U13 M&#252;nchen 2024",
                r#"<time datetime="2024-03-09T00:00:00">9 Mar</time>"#,
                "Bayerischer Badminton-Verband | TSV M&#252;nchen [01-0027]",
                &singles_category("JE U13 [SG]", "Final", "tag--success"),
            )
        );

        let tournaments = parser().parse_page(&html);

        assert_eq!(tournaments.len(), 1);
        let t = &tournaments[0];
        assert_eq!(t.name, "Bayerische Ranglistenturnier U13 München 2024");
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(t.location, "TSV München");
        assert_eq!(t.categories.len(), 1);
        assert_eq!(t.categories[0].kind, CategoryType::Singles);
        assert_eq!(t.categories[0].place, Some(1));
    }

    #[test]
    fn test_missing_date_is_none() {
        let html = tournament(
            "Cup",
            "",
            "Deutscher Badminton Verband | Hamburg",
            &singles_category("JE U13", "Semi final", "tag--danger"),
        );
        let t = parser().parse_tournament(&html).unwrap();
        assert_eq!(t.date, None);
        assert_eq!(t.location, "Hamburg");
        assert_eq!(t.categories[0].place, Some(3));
    }

    #[test]
    fn test_impossible_calendar_date_is_none() {
        let html = tournament(
            "Cup",
            r#"<time datetime="2024-02-30T00:00:00">30 Feb</time>"#,
            "",
            &singles_category("JE U13", "Final", "tag--success"),
        );
        let t = parser().parse_tournament(&html).unwrap();
        assert_eq!(t.date, None);
        assert_eq!(t.categories[0].place, Some(1));
    }

    #[test]
    fn test_location_falls_back_to_city_in_name() {
        let html = tournament(
            "Bezirksrangliste Erlangen 2023",
            "",
            "Bayerischer Badminton-Verband | [01-0027]",
            &singles_category("JE U13", "Final", "tag--danger"),
        );
        let t = parser().parse_tournament(&html).unwrap();
        assert_eq!(t.location, "Erlangen, Germany");
    }

    #[test]
    fn test_location_defaults_to_germany() {
        let html = tournament("Open", "", "no federation", &singles_category("JE U13", "Final", "tag--danger"));
        let t = parser().parse_tournament(&html).unwrap();
        assert_eq!(t.location, DEFAULT_LOCATION);
    }

    #[test]
    fn test_blocks_without_title_are_skipped() {
        let html = format!(
            r#"<li class="list__item"><span>Sidebar</span>{}</li>"#,
            singles_category("JE U13", "Final", "tag--success")
        );
        assert!(parser().parse_page(&html).is_empty());
    }

    #[test]
    fn test_tournament_without_player_is_dropped() {
        let body = singles_category("JE U13", "Final", "tag--success").replace(PLAYER, "Someone Else");
        let html = tournament("Cup 2024", "", "", &body);
        assert!(parser().parse_page(&html).is_empty());
    }

    #[test]
    fn test_page_without_markers_is_empty() {
        assert!(parser().parse_page("<html><body>No tournaments</body></html>").is_empty());
    }
}
