use crate::domain::{CategoryResult, CategoryType, MatchEntry};
use crate::parsers::entities::decode_html_entities;
use crate::parsers::matches::MatchExtractor;
use crate::parsers::placement::determine_placement;
use crate::parsers::rules::ExtractionRule;

/// Part of a tournament block belonging to one `Konkurrenz:` header
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySegment<'a> {
    pub code: String,
    pub body: &'a str,
}

/// Discipline from the raw federation code (`JE U13`, `MX U15`, ...).
pub fn category_type(code: &str) -> CategoryType {
    if code.starts_with("JD") || code.starts_with("MD") {
        CategoryType::Doubles
    } else if code.starts_with("MX") || code.starts_with("GD") {
        CategoryType::Mixed
    } else {
        CategoryType::Singles
    }
}

/// Each segment runs from its header to the next header or the end of the block.
pub fn split_category_segments<'a>(block: &'a str, header: &ExtractionRule) -> Vec<CategorySegment<'a>> {
    let headers: Vec<(usize, String)> = header
        .captures_iter(block)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let code = decode_html_entities(caps.get(1)?.as_str().trim());
            Some((start, code))
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, (start, code))| {
            let end = headers.get(i + 1).map(|(next, _)| *next).unwrap_or(block.len());
            CategorySegment {
                code: code.clone(),
                body: &block[*start..end],
            }
        })
        .collect()
}

/// Results for every category segment the player took part in.
pub fn extract_categories(block: &str, header: &ExtractionRule, matches: &MatchExtractor) -> Vec<CategoryResult> {
    split_category_segments(block, header)
        .into_iter()
        .filter_map(|segment| {
            let kind = category_type(&segment.code);
            let entries = matches.extract_matches(segment.body, kind);
            summarize_category(segment.code, kind, entries)
        })
        .collect()
}

/// Only the last match decides the result; earlier ones just prove participation.
pub fn summarize_category(code: String, kind: CategoryType, entries: Vec<MatchEntry>) -> Option<CategoryResult> {
    let last = entries.into_iter().last()?;
    let place = determine_placement(&last.round, last.won);

    Some(CategoryResult {
        category: code,
        kind,
        partner: last.partner,
        place,
        last_round: last.round,
        won: last.won,
    })
}
