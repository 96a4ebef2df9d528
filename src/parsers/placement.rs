/// Infer the final placement from the last round played.
///
/// Assumes single-elimination naming. A win before the final leaves the
/// placement open, and an unknown outcome counts as a loss.
pub fn determine_placement(round: &str, won: Option<bool>) -> Option<u8> {
    let round = round.to_lowercase();
    let won = won.unwrap_or(false);

    if round.contains("final") && !round.contains("semi") && !round.contains("quarter") {
        if round.contains("3rd") || round.contains("4th") {
            return Some(if won { 3 } else { 4 });
        }
        return Some(if won { 1 } else { 2 });
    }

    if round.contains("semi") {
        return if won { None } else { Some(3) };
    }

    if round.contains("quarter") {
        return if won { None } else { Some(5) };
    }

    None
}

/// Medal label for podium places.
pub fn medal(place: Option<u8>) -> Option<&'static str> {
    match place? {
        1 => Some("Gold"),
        2 => Some("Silver"),
        3 => Some("Bronze"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_table() {
        let cases = [
            ("Final", Some(true), Some(1)),
            ("Final", Some(false), Some(2)),
            ("Semifinal", Some(false), Some(3)),
            ("Semifinal", Some(true), None),
            ("Semi final", Some(false), Some(3)),
            ("Quarterfinal", Some(false), Some(5)),
            ("Quarter final", Some(true), None),
            ("3rd/4th Place Final", Some(true), Some(3)),
            ("3rd/4th Place Final", Some(false), Some(4)),
            ("Round of 16", Some(false), None),
            ("Round of 16", Some(true), None),
            ("", None, None),
        ];

        for (round, won, expected) in cases {
            assert_eq!(determine_placement(round, won), expected, "{round} / {won:?}");
        }
    }

    #[test]
    fn test_placement_is_case_insensitive() {
        assert_eq!(determine_placement("FINAL", Some(true)), Some(1));
        assert_eq!(determine_placement("semi-FINAL", Some(false)), Some(3));
    }

    #[test]
    fn test_unknown_outcome_counts_as_loss() {
        assert_eq!(determine_placement("Final", None), Some(2));
        assert_eq!(determine_placement("Semifinal", None), Some(3));
    }

    #[test]
    fn test_medal() {
        assert_eq!(medal(Some(1)), Some("Gold"));
        assert_eq!(medal(Some(2)), Some("Silver"));
        assert_eq!(medal(Some(3)), Some("Bronze"));
        assert_eq!(medal(Some(5)), None);
        assert_eq!(medal(None), None);
    }
}
