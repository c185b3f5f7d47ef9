//! Category label to numeric id mapping
//!
//! Detail pages only print the category as free text; the numeric id comes
//! from this fixed table. The table is a process-wide constant, read-only
//! and safe for concurrent use.

/// Map a free-text category label to its numeric id, case-insensitively.
///
/// Unknown labels map to 0; there is no error path.
pub fn map_category(label: &str) -> i64 {
    match label.trim().to_lowercase().as_str() {
        "film" => 631,
        "concert" => 633,
        "musique" => 623,
        "série tv" => 433,
        "animation" => 637,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("film", 631)]
    #[case("FILM", 631)]
    #[case("Concert", 633)]
    #[case("musique", 623)]
    #[case("Série TV", 433)]
    #[case("SÉRIE TV", 433)]
    #[case("animation", 637)]
    fn maps_known_labels_case_insensitively(#[case] label: &str, #[case] expected: i64) {
        assert_eq!(map_category(label), expected);
    }

    #[test]
    fn unknown_labels_map_to_zero() {
        assert_eq!(map_category("unknown-x"), 0);
        assert_eq!(map_category(""), 0);
    }
}
