//! Contractor trade-list codec.
//!
//! The application keeps trades as one human-editable string
//! (`"Paving; Grading"`); storage keeps a `text[]`. Items must not contain
//! `;` to survive a round trip.

/// Separator used when joining trades for display.
pub const JOIN_SEPARATOR: &str = "; ";

/// Delimiter recognised when splitting a trade string.
pub const SPLIT_DELIMITER: char = ';';

/// Join stored trades into the application string.
pub fn join<S: AsRef<str>>(trades: &[S]) -> String {
    trades
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(JOIN_SEPARATOR)
}

/// Split an application trade string into stored items: split on `;`, trim
/// each piece, drop empty pieces.
pub fn split(trades: &str) -> Vec<String> {
    trades
        .split(SPLIT_DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_and_drops_empty_pieces() {
        assert_eq!(split("Paving; Grading ;"), vec!["Paving", "Grading"]);
    }

    #[test]
    fn split_empty_string_is_empty_list() {
        assert!(split("").is_empty());
        assert!(split(" ; ;").is_empty());
    }

    #[test]
    fn join_uses_semicolon_space() {
        assert_eq!(join(&["Paving", "Grading"]), "Paving; Grading");
    }

    #[test]
    fn join_empty_list_is_empty_string() {
        assert_eq!(join::<&str>(&[]), "");
    }

    #[test]
    fn clean_strings_round_trip() {
        for original in ["Paving", "Paving; Grading", "Electrical; Plumbing; HVAC"] {
            assert_eq!(join(&split(original)), original);
        }
    }

    #[test]
    fn embedded_delimiter_is_lossy() {
        let stored = vec!["Sewer;Water".to_string()];
        assert_ne!(split(&join(&stored)), stored);
    }
}
