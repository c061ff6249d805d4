//! Clock-string normalization for feed cells.
//!
//! Publishers write times as `H:MM`, `HH:MM` or occasionally `H:M`. Every
//! time that makes it into the index is rewritten to zero-padded `HH:MM`, so
//! that string comparison on times agrees with chronological order.

/// Glyph used in feed cells to mean "this service does not stop here".
pub const NO_SERVICE_MARKER: &str = "→";

/// Canonicalize a raw time token.
///
/// Returns an empty string when the cell carries no real time (blank or the
/// [`NO_SERVICE_MARKER`]). Tokens of the form `<digits>:<digits>` are
/// re-rendered zero-padded. Anything else is passed through trimmed but
/// otherwise untouched; this function never fails.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::normalize_time;
///
/// assert_eq!(normalize_time("6:2"), "06:02");
/// assert_eq!(normalize_time(" 15:07 "), "15:07");
/// assert_eq!(normalize_time("→"), "");
/// assert_eq!(normalize_time("noon"), "noon");
/// ```
pub fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_no_time(trimmed) {
        return String::new();
    }

    match split_clock(trimmed) {
        Some((hour, minute)) => format!("{hour:02}:{minute:02}"),
        None => trimmed.to_string(),
    }
}

/// Whether a (trimmed) cell value means "no real time".
pub fn is_no_time(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed == NO_SERVICE_MARKER
}

/// Split `H:M` into numeric parts. Only the first colon separates; both sides
/// must be non-empty ASCII digits that fit in a `u32`.
fn split_clock(s: &str) -> Option<(u32, u32)> {
    let (hour, minute) = s.split_once(':')?;
    Some((parse_digits(hour)?, parse_digits(minute)?))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_components() {
        assert_eq!(normalize_time("6:2"), "06:02");
        assert_eq!(normalize_time("6:02"), "06:02");
        assert_eq!(normalize_time("06:02"), "06:02");
        assert_eq!(normalize_time("23:59"), "23:59");
    }

    #[test]
    fn empty_and_placeholder_mean_no_time() {
        assert_eq!(normalize_time(""), "");
        assert_eq!(normalize_time("   "), "");
        assert_eq!(normalize_time("→"), "");
        assert_eq!(normalize_time(" → "), "");
    }

    #[test]
    fn unrecognized_shapes_pass_through() {
        assert_eq!(normalize_time("noon"), "noon");
        assert_eq!(normalize_time("0602"), "0602");
        assert_eq!(normalize_time("6:xx"), "6:xx");
        assert_eq!(normalize_time(":30"), ":30");
        assert_eq!(normalize_time("6:"), "6:");
        assert_eq!(normalize_time("1:2:3"), "1:2:3");
        assert_eq!(normalize_time(" ｜ "), "｜");
    }

    #[test]
    fn hours_past_midnight_are_kept() {
        // Late-night services are published as 24:xx / 25:xx.
        assert_eq!(normalize_time("24:5"), "24:05");
        assert_eq!(normalize_time("100:00"), "100:00");
    }

    #[test]
    fn oversized_numbers_pass_through() {
        let huge = "99999999999:00";
        assert_eq!(normalize_time(huge), huge);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn canonical_output_is_zero_padded(hour in 0u32..48, minute in 0u32..60) {
            let raw = format!("{hour}:{minute}");
            let normalized = normalize_time(&raw);
            prop_assert_eq!(normalized.len(), 5);
            prop_assert_eq!(normalized, format!("{hour:02}:{minute:02}"));
        }

        #[test]
        fn lexicographic_order_matches_chronological(
            a in (0u32..24, 0u32..60),
            b in (0u32..24, 0u32..60),
        ) {
            let left = normalize_time(&format!("{}:{}", a.0, a.1));
            let right = normalize_time(&format!("{}:{}", b.0, b.1));
            prop_assert_eq!(left.cmp(&right), a.cmp(&b));
        }

        #[test]
        fn normalization_is_idempotent(raw in "\\PC{0,12}") {
            let once = normalize_time(&raw);
            prop_assert_eq!(normalize_time(&once), once.clone());
        }
    }
}
