use std::time::Duration;

/// Cut `s` to at most `max` characters, marking the cut with `...`.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3?}", elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("ap-1", 10), "ap-1");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_str("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_str("ÄÖÜäöü", 6), "ÄÖÜäöü");
        assert_eq!(truncate_str("ÄÖÜäöüß", 6), "ÄÖÜ...");
    }

    #[test]
    fn test_truncate_tiny_max() {
        assert_eq!(truncate_str("abcdef", 2), "...");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500s");
        assert_eq!(format_elapsed(Duration::from_micros(2500)), "2.500ms");
    }
}
