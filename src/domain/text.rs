//! Text sizing and truncation utilities
//!
//! Token counts use a fixed four-characters-per-token heuristic, not a real
//! tokenizer. The per-model price table in `usage` is calibrated against the
//! same ratio, so the two must not drift apart.

/// Characters per estimated token
pub const CHARS_PER_TOKEN: usize = 4;

/// Trailer appended to truncated input
pub const TRUNCATION_NOTICE: &str = "\n\n[Note: Input was truncated due to length]";

/// Rough estimate of token count
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / CHARS_PER_TOKEN
}

/// Count words in text
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate text if it exceeds the token budget
///
/// Returns the (possibly shortened) text and whether truncation happened.
/// When cutting, the last `.` is preferred as the cut point if it falls in
/// the final 20% of the slice; otherwise the hard character cut stands.
pub fn truncate_to_budget(text: &str, max_tokens: usize) -> (String, bool) {
    if estimate_tokens(text) <= max_tokens {
        return (text.to_string(), false);
    }

    let max_chars = max_tokens * CHARS_PER_TOKEN;
    let mut cut = max_chars.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut slice = &text[..cut];

    if let Some(last_period) = slice.rfind('.') {
        if last_period > max_chars * 4 / 5 {
            slice = &slice[..=last_period];
        }
    }

    let mut truncated = slice.to_string();
    truncated.push_str(TRUNCATION_NOTICE);
    (truncated, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens_is_len_over_four() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 1);
        assert_eq!(estimate_tokens(&"x".repeat(400)), 100);
    }

    #[test]
    fn test_estimate_tokens_monotonic() {
        let mut previous = 0;
        for len in 0..64 {
            let estimate = estimate_tokens(&"a".repeat(len));
            assert!(estimate >= previous);
            previous = estimate;
        }
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(
            count_words("This is a test sentence with several words in it."),
            10
        );
    }

    #[test]
    fn test_truncate_noop_within_budget() {
        let text = "Short meeting. Nothing to cut.";
        let (result, was_truncated) = truncate_to_budget(text, 6000);
        assert_eq!(result, text);
        assert!(!was_truncated);
    }

    #[test]
    fn test_truncate_long_input() {
        let long_text = "word ".repeat(2000);
        let (result, was_truncated) = truncate_to_budget(&long_text, 100);
        assert!(was_truncated);
        assert!(result.len() < long_text.len());
        assert!(result.ends_with(TRUNCATION_NOTICE));
    }

    #[test]
    fn test_truncate_respects_budget_plus_notice() {
        let long_text = "word ".repeat(2000);
        let (result, _) = truncate_to_budget(&long_text, 100);
        assert!(estimate_tokens(&result) <= 100 + TRUNCATION_NOTICE.len());
    }

    #[test]
    fn test_truncate_prefers_sentence_boundary() {
        // A period lands just inside the last 20% of the 400-char slice.
        let text = format!("{}. {}", "a".repeat(390), "b".repeat(200));
        let (result, was_truncated) = truncate_to_budget(&text, 100);
        assert!(was_truncated);
        let kept = result.strip_suffix(TRUNCATION_NOTICE).unwrap();
        assert!(kept.ends_with('.'));
        assert_eq!(kept.len(), 391);
    }

    #[test]
    fn test_truncate_hard_cut_without_boundary() {
        let text = "a".repeat(1000);
        let (result, was_truncated) = truncate_to_budget(&text, 100);
        assert!(was_truncated);
        let kept = result.strip_suffix(TRUNCATION_NOTICE).unwrap();
        assert_eq!(kept.len(), 400);
    }
}
