//! Canonical casing applied to user input before every lookup tier.
//!
//! Corpus questions are authored sentence-cased ("What is your name?"), so
//! input is trimmed, the first character upper-cased and the rest lower-cased.

/// Trim surrounding whitespace, upper-case the first character, lower-case the rest.
pub fn normalize_input(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(first) = trimmed.chars().next() else {
        return String::new();
    };

    // Lowercase the whole string so context rules (final sigma) see the first
    // letter, then swap the lowered first letter for its uppercase form.
    let lowered = trimmed.to_lowercase();
    let first_lowered: usize = first.to_lowercase().map(char::len_utf8).sum();
    let mut out: String = first.to_uppercase().collect();
    out.push_str(&lowered[first_lowered..]);
    out
}
