//! Accepted-answer derivation for free-text questions.
//!
//! A compound answer like "Flora, Fauna, and Merryweather" should accept
//! the full string and each listed name. Variants come from three
//! sources: " and " conjuncts, " or " disjuncts, and comma-separated
//! fragments (with any leading "and" stripped). The trimmed original is
//! always accepted first; the result is deduplicated in order.

use rustc_hash::FxHashSet;

/// Derive the accepted answer variants for a free-text answer.
#[must_use]
pub fn derive_accepted_answers(answer: &str) -> Vec<String> {
    let original = answer.trim();
    let mut accepted: Vec<String> = vec![original.to_string()];

    for word in ["and", "or"] {
        let parts = split_on_word(answer, word);
        if parts.len() > 1 {
            for part in parts {
                let cleaned = strip_trailing_punct(part.trim());
                if !cleaned.is_empty() && cleaned != original {
                    accepted.push(cleaned.to_string());
                }
            }
        }
    }

    if answer.contains(',') {
        for part in answer.split(',') {
            let mut fragment = part.trim();
            fragment = strip_leading_word(fragment, "and").trim();
            let cleaned = strip_trailing_punct(fragment);
            if cleaned.len() > 2 && cleaned != original {
                accepted.push(cleaned.to_string());
            }
        }
    }

    let mut seen = FxHashSet::default();
    accepted.retain(|a| !a.is_empty() && seen.insert(a.clone()));
    accepted
}

/// Split `text` on a standalone lowercase `word` bounded by whitespace,
/// consuming the surrounding whitespace. Case-insensitive.
fn split_on_word<'a>(text: &'a str, word: &str) -> Vec<&'a str> {
    // Byte offsets stay aligned because only ASCII case is folded.
    let lower = text.to_ascii_lowercase();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut search_from = 0;

    while let Some(found) = lower[search_from..].find(word) {
        let word_start = search_from + found;
        let word_end = word_start + word.len();

        let before_ws = lower[..word_start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        let after_ws = lower[word_end..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace);

        if before_ws && after_ws {
            let part_end = lower[..word_start].trim_end().len();
            parts.push(&text[start..part_end]);

            let rest = &lower[word_end..];
            start = word_end + (rest.len() - rest.trim_start().len());
            search_from = start;
        } else {
            search_from = word_end;
        }
    }

    parts.push(&text[start..]);
    parts
}

/// Strip one trailing `,` `;` or `.` if present.
fn strip_trailing_punct(text: &str) -> &str {
    text.strip_suffix([',', ';', '.']).unwrap_or(text)
}

/// Strip a leading standalone `word` (case-insensitive) if present.
fn strip_leading_word<'a>(text: &'a str, word: &str) -> &'a str {
    let lower = text.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix(word) {
        if rest.chars().next().is_some_and(char::is_whitespace) {
            return text[word.len()..].trim_start();
        }
    }
    text
}
