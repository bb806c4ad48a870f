//! Sentence-aware windowing of prose into overlapping chunks.

use crate::config::SegmenterConfig;

/// Splits `text` into sentence candidates.
///
/// A sentence ends at the first `.`, `!` or `?` immediately followed by
/// whitespace; the whitespace run between candidates is consumed. Trailing
/// text without terminal punctuation is its own final candidate.
///
/// This is deliberately approximate: abbreviations and non-ASCII terminators
/// get no special treatment.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, ch)) = iter.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let Some(&(_, next)) = iter.peek() else {
            continue;
        };
        if !next.is_whitespace() {
            continue;
        }
        sentences.push(&text[start..i + ch.len_utf8()]);
        while iter.peek().is_some_and(|&(_, ws)| ws.is_whitespace()) {
            iter.next();
        }
        start = iter.peek().map_or(text.len(), |&(j, _)| j);
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Accumulates sentence candidates into overlapping windows bounded by the
/// character budget derived from `config`.
///
/// Empty or whitespace-only input yields no chunks. A single sentence longer
/// than the budget is emitted whole; the engine never splits inside a
/// sentence.
#[must_use]
pub fn segment_prose(text: &str, config: &SegmenterConfig) -> Vec<String> {
    let max_chars = config.max_chars();
    let mut chunks = Vec::new();
    let mut window = String::new();

    for sentence in split_sentences(text) {
        if !window.is_empty() && char_len(&window) + char_len(sentence) > max_chars {
            chunks.push(window.trim().to_string());
            window = seed_window(&window, sentence, config.overlap_tokens);
        } else if window.is_empty() {
            window.push_str(sentence);
        } else {
            window.push(' ');
            window.push_str(sentence);
        }
    }

    let tail = window.trim();
    if !tail.is_empty() {
        chunks.push(tail.to_string());
    }
    chunks
}

/// Starts the window that follows a finalized chunk: the last
/// `overlap_tokens` words of the previous window, then the new sentence.
fn seed_window(previous: &str, sentence: &str, overlap_tokens: usize) -> String {
    if overlap_tokens == 0 {
        return sentence.to_string();
    }
    let words: Vec<&str> = previous.split_whitespace().collect();
    let carry = words.len().saturating_sub(overlap_tokens);
    let mut window = words[carry..].join(" ");
    window.push(' ');
    window.push_str(sentence);
    window
}

/// Length in Unicode scalar values, matching the budget the windowing
/// contract is specified against (not bytes).
fn char_len(text: &str) -> usize {
    text.chars().count()
}
