//! Text normalisation and sentence splitting.
//!
//! Every analysis stage works on the same canonical form of the input:
//! whitespace runs collapsed to a single space, leading and trailing
//! whitespace removed. Sentence splitting for evidence extraction cuts only
//! at whitespace that directly follows terminal punctuation, so abbreviations
//! without a following space ("e.g.,") and decimals ("99.9%") stay intact.

/// Collapse every whitespace run into a single space and trim both ends.
///
/// Returns an empty string when the input holds no visible characters.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split text into sentence candidates.
///
/// A cut happens at a whitespace run whose preceding character is `.`, `!`
/// or `?`; the run itself is dropped. Pieces are returned verbatim (not
/// normalised) and may be empty when the text ends with such a run.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            let mut end = i + c.len_utf8();
            while let Some(&(j, d)) = chars.peek() {
                if !d.is_whitespace() {
                    break;
                }
                end = j + d.len_utf8();
                chars.next();
            }
            pieces.push(&text[start..i]);
            start = end;
            prev = Some(' ');
            continue;
        }
        prev = Some(c);
    }

    pieces.push(&text[start..]);
    pieces
}

/// Truncate to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
