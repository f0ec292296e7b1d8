/// Char-indexed helpers. Every length and position in the segmenters is counted
/// in chars so that Cyrillic text is never sliced inside a code point.
pub trait CharIndexed {
    fn char_len(&self) -> usize;
}

impl CharIndexed for str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }
}

impl CharIndexed for String {
    fn char_len(&self) -> usize {
        self.as_str().char_len()
    }
}

/// Splits `text` at char position `at` into `(head, tail)`.
pub fn split_at_char(text: &str, at: usize) -> (&str, &str) {
    let idx = text.char_indices().nth(at).map(|(idx, _)| idx).unwrap_or(text.len());
    text.split_at(idx)
}

/// Every contiguous span of `text` with at least `min_len` chars, in order of
/// start position then end position.
pub fn substrings(text: &str, min_len: usize) -> Vec<&str> {
    let mut bounds: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    bounds.push(text.len());
    let char_count = bounds.len() - 1;
    let min_len = min_len.max(1);

    let mut spans = Vec::new();
    for start in 0..char_count {
        for end in (start + min_len)..=char_count {
            spans.push(&text[bounds[start]..bounds[end]]);
        }
    }
    spans
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine<'a> {
    Utf8(&'a str),
    Lossy(String),
}

impl<'a> DecodedLine<'a> {
    pub fn text(&self) -> &str {
        match self {
            DecodedLine::Utf8(text) => text,
            DecodedLine::Lossy(text) => text,
        }
    }

    pub fn is_lossy(&self) -> bool {
        matches!(self, DecodedLine::Lossy(_))
    }
}

/// Decodes a raw input line. Invalid UTF-8 falls back to a lossy decode instead
/// of failing the line.
pub fn best_effort_decode(raw: &[u8]) -> DecodedLine<'_> {
    match std::str::from_utf8(raw) {
        Ok(text) => DecodedLine::Utf8(text),
        Err(_) => DecodedLine::Lossy(String::from_utf8_lossy(raw).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_cyrillic_chars() {
        let word = "читаешь";
        assert_eq!(word.len(), 14);
        assert_eq!(word.char_len(), 7);
        assert_eq!(String::from("ёж").char_len(), 2);
    }

    #[test]
    fn test_split_at_char() {
        assert_eq!(split_at_char("безопасность", 3), ("без", "опасность"));
        assert_eq!(split_at_char("дом", 10), ("дом", ""));
    }

    #[test]
    fn test_substrings_enumerates_all_spans() {
        let spans = substrings("абв", 2);
        assert_eq!(spans, vec!["аб", "абв", "бв"]);
        assert!(substrings("а", 2).is_empty());
    }

    #[test]
    fn test_best_effort_decode() {
        let ok = best_effort_decode("10 слово".as_bytes());
        assert_eq!(ok, DecodedLine::Utf8("10 слово"));
        assert!(!ok.is_lossy());

        let broken = best_effort_decode(&[b'1', b' ', 0xff, b'a']);
        assert!(broken.is_lossy());
        assert_eq!(broken.text(), "1 \u{fffd}a");
        assert_eq!(ok.text(), "10 слово");
    }
}
