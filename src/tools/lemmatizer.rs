use std::io::{
    BufRead,
    Write,
};

use regex::Regex;

use crate::{
    core::{
        utils::best_effort_decode,
        MorphError,
        StopwordFilter,
    },
    dictionary::paradigm::{
        lookup_or_fallback,
        ParadigmProvider,
    },
};

/// Replaces every word of a line by its lemma and drops stopwords.
pub struct Lemmatizer<'a> {
    provider: &'a dyn ParadigmProvider,
    stopwords: StopwordFilter,
    word_re: Regex,
}

impl<'a> Lemmatizer<'a> {
    pub fn new(provider: &'a dyn ParadigmProvider, stopwords: StopwordFilter) -> Result<Self, MorphError> {
        let word_re = Regex::new(r"\w+")?;
        Ok(Self { provider, stopwords, word_re })
    }

    pub fn lemmatize_line(&self, line: &str) -> String {
        self.word_re
            .find_iter(line)
            .map(|word| lookup_or_fallback(self.provider, &word.as_str().to_lowercase()).lemma)
            .filter(|lemma| !self.stopwords.is_stopword(lemma))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lemmatizes `reader` line by line into `writer`. Returns the line count.
    pub fn lemmatize<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<usize, MorphError> {
        let mut lines = 0;
        for raw in reader.split(b'\n') {
            let raw = raw?;
            let decoded = best_effort_decode(&raw);
            writeln!(writer, "{}", self.lemmatize_line(&decoded.text()))?;
            lines += 1;
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        core::Paradigm,
        dictionary::paradigm::ParadigmDictionary,
    };

    fn dictionary() -> ParadigmDictionary {
        let mut dictionary = ParadigmDictionary::default();
        dictionary.insert(Paradigm::new("читать", vec!["читаю".into(), "читает".into()]));
        dictionary.insert(Paradigm::new("книга", vec!["книга".into(), "книгу".into()]));
        dictionary
    }

    #[test]
    fn test_lemmatize_line_drops_stopwords() {
        let dictionary = dictionary();
        let lemmatizer = Lemmatizer::new(&dictionary, StopwordFilter::russian()).unwrap();
        assert_eq!(lemmatizer.lemmatize_line("Я читаю эту книгу, и это хорошо!"), "читать книга");
        assert_eq!(lemmatizer.lemmatize_line("   "), "");
    }

    #[test]
    fn test_lemmatize_stream() {
        let dictionary = dictionary();
        let lemmatizer = Lemmatizer::new(&dictionary, StopwordFilter::default()).unwrap();
        let mut out = Vec::new();
        let lines = lemmatizer.lemmatize(Cursor::new("Читает книгу\nкот\n"), &mut out).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "читать книга\nкот\n");
    }
}
