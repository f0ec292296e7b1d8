use std::{
    fs::File,
    io::{
        BufRead,
        BufReader,
    },
    path::Path,
};

use crate::core::{
    utils::best_effort_decode,
    MorphError,
    VocabEntry,
};

/// Parses one `<frequency> <word>` record. Blank lines yield `Ok(None)`.
pub fn parse_vocab_line(line_no: usize, line: &str) -> Result<Option<VocabEntry>, MorphError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let malformed = || MorphError::MalformedVocabulary { line: line_no, content: trimmed.to_string() };

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let [frequency, word] = fields.as_slice() else {
        return Err(malformed());
    };
    let frequency: u64 = frequency.parse().map_err(|_| malformed())?;

    Ok(Some(VocabEntry { frequency, word: word.to_string() }))
}

/// Reads a whole vocabulary. Malformed records abort the read when `strict`,
/// otherwise they are logged and skipped.
pub fn read_vocabulary<R: BufRead>(reader: R, strict: bool) -> Result<Vec<VocabEntry>, MorphError> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let decoded = best_effort_decode(&raw);
        if decoded.is_lossy() {
            tracing::debug!(line = idx + 1, "invalid UTF-8 in vocabulary, decoded lossily");
        }

        match parse_vocab_line(idx + 1, &decoded.text()) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(e) if !strict => {
                tracing::warn!(error = %e, "skipping vocabulary record");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "malformed vocabulary records were skipped");
    }
    Ok(entries)
}

pub fn load_vocabulary(path: &Path, strict: bool) -> Result<Vec<VocabEntry>, MorphError> {
    let file = File::open(path).map_err(|e| {
        MorphError::Custom(format!("Failed to open vocabulary {}: {}", path.display(), e))
    })?;
    let entries = read_vocabulary(BufReader::new(file), strict)?;
    tracing::info!(path = %path.display(), words = entries.len(), "vocabulary loaded");
    Ok(entries)
}
