use std::{
    collections::{
        HashMap,
        HashSet,
    },
    fs::File,
    io::{
        BufRead,
        BufReader,
        Write,
    },
    path::Path,
};

use super::paradigm::{
    lookup_or_fallback,
    ParadigmProvider,
};
use crate::core::{
    utils::best_effort_decode,
    MorphError,
    SynonymCandidate,
};

/// A parsed `head<TAB>syn:score, syn:score, ...` record, before lemmatization.
#[derive(Debug, Clone, PartialEq)]
pub struct SynonymRecord {
    pub head: String,
    pub synonyms: Vec<(String, f64)>,
}

pub fn parse_synonym_line(line: &str) -> Option<SynonymRecord> {
    let (head, rest) = match line.split_once('\t') {
        Some((head, rest)) => (head.trim(), rest),
        None => (line.trim(), ""),
    };
    if head.is_empty() {
        return None;
    }

    let synonyms = rest
        .split(',')
        .filter_map(|item| {
            let (word, score) = item.trim().split_once(':')?;
            match score.trim().parse::<f64>() {
                Ok(score) if !word.trim().is_empty() => Some((word.trim().to_string(), score)),
                Ok(_) => None,
                Err(_) => {
                    tracing::warn!(item = item.trim(), "unparsable synonym score");
                    None
                }
            }
        })
        .collect();

    Some(SynonymRecord { head: head.to_string(), synonyms })
}

fn decoded_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, MorphError>> {
    reader.split(b'\n').map(|raw| -> Result<String, MorphError> {
        let raw = raw?;
        Ok(best_effort_decode(&raw).text().trim().to_string())
    })
}

/// Lemmatized synonym candidates per head lemma, restricted to lemmas present in
/// `vocabulary`. Several records for one head are concatenated.
pub fn read_synonyms<R: BufRead>(
    reader: R,
    provider: &dyn ParadigmProvider,
    vocabulary: &HashSet<String>,
) -> Result<HashMap<String, Vec<SynonymCandidate>>, MorphError> {
    let mut by_head: HashMap<String, Vec<SynonymCandidate>> = HashMap::new();

    for line in decoded_lines(reader) {
        let line = line?;
        let Some(record) = parse_synonym_line(&line) else {
            continue;
        };

        let head = lookup_or_fallback(provider, &record.head).lemma;
        if !vocabulary.contains(&head) {
            continue;
        }

        let candidates = record
            .synonyms
            .into_iter()
            .map(|(word, score)| SynonymCandidate {
                lemma: lookup_or_fallback(provider, &word).lemma,
                score,
            })
            .filter(|candidate| vocabulary.contains(&candidate.lemma));

        by_head.entry(head).or_default().extend(candidates);
    }

    Ok(by_head)
}

pub fn load_synonyms(
    path: &Path,
    provider: &dyn ParadigmProvider,
    vocabulary: &HashSet<String>,
) -> Result<HashMap<String, Vec<SynonymCandidate>>, MorphError> {
    let file = File::open(path).map_err(|e| {
        MorphError::Custom(format!("Failed to open synonyms {}: {}", path.display(), e))
    })?;
    let synonyms = read_synonyms(BufReader::new(file), provider, vocabulary)?;
    tracing::info!(path = %path.display(), heads = synonyms.len(), "synonyms loaded");
    Ok(synonyms)
}

/// Copies the records whose lemmatized head is in `vocabulary`, unchanged.
/// Returns the number of records kept.
pub fn shorten_synonyms<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    provider: &dyn ParadigmProvider,
    vocabulary: &HashSet<String>,
) -> Result<usize, MorphError> {
    let mut kept = 0;
    for line in decoded_lines(reader) {
        let line = line?;
        let head = line.split('\t').next().unwrap_or("").trim();
        if head.is_empty() {
            continue;
        }
        if vocabulary.contains(&lookup_or_fallback(provider, head).lemma) {
            writeln!(writer, "{}", line)?;
            kept += 1;
        }
    }
    Ok(kept)
}
