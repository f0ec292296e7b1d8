use std::collections::HashMap;

use crate::core::SynonymCandidate;

/// Averages the scores of repeated synonyms and returns the `limit` best lemmas,
/// highest average first. Equal averages keep first-seen order.
pub fn rank_synonyms(candidates: &[SynonymCandidate], limit: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for candidate in candidates {
        let entry = totals.entry(candidate.lemma.as_str()).or_insert_with(|| {
            order.push(candidate.lemma.as_str());
            (0.0, 0)
        });
        entry.0 += candidate.score;
        entry.1 += 1;
    }

    let mut averaged: Vec<(&str, f64)> = order
        .into_iter()
        .map(|lemma| {
            let (sum, count) = totals[lemma];
            (lemma, sum / count as f64)
        })
        .collect();
    averaged.sort_by(|a, b| b.1.total_cmp(&a.1));

    averaged.into_iter().take(limit).map(|(lemma, _)| lemma.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(lemma: &str, score: f64) -> SynonymCandidate {
        SynonymCandidate { lemma: lemma.to_string(), score }
    }

    #[test]
    fn test_rank_by_average_score() {
        let candidates = vec![
            candidate("здание", 0.9),
            candidate("изба", 0.7),
            candidate("здание", 0.3),
            candidate("жилище", 0.7),
        ];
        // здание averages 0.6; изба and жилище tie and keep first-seen order.
        assert_eq!(rank_synonyms(&candidates, 30), vec!["изба", "жилище", "здание"]);
        assert_eq!(rank_synonyms(&candidates, 1), vec!["изба"]);
        assert!(rank_synonyms(&[], 30).is_empty());
    }
}
