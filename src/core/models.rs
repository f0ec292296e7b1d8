/// One line of the input vocabulary: a unique word and its corpus frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub frequency: u64,
    pub word: String,
}

/// Inflectional paradigm of a word as reported by a paradigm provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paradigm {
    pub lemma: String,
    pub forms: Vec<String>, // Surface forms sharing the lemma, provider order
}

impl Paradigm {
    pub fn new(lemma: impl Into<String>, forms: Vec<String>) -> Self {
        Paradigm { lemma: lemma.into(), forms }
    }

    /// Best-effort paradigm for a word nobody could analyze.
    pub fn identity(word: &str) -> Self {
        Paradigm { lemma: word.to_string(), forms: vec![word.to_string()] }
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Rule-based split of a lemma. `prefix + stem + suffix + ending` is always the lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub prefix: String,
    pub stem: String,
    pub suffix: String,
    pub ending: String,
}

impl Segmentation {
    pub fn concat(&self) -> String {
        let mut out = String::with_capacity(
            self.prefix.len() + self.stem.len() + self.suffix.len() + self.ending.len(),
        );
        out.push_str(&self.prefix);
        out.push_str(&self.stem);
        out.push_str(&self.suffix);
        out.push_str(&self.ending);
        out
    }

    /// Parts in word order with the empty ones removed.
    pub fn non_empty_parts(&self) -> Vec<String> {
        [&self.prefix, &self.stem, &self.suffix, &self.ending]
            .into_iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MorphInfo {
    pub document_count: u64,
    pub weighted_sum: u64,
}

/// Output record: a word and the morphs selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMorphs {
    pub word: String,
    pub morphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynonymCandidate {
    pub lemma: String,
    pub score: f64,
}
