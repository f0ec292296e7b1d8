use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use super::MorphError;

pub const RUSSIAN_STOPWORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет", "ж",
    "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним", "здесь",
    "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были", "куда", "зачем",
    "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой", "хоть", "после",
    "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них", "какая", "много",
    "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой", "перед", "иногда",
    "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда", "конечно", "всю",
    "между",
];

/// Hand-added words missing from the base list.
pub const EXTRA_STOPWORDS: &[&str] = &[
    "что", "этот", "где", "чем", "кем", "кому", "это", "так", "вот", "быть", "как", "в", "к",
    "на", "и",
];

#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    pub fn russian() -> Self {
        let mut filter = Self::default();
        filter.add_stopwords(RUSSIAN_STOPWORDS);
        filter.add_stopwords(EXTRA_STOPWORDS);
        filter
    }

    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::default();
        filter.add_stopwords(words);
        filter
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Adds one stopword per non-empty line of `path`.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, MorphError> {
        let content = fs::read_to_string(path).map_err(|e| {
            MorphError::Custom(format!("Failed to read stopwords {}: {}", path.display(), e))
        })?;

        let before = self.stopwords.len();
        for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
            self.stopwords.insert(line.to_lowercase());
        }
        Ok(self.stopwords.len() - before)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
