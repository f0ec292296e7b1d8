use std::{
    collections::HashMap,
    fs::File,
    io::{
        BufRead,
        BufReader,
    },
    path::Path,
    sync::Arc,
    time::Duration,
};

use tokio::runtime::Runtime;

use crate::core::{
    utils::best_effort_decode,
    MorphError,
    Paradigm,
};

/// Source of inflectional paradigms. Must answer the same way for the same word
/// within a run.
pub trait ParadigmProvider: Send + Sync {
    fn paradigm(&self, word: &str) -> Result<Paradigm, MorphError>;

    fn lemma(&self, word: &str) -> Result<String, MorphError> {
        Ok(self.paradigm(word)?.lemma)
    }
}

impl<P: ParadigmProvider + ?Sized> ParadigmProvider for Arc<P> {
    fn paradigm(&self, word: &str) -> Result<Paradigm, MorphError> {
        (**self).paradigm(word)
    }
}

/// Treats every word as its own single-form paradigm.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityParadigms;

impl ParadigmProvider for IdentityParadigms {
    fn paradigm(&self, word: &str) -> Result<Paradigm, MorphError> {
        Ok(Paradigm::identity(word))
    }
}

/// In-memory paradigm table loaded from a `lemma<TAB>form form ...` file.
/// Lookups are case-insensitive; the first paradigm listing a form owns it.
#[derive(Debug, Clone, Default)]
pub struct ParadigmDictionary {
    paradigms: Vec<Paradigm>,
    index: HashMap<String, usize>,
}

impl ParadigmDictionary {
    pub fn load(path: &Path) -> Result<Self, MorphError> {
        let file = File::open(path).map_err(|e| {
            MorphError::Custom(format!("Failed to open paradigms {}: {}", path.display(), e))
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            paradigms = dictionary.len(),
            forms = dictionary.index.len(),
            "paradigm dictionary loaded"
        );
        Ok(dictionary)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MorphError> {
        let mut dictionary = Self::default();

        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let decoded = best_effort_decode(&raw);
            let text = decoded.text();
            let line = text.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed =
                || MorphError::MalformedParadigm { line: idx + 1, content: line.to_string() };

            let (lemma, forms) = line.split_once('\t').ok_or_else(malformed)?;
            let forms: Vec<String> = forms.split_whitespace().map(str::to_string).collect();
            if lemma.trim().is_empty() || forms.is_empty() {
                return Err(malformed());
            }

            dictionary.insert(Paradigm::new(lemma.trim(), forms));
        }

        Ok(dictionary)
    }

    pub fn insert(&mut self, paradigm: Paradigm) {
        let id = self.paradigms.len();
        let keys = std::iter::once(&paradigm.lemma).chain(paradigm.forms.iter());
        for key in keys {
            self.index.entry(key.to_lowercase()).or_insert(id);
        }
        self.paradigms.push(paradigm);
    }

    pub fn get(&self, word: &str) -> Option<&Paradigm> {
        self.index.get(&word.to_lowercase()).map(|&id| &self.paradigms[id])
    }

    pub fn len(&self) -> usize {
        self.paradigms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paradigms.is_empty()
    }
}

impl ParadigmProvider for ParadigmDictionary {
    fn paradigm(&self, word: &str) -> Result<Paradigm, MorphError> {
        Ok(self.get(word).cloned().unwrap_or_else(|| Paradigm::identity(word)))
    }
}

/// Runs every lookup of the wrapped provider on a blocking task with a deadline.
/// A timed-out lookup keeps its blocking thread until it returns; dropping the
/// guard detaches such threads instead of waiting for them.
pub struct GuardedParadigms<P> {
    inner: Arc<P>,
    runtime: Option<Runtime>,
    timeout: Duration,
}

impl<P: ParadigmProvider + 'static> GuardedParadigms<P> {
    pub fn new(inner: P, timeout: Duration) -> Result<Self, MorphError> {
        let runtime = tokio::runtime::Builder::new_multi_thread().enable_time().build()?;
        Ok(Self { inner: Arc::new(inner), runtime: Some(runtime), timeout })
    }
}

impl<P> Drop for GuardedParadigms<P> {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl<P: ParadigmProvider + 'static> ParadigmProvider for GuardedParadigms<P> {
    fn paradigm(&self, word: &str) -> Result<Paradigm, MorphError> {
        let inner = Arc::clone(&self.inner);
        let owned = word.to_string();
        let timeout = self.timeout;
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| MorphError::Lookup("paradigm lookup runtime is shut down".to_string()))?;

        runtime.block_on(async move {
            let lookup = tokio::task::spawn_blocking(move || inner.paradigm(&owned));
            match tokio::time::timeout(timeout, lookup).await {
                Ok(joined) => joined?,
                Err(_) => Err(MorphError::LookupTimeout {
                    word: word.to_string(),
                    millis: timeout.as_millis() as u64,
                }),
            }
        })
    }
}

/// Paradigm for `word`, degrading to the identity paradigm when the provider
/// fails or reports no forms. Never fails.
pub fn lookup_or_fallback(provider: &dyn ParadigmProvider, word: &str) -> Paradigm {
    match provider.paradigm(word) {
        Ok(mut paradigm) if !paradigm.is_empty() => {
            if paradigm.lemma.is_empty() {
                paradigm.lemma = word.to_string();
            }
            paradigm
        }
        Ok(_) => {
            tracing::debug!(word, "empty paradigm, using the word itself");
            Paradigm::identity(word)
        }
        Err(e) => {
            tracing::warn!(word, error = %e, "paradigm lookup failed, using the word itself");
            Paradigm::identity(word)
        }
    }
}
