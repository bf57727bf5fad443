//! Text featurization
//!
//! Bag-of-words count vectorizer. It is fitted at startup and kept in the
//! application state as the hook for a future trained model; the current
//! classifier does not read it.

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Sample documents the startup vectorizer is fitted on
pub const SEED_DOCUMENTS: [&str; 2] = ["spam example", "ham example"];

/// Text to numeric feature transformer
pub trait TextFeaturizer: Send + Sync {
    /// Count vector aligned with [`TextFeaturizer::vocabulary`]
    fn transform(&self, text: &str) -> Vec<u32>;

    /// Known terms, in feature order
    fn vocabulary(&self) -> &[String];
}

/// Tokens are runs of two or more word characters
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("Invalid token pattern"))
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    token_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
}

/// Count vectorizer with a sorted vocabulary
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Build the vocabulary from a set of documents
    pub fn fit<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: BTreeSet<String> = documents
            .into_iter()
            .flat_map(|doc| tokenize(doc.as_ref()).collect::<Vec<_>>())
            .collect();

        let vocabulary: Vec<String> = terms.into_iter().collect();
        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self { vocabulary, index }
    }

    /// Vectorizer fitted on the built-in seed documents
    pub fn seeded() -> Self {
        Self::fit(SEED_DOCUMENTS)
    }
}

impl TextFeaturizer for CountVectorizer {
    fn transform(&self, text: &str) -> Vec<u32> {
        let mut counts = vec![0; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&i) = self.index.get(&token) {
                counts[i] += 1;
            }
        }
        counts
    }

    fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}
