//! Keyword-based classifier
//!
//! Flags text as spam when any keyword appears as a case-insensitive
//! substring. Confidences are fixed per label.

use super::{Classification, Classifier, Label};

/// Keywords that mark a message as spam
pub const SPAM_KEYWORDS: [&str; 6] = ["buy now", "free", "winner", "lottery", "viagra", "discount"];

/// Confidence reported for spam
pub const SPAM_CONFIDENCE: f64 = 0.85;

/// Confidence reported for ham
pub const HAM_CONFIDENCE: f64 = 0.92;

/// Keyword substring classifier
pub struct KeywordClassifier {
    name: String,
    keywords: Vec<String>,
    spam_confidence: f64,
    ham_confidence: f64,
}

impl KeywordClassifier {
    /// Create a classifier with custom keywords
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: "keyword-v1".to_string(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            spam_confidence: SPAM_CONFIDENCE,
            ham_confidence: HAM_CONFIDENCE,
        }
    }

    /// Configured keywords (lower-cased)
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword found in the text, if any
    pub fn matched_keyword(&self, content: &str) -> Option<&str> {
        let content_lower = content.to_lowercase();

        self.keywords
            .iter()
            .find(|keyword| content_lower.contains(keyword.as_str()))
            .map(String::as_str)
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(SPAM_KEYWORDS)
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, content: &str) -> Classification {
        if self.matched_keyword(content).is_some() {
            Classification {
                label: Label::Spam,
                confidence: self.spam_confidence,
            }
        } else {
            Classification {
                label: Label::Ham,
                confidence: self.ham_confidence,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
