//! Classifier abstraction
//!
//! The HTTP layer only knows the [`Classifier`] trait, so the keyword rules
//! can later be replaced by a trained model without changing the handler.

use serde::{Deserialize, Serialize};

pub mod keyword;

pub use keyword::KeywordClassifier;

/// Classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Unwanted or unsolicited content
    Spam,
    /// Legitimate content
    Ham,
}

impl Label {
    /// Wire name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Label,
    /// Fixed score attached to the label, not a calibrated probability
    pub confidence: f64,
}

/// Classifier trait
pub trait Classifier: Send + Sync {
    /// Label a block of text
    fn classify(&self, content: &str) -> Classification;

    /// Get classifier name
    fn name(&self) -> &str;
}
