//! classify-rs: spam/ham labelling endpoint
//!
//! Accepts a block of email text over HTTP and returns a `spam` or `ham`
//! label with a fixed confidence score.
//!
//! # Example
//!
//! ```text
//! POST /classify
//! {"content": "You are a LOTTERY winner"}
//!
//! 200 OK
//! {"prediction": "spam", "confidence": 0.85}
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:8000"
//!
//! [logging]
//! level = "classify_rs=info,tower_http=info"
//! format = "pretty"
//! ```

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod featurizer;

pub use api::{ApiServer, AppState};
pub use classifier::{Classification, Classifier, KeywordClassifier, Label};
pub use config::Config;
pub use error::{ClassifierError, Result};
pub use featurizer::{CountVectorizer, TextFeaturizer};
