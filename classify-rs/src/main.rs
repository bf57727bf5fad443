//! classify-rs: spam/ham labelling server

use classify_rs::{
    ApiServer, AppState, Classifier, Config, CountVectorizer, KeywordClassifier, TextFeaturizer,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1);
    let config = match &config_path {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::development(),
    };
    config.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    info!("Starting classify-rs v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!("Configuration loaded from {}", path),
        None => info!("No config file specified, using development defaults"),
    }

    let featurizer = Arc::new(CountVectorizer::seeded());
    info!("Vectorizer fitted ({} terms)", featurizer.vocabulary().len());

    let classifier = Arc::new(KeywordClassifier::default());
    info!(
        "Classifier: {} ({} keywords)",
        classifier.name(),
        classifier.keywords().len()
    );

    let state = AppState::new(classifier, featurizer);
    let server = ApiServer::new(state, config.listen_addr()?.to_string());

    server.run().await?;

    Ok(())
}
