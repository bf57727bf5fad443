//! REST API module for classify-rs
//!
//! Provides the HTTP endpoints for text classification

pub mod handlers;
pub mod server;

pub use handlers::{AppState, ClassifyRequest, ClassifyResponse};
pub use server::ApiServer;
