//! News module - best-effort headlines for the side panel.
//!
//! Not part of the polling engine: headlines are fetched once and a failure
//! simply means an empty panel.

mod news_service;

pub use news_service::NewsService;
