use std::sync::Arc;

use log::{debug, warn};

use coinboard_market_data::{Article, NewsProvider};

/// Fetches the top headlines from a [`NewsProvider`].
pub struct NewsService {
    provider: Arc<dyn NewsProvider>,
}

impl NewsService {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self { provider }
    }

    /// Return at most `limit` articles in upstream order.
    ///
    /// Never fails: any provider error is logged and yields an empty list.
    pub async fn fetch_top_news(&self, limit: usize) -> Vec<Article> {
        match self.provider.latest_articles().await {
            Ok(mut articles) => {
                debug!(
                    "{} returned {} article(s), keeping {}",
                    self.provider.id(),
                    articles.len(),
                    limit.min(articles.len())
                );
                articles.truncate(limit);
                articles
            }
            Err(e) => {
                warn!("Failed to fetch news from {}: {}", self.provider.id(), e);
                Vec::new()
            }
        }
    }
}
