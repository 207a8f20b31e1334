use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// News headline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_on: DateTime<Utc>,
}
