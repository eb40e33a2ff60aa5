use serde::{Deserialize, Serialize};

use super::{null_as_default, Photo};

/// One page of `/search/photos` results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<Photo>,
    #[serde(default, deserialize_with = "null_as_default")]
    total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    total_pages: u64,
}

impl SearchResult {
    pub fn results(&self) -> &[Photo] {
        &self.results
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }
}
