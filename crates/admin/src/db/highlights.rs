//! Highlight table operations.

use super::Database;
use crate::models::Highlight;

/// Repository for home-screen highlights.
pub struct HighlightRepository<'a> {
    db: &'a Database,
}

impl<'a> HighlightRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all highlights, newest first.
    pub async fn list_all(&self) -> Vec<Highlight> {
        self.db.highlights.read().await.iter().rev().cloned().collect()
    }

    pub async fn create(&self, highlight: Highlight) -> Highlight {
        self.db.highlights.write().await.push(highlight.clone());
        highlight
    }
}
