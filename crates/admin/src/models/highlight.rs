//! Home-screen highlight banners.

use atadiesel_core::HighlightId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("title and image are required")]
    MissingTitleOrImage,
}

/// A published highlight.
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub id: HighlightId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HighlightForm {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl HighlightForm {
    /// # Errors
    ///
    /// Returns [`HighlightError::MissingTitleOrImage`] if either is blank.
    pub fn into_highlight(
        self,
        id: HighlightId,
        now: DateTime<Utc>,
    ) -> Result<Highlight, HighlightError> {
        let title = self.title.trim();
        let image = self.image.trim();
        if title.is_empty() || image.is_empty() {
            return Err(HighlightError::MissingTitleOrImage);
        }

        Ok(Highlight {
            id,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            image: image.to_string(),
            created_at: now,
        })
    }
}
