use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a published blog article, addressed by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}
