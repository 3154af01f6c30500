//! Request and response types for the get-post use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::assembler::Resource;
use super::projection::{Field, Projection};
use crate::domain::{Comment, Principal};
use crate::usecase::Permissions;

/// Input of the get-post use case.
#[derive(Debug, Clone)]
pub struct Request {
    pub slug: String,
    /// Raw comma separated include-list, as sent by the caller.
    pub fields: Option<String>,
    pub principal: Arc<dyn Principal>,
}

impl Request {
    pub fn new(slug: impl Into<String>, principal: Arc<dyn Principal>) -> Self {
        Self {
            slug: slug.into(),
            fields: None,
            principal,
        }
    }

    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }
}

/// The outbound post document.
///
/// Every field is optional so that a projection can leave it out; omitted
/// fields are skipped on serialization rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

impl PostDocument {
    /// Copy the projected parts of `resource` into a document.
    pub(crate) fn project(
        resource: Resource,
        permissions: Option<Permissions>,
        projection: &Projection,
    ) -> Self {
        let Resource { post, comments } = resource;
        let pick = |field: Field| projection.includes(field);

        Self {
            slug: pick(Field::Slug).then_some(post.slug),
            title: pick(Field::Title).then_some(post.title),
            body: pick(Field::Body).then_some(post.body),
            author_id: pick(Field::AuthorId).then_some(post.author_id),
            created_at: pick(Field::CreatedAt).then_some(post.created_at),
            updated_at: pick(Field::UpdatedAt).then_some(post.updated_at),
            permissions: permissions.filter(|_| pick(Field::Permissions)),
            comments: comments.filter(|_| pick(Field::Comments)),
        }
    }
}
