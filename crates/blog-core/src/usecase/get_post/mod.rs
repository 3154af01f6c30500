//! Get post use case - read a single post with caller permissions and
//! field projection.

mod assembler;
mod models;
mod projection;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};
use crate::usecase::Permissions;

pub use assembler::{Resource, ResourceAssembler};
pub use models::{PostDocument, Request};
pub use projection::{Field, Projection};

/// Coordinates loading, permission evaluation and projection.
///
/// Holds no per-request state; one instance serves concurrent requests.
#[derive(Clone)]
pub struct GetPost {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl GetPost {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    /// Run the use case.
    ///
    /// Only `NotFound` (or `Internal`, when the post store itself fails) is
    /// returned as an error. Permissions and comments are neither computed
    /// nor fetched unless the projection asks for them.
    pub async fn handle(&self, request: Request) -> Result<PostDocument, DomainError> {
        let projection = Projection::parse(request.fields.as_deref());
        let assembler = ResourceAssembler::new(self.posts.as_ref(), self.comments.as_ref());

        let resource = assembler
            .load(&request.slug, projection.includes(Field::Comments))
            .await?;

        let permissions = projection
            .includes(Field::Permissions)
            .then(|| Permissions::evaluate(request.principal.as_ref(), &resource.post));

        tracing::debug!(
            slug = %request.slug,
            authenticated = request.principal.is_authenticated(),
            with_permissions = permissions.is_some(),
            with_comments = resource.comments.is_some(),
            "Post loaded"
        );

        Ok(PostDocument::project(resource, permissions, &projection))
    }

    /// Run the use case until `cancel` fires.
    ///
    /// On cancellation the in-flight storage calls are dropped and
    /// `DomainError::Cancelled` is returned.
    pub async fn handle_cancellable(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> Result<PostDocument, DomainError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(slug = %request.slug, "Get post cancelled");
                Err(DomainError::Cancelled)
            }
            result = self.handle(request.clone()) => result,
        }
    }
}
