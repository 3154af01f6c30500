use async_trait::async_trait;

use crate::domain::{Comment, Post};
use crate::error::RepoError;

/// Read access to published posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its slug. `Ok(None)` means the post does not exist.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;
}

/// Comment storage, keyed by the owning post's slug.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List a post's comments in insertion order.
    async fn list_for_post(&self, slug: &str) -> Result<Vec<Comment>, RepoError>;

    /// Append a comment to its post.
    async fn save(&self, comment: Comment) -> Result<Comment, RepoError>;
}
