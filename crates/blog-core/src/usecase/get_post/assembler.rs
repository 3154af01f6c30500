//! Loads a post together with its comments.

use crate::domain::{Comment, Post};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

/// A post and, when asked for, its comments in display order.
#[derive(Debug, Clone)]
pub struct Resource {
    pub post: Post,
    pub comments: Option<Vec<Comment>>,
}

/// Reads the post record and its comment list from storage.
pub struct ResourceAssembler<'a> {
    posts: &'a dyn PostRepository,
    comments: &'a dyn CommentRepository,
}

impl<'a> ResourceAssembler<'a> {
    pub fn new(posts: &'a dyn PostRepository, comments: &'a dyn CommentRepository) -> Self {
        Self { posts, comments }
    }

    /// Load the post for `slug`.
    ///
    /// A missing post is a terminal `NotFound`. Comments are only fetched
    /// when `with_comments` is set, and a failure to list them degrades to
    /// an empty sequence: the post is the primary resource and stays
    /// available when the comment store does not.
    pub async fn load(&self, slug: &str, with_comments: bool) -> Result<Resource, DomainError> {
        if slug.trim().is_empty() {
            return Err(DomainError::post_not_found(slug));
        }

        let post = self
            .posts
            .find_by_slug(slug)
            .await
            .map_err(|e| {
                tracing::error!(slug = %slug, error = %e, "Post lookup failed");
                DomainError::from(e)
            })?
            .ok_or_else(|| DomainError::post_not_found(slug))?;

        let comments = if with_comments {
            Some(self.load_comments(slug).await)
        } else {
            None
        };

        Ok(Resource { post, comments })
    }

    async fn load_comments(&self, slug: &str) -> Vec<Comment> {
        match self.comments.list_for_post(slug).await {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!(
                    slug = %slug,
                    error = %e,
                    "Comment listing failed, serving post without comments"
                );
                Vec::new()
            }
        }
    }
}
