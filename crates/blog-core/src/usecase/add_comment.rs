//! Add comment use case - a member replies to a post.

use std::sync::Arc;

use crate::domain::{Comment, Principal};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};
use crate::usecase::Permissions;
use crate::usecase::get_post::ResourceAssembler;

/// Longest accepted comment body, in characters.
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Input of the add-comment use case.
#[derive(Debug, Clone)]
pub struct AddCommentRequest {
    pub slug: String,
    pub body: String,
    pub principal: Arc<dyn Principal>,
}

/// Appends a comment to a post when the caller's permissions allow it.
#[derive(Clone)]
pub struct AddComment {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl AddComment {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    pub async fn handle(&self, request: AddCommentRequest) -> Result<Comment, DomainError> {
        let assembler = ResourceAssembler::new(self.posts.as_ref(), self.comments.as_ref());
        let resource = assembler.load(&request.slug, false).await?;

        let permissions = Permissions::evaluate(request.principal.as_ref(), &resource.post);
        if !permissions.create_comment {
            return Err(DomainError::Unauthorized);
        }
        let author_id = request
            .principal
            .user_id()
            .ok_or(DomainError::Unauthorized)?;

        let body = validate_body(&request.body)?;

        let comment = Comment::new(resource.post.slug, author_id, body);
        let saved = self.comments.save(comment).await?;

        tracing::info!(
            slug = %saved.post_slug,
            comment_id = %saved.id,
            author_id = %saved.author_id,
            "Comment added"
        );

        Ok(saved)
    }
}

fn validate_body(body: &str) -> Result<&str, DomainError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(DomainError::Validation(
            "Comment body must not be empty".to_string(),
        ));
    }
    if body.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::Validation(format!(
            "Comment body must be at most {} characters",
            MAX_COMMENT_LENGTH
        )));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{Anonymous, AuthenticatedUser};
    use crate::usecase::test_support::StubStore;

    fn use_case(store: StubStore) -> (AddComment, Arc<StubStore>) {
        let store = Arc::new(store);
        (AddComment::new(store.clone(), store.clone()), store)
    }

    fn request(body: &str, principal: Arc<dyn Principal>) -> AddCommentRequest {
        AddCommentRequest {
            slug: "hello-world".to_string(),
            body: body.to_string(),
            principal,
        }
    }

    #[tokio::test]
    async fn test_member_comment_is_appended() {
        let (add_comment, store) = use_case(StubStore::with_hello_world());
        let author = Uuid::new_v4();
        let principal = Arc::new(AuthenticatedUser::new(author, "member@example.com"));

        let comment = add_comment
            .handle(request("  Great read!  ", principal))
            .await
            .unwrap();

        assert_eq!(comment.body, "Great read!");
        assert_eq!(comment.author_id, author);
        let stored = store.comments_for("hello-world");
        assert_eq!(stored.len(), 3);
        assert_eq!(stored.last(), Some(&comment));
    }

    #[tokio::test]
    async fn test_anonymous_is_rejected() {
        let (add_comment, store) = use_case(StubStore::with_hello_world());

        let err = add_comment
            .handle(request("Hi", Arc::new(Anonymous)))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Unauthorized));
        assert_eq!(store.comments_for("hello-world").len(), 2);
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let (add_comment, _) = use_case(StubStore::with_hello_world());
        let principal = Arc::new(AuthenticatedUser::new(Uuid::new_v4(), "m@example.com"));

        let mut req = request("Hi", principal);
        req.slug = "missing".to_string();

        assert!(add_comment.handle(req).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_blank_and_oversized_bodies_are_invalid() {
        let (add_comment, _) = use_case(StubStore::with_hello_world());
        let principal: Arc<dyn Principal> =
            Arc::new(AuthenticatedUser::new(Uuid::new_v4(), "m@example.com"));

        let blank = add_comment
            .handle(request("   ", principal.clone()))
            .await
            .unwrap_err();
        let long = "x".repeat(MAX_COMMENT_LENGTH + 1);
        let oversized = add_comment
            .handle(request(&long, principal))
            .await
            .unwrap_err();

        assert!(matches!(blank, DomainError::Validation(_)));
        assert!(matches!(oversized, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal() {
        let (add_comment, _) = use_case(StubStore::with_hello_world().failing_comments());
        let principal = Arc::new(AuthenticatedUser::new(Uuid::new_v4(), "m@example.com"));

        let err = add_comment
            .handle(request("Hi", principal))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }
}
