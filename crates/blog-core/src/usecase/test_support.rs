//! Hand-written repository stubs shared by use case tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post};
use crate::error::RepoError;
use crate::ports::{CommentRepository, PostRepository};

/// In-process store with switchable failures and call counters.
#[derive(Default)]
pub struct StubStore {
    pub posts: Vec<Post>,
    pub comments: Mutex<Vec<Comment>>,
    pub fail_posts: bool,
    pub fail_comments: bool,
    pub post_lookups: AtomicUsize,
    pub comment_listings: AtomicUsize,
}

impl StubStore {
    /// A store holding `hello-world` with two comments.
    pub fn with_hello_world() -> Self {
        let post = Post::new("hello-world", "Hello, World", "First post.", Uuid::new_v4());
        let first = Comment::new("hello-world", Uuid::new_v4(), "Nice one");
        let second = Comment::new("hello-world", Uuid::new_v4(), "Agreed");
        let unrelated = Comment::new("other-post", Uuid::new_v4(), "Elsewhere");

        Self {
            posts: vec![post],
            comments: Mutex::new(vec![first, second, unrelated]),
            ..Self::default()
        }
    }

    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    pub fn failing_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    pub fn comments_for(&self, slug: &str) -> Vec<Comment> {
        self.comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_slug == slug)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PostRepository for StubStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        self.post_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_posts {
            return Err(RepoError::Connection("post store unreachable".to_string()));
        }
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }
}

#[async_trait]
impl CommentRepository for StubStore {
    async fn list_for_post(&self, slug: &str) -> Result<Vec<Comment>, RepoError> {
        self.comment_listings.fetch_add(1, Ordering::SeqCst);
        if self.fail_comments {
            return Err(RepoError::Query("comments table locked".to_string()));
        }
        Ok(self.comments_for(slug))
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        if self.fail_comments {
            return Err(RepoError::Query("comments table locked".to_string()));
        }
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }
}

/// A post store whose lookups never complete.
pub struct HangingPosts;

#[async_trait]
impl PostRepository for HangingPosts {
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Post>, RepoError> {
        std::future::pending::<Result<Option<Post>, RepoError>>().await
    }
}
