//! In-memory post and comment store.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Comment, Post};
use blog_core::error::RepoError;
use blog_core::ports::{CommentRepository, PostRepository};

/// Posts keyed by slug, with each post's comments in insertion order.
pub struct InMemoryBlogStore {
    posts: RwLock<HashMap<String, Post>>,
    comments: RwLock<HashMap<String, Vec<Comment>>>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            comments: RwLock::new(HashMap::new()),
        }
    }

    /// Publish a post, replacing any post with the same slug.
    pub async fn insert_post(&self, post: Post) {
        let mut posts = self.posts.write().await;
        posts.insert(post.slug.clone(), post);
    }

    /// Insert a post together with its comments.
    pub async fn seed(&self, post: Post, comments: Vec<Comment>) -> Result<(), RepoError> {
        self.insert_post(post).await;
        for comment in comments {
            self.save(comment).await?;
        }
        Ok(())
    }

    pub async fn post_count(&self) -> usize {
        self.posts.read().await.len()
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A `hello-world` post with two comments.
pub fn demo_content() -> (Post, Vec<Comment>) {
    let editor = Uuid::new_v4();
    let reader = Uuid::new_v4();

    let post = Post::new(
        "hello-world",
        "Hello, World",
        "Welcome to the blog. This is the first post.",
        editor,
    );
    let comments = vec![
        Comment::new("hello-world", reader, "Looking forward to more."),
        Comment::new("hello-world", editor, "Thanks! More soon."),
    ];

    (post, comments)
}

#[async_trait]
impl PostRepository for InMemoryBlogStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(slug).cloned())
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlogStore {
    async fn list_for_post(&self, slug: &str) -> Result<Vec<Comment>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments.get(slug).cloned().unwrap_or_default())
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        // Same guarantee as the foreign key on comments.post_slug.
        if !self.posts.read().await.contains_key(&comment.post_slug) {
            return Err(RepoError::Constraint(format!(
                "post '{}' does not exist",
                comment.post_slug
            )));
        }

        let mut comments = self.comments.write().await;
        comments
            .entry(comment.post_slug.clone())
            .or_default()
            .push(comment.clone());

        Ok(comment)
    }
}
