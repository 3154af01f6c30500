//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use blog_core::ports::{CommentRepository, PostRepository, TokenService};
use blog_core::usecase::{AddComment, GetPost};
use blog_infra::InMemoryBlogStore;
use blog_infra::memory::demo_content;

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresCommentRepository, PostgresPostRepository};

#[cfg(feature = "auth")]
use blog_infra::JwtTokenService;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub get_post: GetPost,
    pub add_comment: AddComment,
    /// `None` when bearer authentication is compiled out.
    pub tokens: Option<Arc<dyn TokenService>>,
    /// Name of the storage backend, reported by the health check.
    pub storage: &'static str,
    pub request_timeout: Duration,
    shutdown: CancellationToken,
}

/// The repositories backing both use cases.
struct Storage {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    name: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig, shutdown: CancellationToken) -> Self {
        let storage = Self::init_storage(config).await;

        #[cfg(feature = "auth")]
        let tokens: Option<Arc<dyn TokenService>> =
            Some(Arc::new(JwtTokenService::new(config.jwt.clone())) as Arc<dyn TokenService>);

        #[cfg(not(feature = "auth"))]
        let tokens: Option<Arc<dyn TokenService>> = {
            tracing::info!("Running without auth feature - every caller is anonymous");
            None
        };

        tracing::info!(storage = storage.name, "Application state initialized");

        Self::from_parts(
            storage.posts,
            storage.comments,
            tokens,
            storage.name,
            config.request_timeout,
            shutdown,
        )
    }

    /// Assemble the state from already-built collaborators.
    pub fn from_parts(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        tokens: Option<Arc<dyn TokenService>>,
        storage: &'static str,
        request_timeout: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            get_post: GetPost::new(posts.clone(), comments.clone()),
            add_comment: AddComment::new(posts, comments),
            tokens,
            storage,
            request_timeout,
            shutdown,
        }
    }

    /// Token for one request.
    ///
    /// Fires when the server shuts down or when `request_timeout` elapses,
    /// whichever comes first. Cancel it (or drop its `DropGuard`) once the
    /// request is done so the deadline task exits.
    pub fn request_token(&self) -> CancellationToken {
        let token = self.shutdown.child_token();
        let deadline = token.clone();
        let timeout = self.request_timeout;

        actix_rt::spawn(async move {
            tokio::select! {
                _ = deadline.cancelled() => {}
                _ = tokio::time::sleep(timeout) => {
                    tracing::warn!(timeout_secs = timeout.as_secs(), "Request deadline exceeded");
                    deadline.cancel();
                }
            }
        });

        token
    }

    async fn init_storage(config: &AppConfig) -> Storage {
        if let Some(storage) = Self::connect_database(config).await {
            return storage;
        }

        let store = Arc::new(InMemoryBlogStore::new());
        if config.seed_demo_content {
            let (post, comments) = demo_content();
            match store.seed(post, comments).await {
                Ok(()) => tracing::info!(posts = store.post_count().await, "Demo content seeded"),
                Err(e) => tracing::error!(error = %e, "Failed to seed demo content"),
            }
        }

        Storage {
            posts: store.clone(),
            comments: store,
            name: "memory",
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect_database(config: &AppConfig) -> Option<Storage> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return None;
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => Some(Storage {
                posts: Arc::new(PostgresPostRepository::new(connections.main.clone())),
                comments: Arc::new(PostgresCommentRepository::new(connections.main)),
                name: "postgres",
            }),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to connect to database. Using in-memory fallback."
                );
                None
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect_database(config: &AppConfig) -> Option<Storage> {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored - built without postgres feature");
        }
        None
    }
}
