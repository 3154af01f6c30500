//! Domain entities - the core business objects.

mod comment;
mod post;
mod principal;

pub use comment::Comment;
pub use post::Post;
pub use principal::{Anonymous, AuthenticatedUser, Principal};
