//! Use cases - application services orchestrating domain and ports.

pub mod add_comment;
pub mod get_post;
mod permissions;

#[cfg(test)]
mod test_support;

pub use add_comment::{AddComment, AddCommentRequest};
pub use get_post::GetPost;
pub use permissions::Permissions;
