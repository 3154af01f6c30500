//! Capability flags derived from the caller and the resource.

use serde::{Deserialize, Serialize};

use crate::domain::{Post, Principal};

/// What the caller may do next with a post.
///
/// Computed fresh for every request and never stored. Each flag is an
/// independent predicate over the principal and the post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub create_comment: bool,
}

impl Permissions {
    /// Evaluate every capability flag for `principal` against `post`.
    pub fn evaluate(principal: &dyn Principal, post: &Post) -> Self {
        Self {
            create_comment: can_create_comment(principal, post),
        }
    }
}

fn can_create_comment(principal: &dyn Principal, _post: &Post) -> bool {
    principal.is_authenticated()
}
