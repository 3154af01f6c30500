//! Caller-selected field projection for the post document.
//!
//! `fields` is a flat, comma separated include-list. Tokens are trimmed,
//! matched exactly and unknown ones are dropped, so clients built against
//! a newer or older vocabulary keep working.

use std::collections::BTreeSet;

/// A top-level field of the post document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Slug,
    Title,
    Body,
    AuthorId,
    CreatedAt,
    UpdatedAt,
    Permissions,
    Comments,
}

impl Field {
    /// Fields copied from the post record itself.
    pub const POST_FIELDS: [Field; 6] = [
        Field::Slug,
        Field::Title,
        Field::Body,
        Field::AuthorId,
        Field::CreatedAt,
        Field::UpdatedAt,
    ];

    /// Parse a single token. Returns `None` for names outside the vocabulary.
    pub fn parse(token: &str) -> Option<Self> {
        let field = match token {
            "slug" => Field::Slug,
            "title" => Field::Title,
            "body" => Field::Body,
            "author_id" => Field::AuthorId,
            "created_at" => Field::CreatedAt,
            "updated_at" => Field::UpdatedAt,
            "permissions" => Field::Permissions,
            "comments" => Field::Comments,
            _ => return None,
        };
        Some(field)
    }

    pub fn is_post_field(self) -> bool {
        !matches!(self, Field::Permissions | Field::Comments)
    }
}

/// The resolved set of fields to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    fields: BTreeSet<Field>,
}

impl Projection {
    /// Resolve a raw `fields` value.
    ///
    /// When no post field is named, all post fields are kept, so that
    /// `permissions,comments` extends the default document instead of
    /// replacing it.
    pub fn parse(fields: Option<&str>) -> Self {
        let mut requested: BTreeSet<Field> = fields
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter_map(Field::parse)
            .collect();

        if !requested.iter().any(|f| f.is_post_field()) {
            requested.extend(Field::POST_FIELDS);
        }

        Self { fields: requested }
    }

    pub fn includes(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::parse(None)
    }
}
