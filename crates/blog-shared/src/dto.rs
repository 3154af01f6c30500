//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/posts/{slug}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetPostQuery {
    /// Comma separated include-list, e.g. `permissions,comments`.
    #[serde(default)]
    pub fields: Option<String>,
}

impl GetPostQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// A repeated `fields` key is merged into one include-list rather than
    /// rejected; other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "fields")
            .map(|(_, value)| value)
            .collect();

        let fields = if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        };

        Self { fields }
    }
}

/// Body of `POST /api/posts/{slug}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_fields_are_merged() {
        let query = GetPostQuery::from_pairs(pairs(&[
            ("fields", "comments"),
            ("page", "2"),
            ("fields", "permissions"),
        ]));

        assert_eq!(query.fields.as_deref(), Some("comments,permissions"));
    }

    #[test]
    fn test_absent_fields_is_none() {
        let query = GetPostQuery::from_pairs(pairs(&[("page", "2")]));

        assert!(query.fields.is_none());
    }
}
