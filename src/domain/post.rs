use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single feed item as returned by the posts API.
///
/// Identity is `id`; a post is immutable from the client's perspective except
/// for the counters, which may be refreshed by a re-fetch or adjusted
/// optimistically by the feed controller.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    /// Identifier of the post's author.
    pub user_id: i64,
    pub title: String,
    /// Opaque rich-text markup; sanitization and rendering are the
    /// presentation layer's concern.
    pub content: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub allow_comments: bool,
    pub public_post: bool,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub views_count: u32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
