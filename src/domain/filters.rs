//! Feed filter state and its wire encodings.

use serde::{Deserialize, Serialize};

/// Visibility filter applied to the feed query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Both public and private posts.
    #[default]
    Any,
    Public,
    Private,
}

impl Visibility {
    /// Query-string value, or `None` when the field is omitted.
    pub fn as_query_value(self) -> Option<&'static str> {
        match self {
            Visibility::Any => None,
            Visibility::Public => Some("public"),
            Visibility::Private => Some("private"),
        }
    }
}

/// Sort order applied to the feed query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "likes")]
    MostLiked,
    #[serde(rename = "views")]
    MostViewed,
}

impl SortKey {
    /// Backend query-string value for this sort order.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::MostLiked => "likes",
            SortKey::MostViewed => "views",
        }
    }
}

/// Complete filter state of the feed view.
///
/// The default value matches "no filtering": empty search, any category and
/// tag, any visibility, newest first. Mutations are owned by the filter UI;
/// the feed controller only reads a settled snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedFilters {
    /// Free-text search over title and body.
    pub search: String,
    pub category: Option<String>,
    pub visibility: Visibility,
    pub tag: Option<String>,
    pub sort: SortKey,
}

impl FeedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Option lists backing the category and tag filter dropdowns.
///
/// Loaded once per mount; an empty list degrades the corresponding filter
/// to free-text/sort only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}
