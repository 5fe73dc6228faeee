//! Collaborator seams for the backend HTTP API.
//!
//! The rest of the crate talks to the backend exclusively through the
//! [`FeedApi`] and [`ProfileApi`] traits; [`http::HttpApi`] is the production
//! implementation and `mock` (behind the `test-mocks` feature) provides
//! generated mocks for downstream tests.

use async_trait::async_trait;

use crate::domain::filters::FeedFilters;
use crate::domain::post::Post;
use crate::domain::profile::{ProfileBundle, ProfileRecord, ProfileUpdate};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

use errors::ApiResult;

/// One page worth of feed query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    /// 1-based page index.
    pub page: usize,
    pub per_page: usize,
    pub filters: FeedFilters,
}

impl PostQuery {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            filters: FeedFilters::default(),
        }
    }

    pub fn filters(mut self, filters: FeedFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// Read access to the posts API.
#[async_trait]
pub trait FeedApi {
    /// Fetches one page of posts matching the query.
    ///
    /// Contract the backing store must honor: a page shorter than
    /// `per_page` is returned only when the result set is exhausted. The
    /// feed controller infers `has_more` from the page length instead of a
    /// separate total-count round trip.
    async fn list_posts(&self, query: PostQuery) -> ApiResult<Vec<Post>>;

    /// Distinct categories available for filtering.
    async fn list_categories(&self) -> ApiResult<Vec<String>>;

    /// Most frequently used tags, best first.
    async fn list_popular_tags(&self) -> ApiResult<Vec<String>>;

    /// Registers a like on a post, returning the updated like count.
    async fn like_post(&self, post_id: i64) -> ApiResult<u32>;
}

/// Access to the signed-in user's profile.
#[async_trait]
pub trait ProfileApi {
    async fn get_profile(&self) -> ApiResult<ProfileBundle>;

    /// Persists the update and returns the record as stored.
    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<ProfileRecord>;
}
