//! Mock collaborator implementations for isolating callers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{FeedApi, PostQuery, ProfileApi};
use crate::domain::post::Post;
use crate::domain::profile::{ProfileBundle, ProfileRecord, ProfileUpdate};

mock! {
    pub Api {}

    #[async_trait]
    impl FeedApi for Api {
        async fn list_posts(&self, query: PostQuery) -> ApiResult<Vec<Post>>;
        async fn list_categories(&self) -> ApiResult<Vec<String>>;
        async fn list_popular_tags(&self) -> ApiResult<Vec<String>>;
        async fn like_post(&self, post_id: i64) -> ApiResult<u32>;
    }

    #[async_trait]
    impl ProfileApi for Api {
        async fn get_profile(&self) -> ApiResult<ProfileBundle>;
        async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<ProfileRecord>;
    }
}
