//! Shared fixtures: in-memory collaborator implementations with request
//! recording, standing in for the backend HTTP API.
#![allow(dead_code)] // each test binary uses a different subset

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use socialink_client::api::errors::{ApiError, ApiResult};
use socialink_client::api::{FeedApi, PostQuery, ProfileApi};
use socialink_client::domain::post::Post;
use socialink_client::domain::profile::{ProfileBundle, ProfileRecord, ProfileUpdate};

pub fn post(id: i64) -> Post {
    Post {
        id,
        user_id: 1,
        title: format!("Post #{id}"),
        content: format!("<p>body {id}</p>"),
        media_url: None,
        created_at: NaiveDateTime::default(),
        allow_comments: true,
        public_post: true,
        likes_count: 0,
        views_count: 0,
        category: Some("tech".to_string()),
        tags: vec!["rust".to_string()],
    }
}

/// Posts API over a fixed in-memory store. Pages are sliced client-style
/// (1-based page, `per_page` items); the store honors the short-page
/// contract. Every served query is recorded, and `fail_next` makes the next
/// call reject.
pub struct InMemoryFeedApi {
    store: Mutex<Vec<Post>>,
    queries: Mutex<Vec<PostQuery>>,
    fail_next: Mutex<Option<ApiError>>,
}

impl InMemoryFeedApi {
    pub fn with_posts(count: usize) -> Self {
        Self {
            store: Mutex::new((1..=count as i64).map(post).collect()),
            queries: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// The next collaborator call fails with `err` instead of answering.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn recorded_queries(&self) -> Vec<PostQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.fail_next.lock().unwrap().take()
    }
}

#[async_trait]
impl FeedApi for InMemoryFeedApi {
    async fn list_posts(&self, query: PostQuery) -> ApiResult<Vec<Post>> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.queries.lock().unwrap().push(query.clone());

        let store = self.store.lock().unwrap();
        let start = (query.page - 1) * query.per_page;
        let end = (start + query.per_page).min(store.len());
        if start >= store.len() {
            return Ok(Vec::new());
        }
        Ok(store[start..end].to_vec())
    }

    async fn list_categories(&self) -> ApiResult<Vec<String>> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(vec!["tech".to_string(), "life".to_string()])
    }

    async fn list_popular_tags(&self) -> ApiResult<Vec<String>> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(vec!["rust".to_string(), "go".to_string()])
    }

    async fn like_post(&self, post_id: i64) -> ApiResult<u32> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut store = self.store.lock().unwrap();
        let post = store
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| ApiError::BadResponse(format!("unknown post {post_id}")))?;
        post.likes_count += 1;
        Ok(post.likes_count)
    }
}

/// Profile API over one in-memory record, recording every update payload.
pub struct InMemoryProfileApi {
    record: Mutex<ProfileRecord>,
    updates: Mutex<Vec<ProfileUpdate>>,
    fail_next: Mutex<Option<ApiError>>,
}

impl InMemoryProfileApi {
    pub fn new(record: ProfileRecord) -> Self {
        Self {
            record: Mutex::new(record),
            updates: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn recorded_updates(&self) -> Vec<ProfileUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileApi for InMemoryProfileApi {
    async fn get_profile(&self) -> ApiResult<ProfileBundle> {
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        Ok(ProfileBundle {
            user: self.record.lock().unwrap().clone(),
            activity: Vec::new(),
        })
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<ProfileRecord> {
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        self.updates.lock().unwrap().push(update.clone());

        let mut record = self.record.lock().unwrap();
        record.title = update.title.clone();
        record.bio = update.bio.clone();
        record.skills = update.skills.clone();
        record.location = update.location.clone();
        record.phone = update.phone.clone();
        record.languages = update.languages.clone();
        Ok(record.clone())
    }
}
