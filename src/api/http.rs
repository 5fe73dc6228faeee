//! Production implementation of the collaborator traits over HTTP.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{FeedApi, PostQuery, ProfileApi};
use crate::domain::filters::SortKey;
use crate::domain::post::Post;
use crate::domain::profile::{ProfileBundle, ProfileRecord, ProfileUpdate};
use crate::session::Session;

/// HTTP client for the Socialink backend.
///
/// All requests carry the session's bearer token. 401/422 responses map to
/// [`ApiError::Unauthorized`]; other non-success statuses and transport
/// failures map to [`ApiError::Network`]; undecodable bodies map to
/// [`ApiError::BadResponse`].
#[derive(Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    session: Session,
}

impl HttpApi {
    pub fn new(session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }

    /// Uses a caller-provided client (custom timeouts, proxies).
    pub fn with_client(http: reqwest::Client, session: Session) -> Self {
        Self { http, session }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.session.base_url(), path)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: String) -> ApiResult<T> {
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.session.bearer_token())
            .send()
            .await?;
        Ok(check_status(response)?.json::<T>().await?)
    }
}

/// Query-string encoding of a feed page request.
///
/// Empty and default filter fields are omitted so the request reflects only
/// what the user actually narrowed down.
pub fn query_string(query: &PostQuery) -> String {
    let wire = WireQuery::from(query);
    serde_html_form::to_string(&wire).unwrap_or_else(|err| {
        log::error!("failed to encode feed query: {err}");
        String::new()
    })
}

fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED
        || status == reqwest::StatusCode::UNPROCESSABLE_ENTITY
    {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ApiError::Network(format!("unexpected status {status}")));
    }
    Ok(response)
}

#[derive(Serialize)]
struct WireQuery<'a> {
    page: usize,
    per_page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<&'static str>,
}

impl<'a> From<&'a PostQuery> for WireQuery<'a> {
    fn from(query: &'a PostQuery) -> Self {
        let filters = &query.filters;
        let non_empty = |s: &'a str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        Self {
            page: query.page,
            per_page: query.per_page,
            search: non_empty(&filters.search),
            category: filters.category.as_deref().and_then(non_empty),
            visibility: filters.visibility.as_query_value(),
            tag: filters.tag.as_deref().and_then(non_empty),
            sort: (filters.sort != SortKey::default()).then(|| filters.sort.as_query_value()),
        }
    }
}

#[derive(Deserialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

#[derive(Deserialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

#[derive(Deserialize)]
struct TagsResponse {
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct LikeResponse {
    likes_count: u32,
}

#[derive(Deserialize)]
struct UpdateProfileResponse {
    user: ProfileRecord,
}

#[async_trait]
impl FeedApi for HttpApi {
    async fn list_posts(&self, query: PostQuery) -> ApiResult<Vec<Post>> {
        let url = format!("{}?{}", self.url("/api/posts"), query_string(&query));
        let body: PostsResponse = self.get_json(url).await?;
        Ok(body.posts)
    }

    async fn list_categories(&self) -> ApiResult<Vec<String>> {
        let body: CategoriesResponse = self.get_json(self.url("/api/posts/categories")).await?;
        Ok(body.categories)
    }

    async fn list_popular_tags(&self) -> ApiResult<Vec<String>> {
        let body: TagsResponse = self.get_json(self.url("/api/posts/popular-tags")).await?;
        Ok(body.tags)
    }

    async fn like_post(&self, post_id: i64) -> ApiResult<u32> {
        let response = self
            .http
            .post(self.url(&format!("/api/posts/{post_id}/like")))
            .bearer_auth(self.session.bearer_token())
            .send()
            .await?;
        let body: LikeResponse = check_status(response)?.json().await?;
        Ok(body.likes_count)
    }
}

#[async_trait]
impl ProfileApi for HttpApi {
    async fn get_profile(&self) -> ApiResult<ProfileBundle> {
        self.get_json(self.url("/api/profile")).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<ProfileRecord> {
        let response = self
            .http
            .put(self.url("/api/profile"))
            .bearer_auth(self.session.bearer_token())
            .json(update)
            .send()
            .await?;
        let body: UpdateProfileResponse = check_status(response)?.json().await?;
        Ok(body.user)
    }
}
