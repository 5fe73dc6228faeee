//! Paginated feed controller.
//!
//! Owns the filter snapshot, the pagination cursor, and the loaded items;
//! every network side effect is represented by a [`PageRequest`] issued by a
//! `begin_*` method and resolved through [`FeedController::complete`]. The
//! async drivers (`apply_filters`, `load_more`, `retry`) pair the two around
//! a single collaborator call, so each entry into `Loading`/`LoadingMore`
//! issues exactly one request.

use crate::api::errors::ApiResult;
use crate::api::{FeedApi, PostQuery};
use crate::domain::filters::FeedFilters;
use crate::domain::post::Post;

/// Lifecycle of the current filter session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedPhase {
    /// Nothing in flight; more pages may exist.
    #[default]
    Idle,
    /// First page of a filter session is in flight.
    Loading,
    /// A follow-up page is in flight.
    LoadingMore,
    /// The last fetch failed; loaded items are preserved.
    Error,
    /// The backing store returned a short page; terminal until the filters
    /// change.
    Exhausted,
}

/// Observable state of the feed, exclusively mutated by the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    /// Loaded items in server page order, unique by id within one filter
    /// session.
    pub items: Vec<Post>,
    /// Last fully processed page; 0 before anything loaded.
    pub current_page: usize,
    pub has_more: bool,
    pub phase: FeedPhase,
    /// Message of the last failed fetch, cleared by the next success.
    pub last_error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            has_more: true,
            phase: FeedPhase::Idle,
            last_error: None,
        }
    }
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading | FeedPhase::LoadingMore)
    }
}

/// An issued page fetch, carrying the generation it belongs to.
///
/// The filters are snapshotted at issue time; if the controller's generation
/// moves on before the response arrives (a newer filter set took over), the
/// resolution is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    query: PostQuery,
}

impl PageRequest {
    pub fn query(&self) -> &PostQuery {
        &self.query
    }
}

pub struct FeedController<A> {
    api: A,
    page_size: usize,
    filters: FeedFilters,
    generation: u64,
    state: FeedState,
    /// Page to re-issue on retry; `None` when there is nothing retryable
    /// (no failure, or the failure was an unauthorized response).
    failed_page: Option<usize>,
}

impl<A> FeedController<A> {
    pub fn new(api: A, page_size: usize) -> Self {
        Self {
            api,
            page_size,
            filters: FeedFilters::default(),
            generation: 0,
            state: FeedState::default(),
            failed_page: None,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn filters(&self) -> &FeedFilters {
        &self.filters
    }

    /// Whether the viewport sentinel must be disarmed: a fetch is in flight
    /// or no more data exists.
    pub fn sentinel_disabled(&self) -> bool {
        self.state.is_loading() || !self.state.has_more
    }

    /// Starts a new filter session: clears loaded items, resets the cursor,
    /// and issues page 1 under a fresh generation. Any in-flight fetch of
    /// the previous session becomes stale.
    pub fn begin_refresh(&mut self, filters: FeedFilters) -> PageRequest {
        self.generation += 1;
        self.filters = filters.clone();
        self.failed_page = None;
        self.state = FeedState {
            phase: FeedPhase::Loading,
            ..FeedState::default()
        };
        PageRequest {
            generation: self.generation,
            query: PostQuery::new(1, self.page_size).filters(filters),
        }
    }

    /// Issues the next page, or `None` unless the controller is idle with
    /// more data available. Guarantees page N+1 is never requested before
    /// page N's response was processed.
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.state.phase != FeedPhase::Idle || !self.state.has_more {
            return None;
        }
        self.state.phase = FeedPhase::LoadingMore;
        Some(PageRequest {
            generation: self.generation,
            query: PostQuery::new(self.state.current_page + 1, self.page_size)
                .filters(self.filters.clone()),
        })
    }

    /// Re-issues the fetch that failed, or `None` when there is no
    /// retryable failure. Unauthorized failures are never retried.
    pub fn begin_retry(&mut self) -> Option<PageRequest> {
        if self.state.phase != FeedPhase::Error {
            return None;
        }
        let page = self.failed_page?;
        self.state.phase = if page == 1 && self.state.items.is_empty() {
            FeedPhase::Loading
        } else {
            FeedPhase::LoadingMore
        };
        Some(PageRequest {
            generation: self.generation,
            query: PostQuery::new(page, self.page_size).filters(self.filters.clone()),
        })
    }

    /// Applies a resolved fetch. Responses from a superseded generation are
    /// discarded so a stale filter set can never populate the feed.
    pub fn complete(&mut self, request: PageRequest, result: ApiResult<Vec<Post>>) {
        if request.generation != self.generation {
            log::debug!(
                "discarding stale feed response for page {}",
                request.query.page
            );
            return;
        }
        match result {
            Ok(posts) => {
                let full_page = posts.len() == self.page_size;
                for post in posts {
                    if self.state.items.iter().any(|p| p.id == post.id) {
                        log::warn!("duplicate post {} in page {}", post.id, request.query.page);
                        continue;
                    }
                    self.state.items.push(post);
                }
                self.state.current_page = request.query.page;
                self.state.has_more = full_page;
                self.state.phase = if full_page {
                    FeedPhase::Idle
                } else {
                    FeedPhase::Exhausted
                };
                self.state.last_error = None;
                self.failed_page = None;
            }
            Err(err) => {
                log::error!("feed page {} failed: {err}", request.query.page);
                self.failed_page = err.is_retryable().then_some(request.query.page);
                self.state.phase = FeedPhase::Error;
                self.state.last_error = Some(err.to_string());
            }
        }
    }
}

impl<A: FeedApi> FeedController<A> {
    /// Resets the session to the given filters and loads page 1.
    pub async fn apply_filters(&mut self, filters: FeedFilters) {
        let request = self.begin_refresh(filters);
        self.execute(request).await;
    }

    /// Sentinel handler: loads the next page when idle with more data.
    /// Returns whether a fetch was issued.
    pub async fn load_more(&mut self) -> bool {
        match self.begin_next_page() {
            Some(request) => {
                self.execute(request).await;
                true
            }
            None => false,
        }
    }

    /// Re-issues the failed fetch. Returns whether a fetch was issued.
    pub async fn retry(&mut self) -> bool {
        match self.begin_retry() {
            Some(request) => {
                self.execute(request).await;
                true
            }
            None => false,
        }
    }

    /// Optimistic like: bumps the local counter immediately, reconciles to
    /// the server count on success, rolls back on failure.
    pub async fn like(&mut self, post_id: i64) -> ApiResult<()> {
        let Some(index) = self.state.items.iter().position(|p| p.id == post_id) else {
            log::warn!("like requested for unknown post {post_id}");
            return Ok(());
        };
        self.state.items[index].likes_count += 1;
        match self.api.like_post(post_id).await {
            Ok(count) => {
                self.state.items[index].likes_count = count;
                Ok(())
            }
            Err(err) => {
                let counter = &mut self.state.items[index].likes_count;
                *counter = counter.saturating_sub(1);
                Err(err)
            }
        }
    }

    async fn execute(&mut self, request: PageRequest) {
        let result = self.api.list_posts(request.query.clone()).await;
        self.complete(request, result);
    }
}
