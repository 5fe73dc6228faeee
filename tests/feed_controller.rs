//! End-to-end feed scenarios: controller, sentinel, and collaborator wired
//! together the way the presentation layer drives them.

use socialink_client::api::errors::ApiError;
use socialink_client::api::http::query_string;
use socialink_client::domain::filters::{FeedFilters, SortKey};
use socialink_client::feed::{FeedController, FeedPhase};
use socialink_client::viewport::{ElementId, SentinelTrigger};

mod common;

const MARKER: ElementId = ElementId(99);

/// 25 items at page size 10 load as [10, 10, 5] across three sentinel-driven
/// pages, with `has_more` [true, true, false] and no duplicate ids.
#[tokio::test]
async fn sentinel_drives_pagination_until_exhausted() {
    let api = common::InMemoryFeedApi::with_posts(25);
    let mut feed = FeedController::new(api, 10);
    let mut sentinel = SentinelTrigger::new();
    sentinel.attach(MARKER);

    feed.apply_filters(FeedFilters::default()).await;

    let mut counts = vec![feed.state().items.len()];
    let mut has_more = vec![feed.state().has_more];

    // The marker scrolls into view; each fire loads one more page while the
    // sentinel is held disabled for the duration of the fetch.
    let mut fired = sentinel.visibility(MARKER, true);
    while fired {
        sentinel.set_disabled(true);
        assert!(feed.load_more().await);
        counts.push(feed.state().items.len());
        has_more.push(feed.state().has_more);

        fired = !feed.sentinel_disabled() && sentinel.set_disabled(false);
    }

    assert_eq!(counts, vec![10, 20, 25]);
    assert_eq!(has_more, vec![true, true, false]);
    assert_eq!(feed.state().phase, FeedPhase::Exhausted);

    let mut ids: Vec<i64> = feed.state().items.iter().map(|p| p.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);

    // Pages were requested strictly in order, and nothing past the end.
    let pages: Vec<usize> = feed.api().recorded_queries().iter().map(|q| q.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

/// search="hello", category="tech", sort=likes: the request carries exactly
/// those three non-default fields plus pagination, and a 3-item response
/// closes the feed.
#[tokio::test]
async fn non_default_filters_shape_the_request() {
    let api = common::InMemoryFeedApi::with_posts(3);
    let mut feed = FeedController::new(api, 10);

    let filters = FeedFilters::new()
        .search("hello")
        .category("tech")
        .sort(SortKey::MostLiked);
    feed.apply_filters(filters).await;

    assert_eq!(feed.state().items.len(), 3);
    assert!(!feed.state().has_more);
    assert_eq!(feed.state().phase, FeedPhase::Exhausted);

    let queries = feed.api().recorded_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(
        query_string(&queries[0]),
        "page=1&per_page=10&search=hello&category=tech&sort=likes"
    );
}

#[tokio::test]
async fn failed_page_is_retried_without_losing_loaded_items() {
    let api = common::InMemoryFeedApi::with_posts(15);
    let mut feed = FeedController::new(api, 10);

    feed.apply_filters(FeedFilters::default()).await;
    assert_eq!(feed.state().items.len(), 10);

    feed.api().fail_next(ApiError::Network("connection reset".into()));
    feed.load_more().await;

    assert_eq!(feed.state().phase, FeedPhase::Error);
    assert_eq!(feed.state().items.len(), 10);
    assert!(feed.state().last_error.is_some());

    assert!(feed.retry().await);
    assert_eq!(feed.state().items.len(), 15);
    assert_eq!(feed.state().phase, FeedPhase::Exhausted);
    assert!(feed.state().last_error.is_none());
}

#[tokio::test]
async fn like_is_applied_optimistically_and_reconciled() {
    let api = common::InMemoryFeedApi::with_posts(5);
    let mut feed = FeedController::new(api, 10);
    feed.apply_filters(FeedFilters::default()).await;

    feed.like(3).await.unwrap();
    let liked = feed.state().items.iter().find(|p| p.id == 3).unwrap();
    assert_eq!(liked.likes_count, 1);

    // A failed like rolls the optimistic bump back.
    feed.api().fail_next(ApiError::Network("down".into()));
    assert!(feed.like(3).await.is_err());
    let liked = feed.state().items.iter().find(|p| p.id == 3).unwrap();
    assert_eq!(liked.likes_count, 1);
}

#[tokio::test]
async fn unauthorized_page_fetch_is_not_retryable() {
    let api = common::InMemoryFeedApi::with_posts(25);
    let mut feed = FeedController::new(api, 10);

    feed.api().fail_next(ApiError::Unauthorized);
    feed.apply_filters(FeedFilters::default()).await;

    assert_eq!(feed.state().phase, FeedPhase::Error);
    assert!(!feed.retry().await);
    assert!(feed.state().items.is_empty());
}
