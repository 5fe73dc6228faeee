use crate::api::FeedApi;
use crate::domain::filters::FilterOptions;

/// Loads the category and tag option lists, once per mount.
///
/// Failures are non-fatal: a missing list degrades the corresponding filter
/// to free-text/sort only, so errors are logged and swallowed.
pub async fn load_filter_options<A>(api: &A) -> FilterOptions
where
    A: FeedApi + ?Sized,
{
    let categories = match api.list_categories().await {
        Ok(categories) => categories,
        Err(err) => {
            log::warn!("failed to load categories: {err}");
            Vec::new()
        }
    };
    let tags = match api.list_popular_tags().await {
        Ok(tags) => tags,
        Err(err) => {
            log::warn!("failed to load popular tags: {err}");
            Vec::new()
        }
    };
    FilterOptions { categories, tags }
}
