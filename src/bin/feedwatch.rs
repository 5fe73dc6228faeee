//! Diagnostic CLI walking the filtered feed page by page.
//!
//! Reads its settings from an optional `feedwatch.toml` next to the working
//! directory plus `FEEDWATCH_*` environment variables, then prints every
//! matching post until the feed is exhausted. Useful for checking what a
//! given filter set returns without spinning up the web client.

use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;

use socialink_client::api::http::HttpApi;
use socialink_client::config::ClientConfig;
use socialink_client::domain::filters::FeedFilters;
use socialink_client::feed::{FeedController, FeedPhase};
use socialink_client::services::feed::load_filter_options;
use socialink_client::session::Session;

#[derive(Debug, Deserialize)]
struct WatchConfig {
    #[serde(flatten)]
    client: ClientConfig,
    /// Bearer token issued by the auth service.
    token: String,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tag: Option<String>,
}

fn load_config() -> Result<WatchConfig, config::ConfigError> {
    Config::builder()
        .add_source(File::with_name("feedwatch").required(false))
        .add_source(Environment::with_prefix("FEEDWATCH").try_parsing(true))
        .build()?
        .try_deserialize()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let watch = load_config()?;
    let session = Session::new(&watch.client.api_base_url, &watch.token);
    let api = HttpApi::new(session);

    let options = load_filter_options(&api).await;
    if !options.categories.is_empty() {
        println!("categories: {}", options.categories.join(", "));
    }
    if !options.tags.is_empty() {
        println!("popular tags: {}", options.tags.join(", "));
    }

    let mut filters = FeedFilters::new();
    if let Some(search) = watch.search {
        filters = filters.search(search);
    }
    if let Some(category) = watch.category {
        filters = filters.category(category);
    }
    if let Some(tag) = watch.tag {
        filters = filters.tag(tag);
    }

    let mut feed = FeedController::new(api, watch.client.page_size);
    feed.apply_filters(filters).await;

    let mut printed = 0;
    loop {
        let state = feed.state();
        for post in &state.items[printed..] {
            println!(
                "#{:<6} {:<40} likes={:<5} views={:<5} {}",
                post.id,
                post.title,
                post.likes_count,
                post.views_count,
                post.created_at
            );
        }
        printed = state.items.len();

        match state.phase {
            FeedPhase::Exhausted => break,
            FeedPhase::Error => {
                let message = state.last_error.clone().unwrap_or_default();
                eprintln!("feed fetch failed: {message}");
                return Err(message.into());
            }
            _ => {
                feed.load_more().await;
            }
        }
    }

    println!("{printed} posts total");
    Ok(())
}
