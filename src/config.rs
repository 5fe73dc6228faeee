//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::{DEFAULT_DEBOUNCE_MS, DEFAULT_LAZY_THRESHOLD, DEFAULT_PAGE_SIZE};

/// Tunables shared by the feed and profile components.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:5050`.
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_lazy_threshold")]
    pub lazy_threshold: f32,
    /// Maximum accepted bio length; the richer profile variant uses 500,
    /// the simpler one 300.
    #[serde(default = "default_bio_max_len")]
    pub bio_max_len: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_lazy_threshold() -> f32 {
    DEFAULT_LAZY_THRESHOLD
}

fn default_bio_max_len() -> usize {
    500
}
