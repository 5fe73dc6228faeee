//! Headless client core for the Socialink web application.
//!
//! This crate owns the data-fetch and state-reconciliation layer of the
//! client: the paginated feed controller with debounced filters, the
//! viewport observer state machines driving incremental loading and lazy
//! media, and the profile edit validation/submission path. Rendering,
//! routing, and token issuance live in the embedding application; the
//! backend is reached only through the collaborator traits in [`api`].

pub mod api;
pub mod config;
pub mod domain;
pub mod feed;
pub mod forms;
pub mod services;
pub mod session;
pub mod viewport;

/// Number of feed items requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Quiescence window applied to filter inputs before a fetch is issued.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Fraction of a media element that must intersect the viewport before
/// its resource starts loading.
pub const DEFAULT_LAZY_THRESHOLD: f32 = 0.1;
