//! Domain entities consumed by the feed and profile layers.

pub mod filters;
pub mod post;
pub mod profile;
