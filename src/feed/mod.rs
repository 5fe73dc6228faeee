//! Feed pagination state and filter settling.

pub mod controller;
pub mod debounce;

pub use controller::{FeedController, FeedPhase, FeedState, PageRequest};
pub use debounce::Debounced;
