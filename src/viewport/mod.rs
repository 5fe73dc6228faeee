//! Headless viewport observer state machines.
//!
//! The crate has no DOM access; the embedding presentation layer reports
//! element attachment and visibility transitions into these machines, which
//! answer whether the owning component must react. Each observer follows the
//! one-shot `armed -> fired -> disengaged` lifecycle keyed by element
//! identity; instances are held in an [`arena::ObserverArena`] per component
//! instance so teardown releases every handle at once.

pub mod arena;
pub mod lazy;
pub mod sentinel;

pub use arena::{Handle, ObserverArena};
pub use lazy::{LazyMedia, MediaPhase};
pub use sentinel::SentinelTrigger;

/// Identity of a rendered element as assigned by the embedding layer.
///
/// A re-render that replaces the underlying element must assign a new id;
/// observers compare ids to detect marker swaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);
