//! Deferred loading state for remote media.

use crate::DEFAULT_LAZY_THRESHOLD;

/// Loading state of one media resource. The three phases are mutually
/// exclusive; `Errored` is terminal (no automatic retry).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaPhase {
    /// Not yet visible, or visible but the resource has not finished
    /// loading.
    #[default]
    Pending,
    Loaded,
    Errored,
}

/// Per-item lazy loader: the resource stays untouched until the hosting
/// element intersects the viewport by at least the configured threshold,
/// then the observer disengages (one-shot) and loading starts.
#[derive(Clone, Debug)]
pub struct LazyMedia {
    url: String,
    threshold: f32,
    phase: MediaPhase,
    /// One-shot observer flag; false once the threshold was crossed.
    observing: bool,
}

impl LazyMedia {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_threshold(url, DEFAULT_LAZY_THRESHOLD)
    }

    pub fn with_threshold(url: impl Into<String>, threshold: f32) -> Self {
        Self {
            url: url.into(),
            threshold,
            phase: MediaPhase::Pending,
            observing: true,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> MediaPhase {
        self.phase
    }

    /// Whether the placeholder should still be shown.
    pub fn is_pending(&self) -> bool {
        self.phase == MediaPhase::Pending
    }

    /// Reports the intersection ratio of the hosting element. Returns
    /// `true` exactly once, when the ratio first reaches the threshold: the
    /// caller must start loading the resource then.
    pub fn intersect(&mut self, ratio: f32) -> bool {
        if !self.observing || ratio < self.threshold {
            return false;
        }
        self.observing = false;
        true
    }

    /// The resource finished loading.
    pub fn mark_loaded(&mut self) {
        if self.phase == MediaPhase::Pending {
            self.phase = MediaPhase::Loaded;
        }
    }

    /// The resource failed to load; the fallback is shown and no retry is
    /// attempted.
    pub fn mark_errored(&mut self) {
        if self.phase == MediaPhase::Pending {
            self.phase = MediaPhase::Errored;
        }
    }
}
