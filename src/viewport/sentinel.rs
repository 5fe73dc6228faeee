//! Load-more sentinel observing the end-of-list marker.

use crate::viewport::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArmState {
    /// Watching for a becomes-visible transition.
    Armed,
    /// Fired for the current visible spell; waits for the marker to leave
    /// the viewport before re-arming.
    Fired,
    /// Not observing: disabled, or no marker attached.
    Disengaged,
}

/// One-shot trigger for the feed's end-of-list marker.
///
/// Fires at most once per becomes-visible transition of the attached marker.
/// While disabled (a fetch in flight, or no more data) the observer is torn
/// down so scrolling cannot enqueue redundant loads; re-enabling re-arms it
/// and fires immediately when the marker is still visible. Swapping the
/// marker element (list re-render) re-attaches the trigger to the new one.
#[derive(Debug)]
pub struct SentinelTrigger {
    element: Option<ElementId>,
    state: ArmState,
    disabled: bool,
    /// Last reported visibility of the attached marker.
    visible: bool,
}

impl SentinelTrigger {
    pub fn new() -> Self {
        Self {
            element: None,
            state: ArmState::Disengaged,
            disabled: false,
            visible: false,
        }
    }

    /// Attaches (or re-attaches) the trigger to a marker element. A new
    /// element starts hidden until a visibility report arrives.
    pub fn attach(&mut self, element: ElementId) {
        if self.element == Some(element) {
            return;
        }
        self.element = Some(element);
        self.visible = false;
        self.state = if self.disabled {
            ArmState::Disengaged
        } else {
            ArmState::Armed
        };
    }

    /// Stops observing; used when the owning view is torn down.
    pub fn detach(&mut self) {
        self.element = None;
        self.visible = false;
        self.state = ArmState::Disengaged;
    }

    /// Toggles the disabled flag. Returns `true` when re-enabling finds the
    /// marker already visible and the trigger fires on the spot.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        if self.disabled == disabled {
            return false;
        }
        self.disabled = disabled;
        if disabled {
            self.state = ArmState::Disengaged;
            return false;
        }
        self.state = ArmState::Armed;
        if self.element.is_some() && self.visible {
            self.state = ArmState::Fired;
            return true;
        }
        false
    }

    /// Reports a visibility transition of `element`. Returns `true` exactly
    /// when the load-more callback must run. Reports for a stale element
    /// (pre-swap) are ignored.
    pub fn visibility(&mut self, element: ElementId, visible: bool) -> bool {
        if self.element != Some(element) {
            return false;
        }
        self.visible = visible;
        match (self.state, visible) {
            (ArmState::Armed, true) => {
                self.state = ArmState::Fired;
                true
            }
            (ArmState::Fired, false) => {
                // The marker left the viewport; the next visible spell may
                // fire again.
                self.state = ArmState::Armed;
                false
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state == ArmState::Armed
    }
}

impl Default for SentinelTrigger {
    fn default() -> Self {
        Self::new()
    }
}
