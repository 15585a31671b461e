//! Tour state and the read-only projection published to the renderer.

use crate::script::TourStep;
use serde::Serialize;

/// State owned exclusively by the controller. Invariant: `playing`
/// implies `active`; `current_index` is meaningless while inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TourState {
    pub active: bool,
    pub current_index: usize,
    pub playing: bool,
}

/// What the renderer is allowed to see: the active section and anchor for
/// highlighting, plus the step text for on-screen captions. Serialized as
/// an event payload by host shells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TourView {
    pub active: bool,
    pub step_index: Option<usize>,
    pub section_id: Option<String>,
    pub anchor_id: Option<String>,
    pub title: Option<String>,
    pub narration: Option<String>,
}

impl TourView {
    /// Projection of the idle state: nothing highlighted, manual
    /// navigation enabled.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn for_step(index: usize, step: &TourStep) -> Self {
        Self {
            active: true,
            step_index: Some(index),
            section_id: Some(step.section_id.clone()),
            anchor_id: Some(step.id.clone()),
            title: Some(step.title.clone()),
            narration: Some(step.narration.clone()),
        }
    }
}
