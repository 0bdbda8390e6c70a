//! Drag classifier - directional gating of a gesture
//!
//! Decisions are taken from the accumulated offset since the gesture began,
//! not from the latest delta, so jitter cannot flip the direction mid-drag.

use crate::model::state::{AccumulatedOffset, InteractionState};

/// Axis a drag sample is applied along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAxis {
    /// Dismiss intent
    Horizontal,
    /// Resize intent
    Vertical,
}

/// Horizontal drag is only available once the panel has left the expanded
/// position, and stays available for the rest of a dismiss gesture.
pub fn is_horizontal_permitted(offset: AccumulatedOffset, state: InteractionState) -> bool {
    let dominant = offset.y.abs() <= offset.x.abs() || state == InteractionState::Removing;
    dominant && !matches!(state, InteractionState::Top | InteractionState::Scaling)
}

/// Vertical dominance is strict: an equal offset on both axes belongs to the
/// horizontal gate. A dismiss in progress blocks vertical input.
pub fn is_vertical_permitted(offset: AccumulatedOffset, state: InteractionState) -> bool {
    let dominant = offset.y.abs() > offset.x.abs() || state == InteractionState::Scaling;
    dominant && state != InteractionState::Removing
}

/// Classify a sample; `None` when the gesture has no permitted axis.
///
/// Drags in `Undisplayed`/`Landscape` are filtered before this point.
pub fn classify(offset: AccumulatedOffset, state: InteractionState) -> Option<DragAxis> {
    if is_horizontal_permitted(offset, state) {
        Some(DragAxis::Horizontal)
    } else if is_vertical_permitted(offset, state) {
        Some(DragAxis::Vertical)
    } else {
        None
    }
}
