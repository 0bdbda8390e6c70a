//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};

use crate::model::geometry::{Rect, ViewSize};
use crate::model::state::{AnimationId, Orientation};
use crate::model::PanelPair;

/// Phase of a decoded drag event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
}

/// One decoded drag event
///
/// Deltas are relative to the previous sample; velocities are in points per
/// second and only consulted on `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSample {
    pub phase: DragPhase,
    #[serde(default)]
    pub dx: f32,
    #[serde(default)]
    pub dy: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
}

impl DragSample {
    pub fn began() -> Self {
        Self::moved(DragPhase::Began, 0.0, 0.0)
    }

    pub fn changed(dx: f32, dy: f32) -> Self {
        Self::moved(DragPhase::Changed, dx, dy)
    }

    pub fn ended(vx: f32, vy: f32) -> Self {
        Self {
            phase: DragPhase::Ended,
            dx: 0.0,
            dy: 0.0,
            vx,
            vy,
        }
    }

    fn moved(phase: DragPhase, dx: f32, dy: f32) -> Self {
        Self {
            phase,
            dx,
            dy,
            vx: 0.0,
            vy: 0.0,
        }
    }
}

/// Pointer input on the top panel
#[derive(Debug, Clone)]
pub enum GestureMsg {
    /// Pan gesture sample
    Drag(DragSample),
    /// Tap without drag: always restores the expanded layout
    Tap,
}

/// Session lifecycle and collaborator callbacks
#[derive(Debug, Clone)]
pub enum SessionMsg {
    /// Present a panel pair, optionally growing out of `initial_frame`
    Present {
        panels: PanelPair,
        initial_frame: Option<Rect>,
    },
    /// Tear the session down and release the panels
    Remove,
    /// Device rotated; `view` is the new host size
    Rotate {
        orientation: Orientation,
        view: ViewSize,
    },
    /// The animation driver finished an animation
    AnimationFinished(AnimationId),
    /// Enable or disable drag and tap handling
    SetInteractionEnabled(bool),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Gesture(GestureMsg),
    Session(SessionMsg),
}

impl From<DragSample> for Msg {
    fn from(sample: DragSample) -> Self {
        Msg::Gesture(GestureMsg::Drag(sample))
    }
}
