//! Snap decision engine - resolves a released gesture to a rest state
//!
//! Velocity is checked first: a flick past `flick_velocity` decides the
//! outcome regardless of where the panel was released. Only slower releases
//! fall back to position thresholds.

use serde::Serialize;

use crate::config::PipConfig;
use crate::model::geometry::{Rect, SideHint, ViewSize};
use crate::model::state::InteractionState;

/// Left dismiss when the panel's x origin is below this fraction of the width
pub const DISMISS_LEFT_FRACTION: f32 = 1.0 / 6.0;
/// Right dismiss when the panel's x origin is at or beyond this fraction
pub const DISMISS_RIGHT_FRACTION: f32 = 3.0 / 4.0;

/// Outcome of a released gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapDecision {
    RestoreToTop,
    DockToBottom,
    DismissLeft,
    DismissRight,
    NoOp,
}

impl SnapDecision {
    pub fn side(&self) -> SideHint {
        match self {
            SnapDecision::DismissLeft => SideHint::Left,
            SnapDecision::DismissRight => SideHint::Right,
            _ => SideHint::None,
        }
    }
}

/// Everything the engine looks at when a gesture ends
#[derive(Debug, Clone, Copy)]
pub struct Release<'a> {
    pub state: InteractionState,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub top_frame: Rect,
    pub view: ViewSize,
    pub config: &'a PipConfig,
}

/// Resolve a released gesture.
///
/// A dismiss drag resolves horizontally; vertical drags (including ones the
/// bottom clamp already parked at the dock) resolve vertically; a panel that
/// is already expanded stays put.
pub fn decide(release: &Release<'_>) -> SnapDecision {
    match release.state {
        InteractionState::Removing => decide_horizontal(release),
        InteractionState::Scaling | InteractionState::Bottom => decide_vertical(release),
        _ => SnapDecision::NoOp,
    }
}

/// Flick dismiss, else position dismiss, else snap back to the dock
pub fn decide_horizontal(release: &Release<'_>) -> SnapDecision {
    let flick = release.config.flick_velocity;
    if release.velocity_x < -flick {
        return SnapDecision::DismissLeft;
    }
    if release.velocity_x > flick {
        return SnapDecision::DismissRight;
    }

    let x = release.top_frame.x;
    let width = release.view.width;
    if x < width * DISMISS_LEFT_FRACTION {
        SnapDecision::DismissLeft
    } else if x >= width * DISMISS_RIGHT_FRACTION {
        SnapDecision::DismissRight
    } else {
        SnapDecision::DockToBottom
    }
}

/// Flick up/down, else compare the panel center against the travel midpoint
pub fn decide_vertical(release: &Release<'_>) -> SnapDecision {
    let flick = release.config.flick_velocity;
    if release.velocity_y < -flick {
        return SnapDecision::RestoreToTop;
    }
    if release.velocity_y > flick {
        return SnapDecision::DockToBottom;
    }

    let midpoint = (release.view.height - release.config.bottom_margin) / 2.0;
    if release.top_frame.center_y() <= midpoint {
        SnapDecision::RestoreToTop
    } else {
        SnapDecision::DockToBottom
    }
}
