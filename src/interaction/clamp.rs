//! Boundary clamp - hard stops at the top and bottom of the travel range
//!
//! Applied live on every vertical drag sample. Crossing a limit replaces the
//! interpolated geometry with the exact rest geometry instead of letting the
//! panel rubber-band past it.

use crate::config::PipConfig;
use crate::model::geometry::{Rect, ViewSize};

/// Limit hit by the top panel's frame, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// At or above the top margin
    Top,
    /// Bottom edge below `view_height - bottom_margin`
    Bottom,
}

pub fn check(frame: &Rect, view: ViewSize, config: &PipConfig) -> Option<Boundary> {
    if frame.y <= config.top_margin {
        Some(Boundary::Top)
    } else if frame.max_y() > view.height - config.bottom_margin {
        Some(Boundary::Bottom)
    } else {
        None
    }
}
