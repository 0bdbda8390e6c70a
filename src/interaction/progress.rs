//! Geometry calculator - maps the top panel's vertical position to progress
//!
//! Progress is 1.0 with the panel fully expanded and falls linearly as the
//! panel travels towards its docked origin. Scale and alpha share the same
//! normalization but floor at different constants, so the bottom panel fades
//! in step with the top panel shrinking.

use crate::config::PipConfig;
use crate::model::geometry::{Rect, ViewSize};

/// Horizontal anchor of the top panel's scale transform (fraction of width)
pub const SCALE_ANCHOR_X: f32 = 0.94;

/// Vertical travel margins of the top panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
}

impl From<&PipConfig> for Margins {
    fn from(config: &PipConfig) -> Self {
        Self {
            top: config.top_margin,
            bottom: config.bottom_margin,
        }
    }
}

/// Normalized position of the panel between expanded (1.0) and docked,
/// never below `floor`.
///
/// A non-positive travel range means the panel cannot move, which reads as
/// fully expanded.
pub fn progress(
    panel_top_y: f32,
    margins: Margins,
    view_height: f32,
    panel_height: f32,
    floor: f32,
) -> f32 {
    let travel = view_height - panel_height - margins.bottom;
    if travel <= 0.0 {
        return 1.0_f32.max(floor);
    }
    let normalized = 1.0 - (panel_top_y - margins.top) / travel;
    normalized.max(floor)
}

/// Scale of the top panel for the given frame, floored at `final_scale`
pub fn scale_factor(frame: &Rect, view: ViewSize, config: &PipConfig) -> f32 {
    progress(
        frame.y,
        config.into(),
        view.height,
        frame.height,
        config.final_scale,
    )
}

/// Alpha of the bottom panel for the given frame, floored at `final_alpha`
pub fn alpha_factor(frame: &Rect, view: ViewSize, config: &PipConfig) -> f32 {
    progress(
        frame.y,
        config.into(),
        view.height,
        frame.height,
        config.final_alpha,
    )
}

/// X origin of a panel of unscaled `panel_width` scaled around the anchor
#[inline]
pub fn anchored_x(view_width: f32, panel_width: f32, scale: f32) -> f32 {
    SCALE_ANCHOR_X * (view_width - panel_width * scale)
}
