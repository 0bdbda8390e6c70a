//! Panel geometry - frames, scale and alpha for the two stacked panels
//!
//! All coordinates are in host view points with the origin at the top-left.

use serde::{Deserialize, Serialize};

use crate::config::PipConfig;
use crate::interaction::progress::anchored_x;

/// Width/height of the host view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: f32,
    pub height: f32,
}

impl ViewSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Side a dismissed panel leaves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideHint {
    Left,
    Right,
    None,
}

/// Complete visual state of the panel pair
///
/// `top` is the visible (already scaled) frame of the top panel, so
/// `top.width == base_width * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub top: Rect,
    pub scale: f32,
    pub bottom: Rect,
    pub alpha: f32,
}

/// Unscaled size of the top panel: full view width at the configured ratio
pub fn top_panel_size(view: ViewSize, config: &PipConfig) -> (f32, f32) {
    (view.width, view.width / config.video_ratio)
}

impl PanelGeometry {
    /// Fully expanded layout: top panel at full size below the top margin,
    /// bottom panel filling the remaining height and fully opaque.
    pub fn expanded(view: ViewSize, config: &PipConfig) -> Self {
        let (width, height) = top_panel_size(view, config);
        Self {
            top: Rect::new(0.0, config.top_margin, width, height),
            scale: 1.0,
            bottom: Rect::new(
                0.0,
                config.top_margin + height,
                view.width,
                view.height - height,
            ),
            alpha: 1.0,
        }
    }

    /// Docked layout: top panel shrunk to `final_scale` and resting
    /// `bottom_margin` above the bottom edge.
    ///
    /// `docked_x` overrides the anchored x origin (the remembered dock
    /// position); the bottom panel is shifted by the same travel as the top.
    pub fn docked(view: ViewSize, config: &PipConfig, docked_x: Option<f32>) -> Self {
        let expanded = Self::expanded(view, config);
        let (width, height) = top_panel_size(view, config);
        let scale = config.final_scale;
        let y = view.height - height * scale - config.bottom_margin;
        let x = docked_x.unwrap_or_else(|| anchored_x(view.width, width, scale));
        let travel = y - config.top_margin;

        Self {
            top: Rect::new(x, y, width * scale, height * scale),
            scale,
            bottom: Rect {
                y: expanded.bottom.y + travel,
                ..expanded.bottom
            },
            alpha: config.final_alpha,
        }
    }

    /// Full-screen layout used while the device is in landscape
    pub fn landscape(view: ViewSize, config: &PipConfig) -> Self {
        let portrait = Self::expanded(view, config);
        Self {
            top: Rect::new(0.0, 0.0, view.width, view.height),
            scale: 1.0,
            bottom: portrait.bottom,
            alpha: 0.0,
        }
    }

    /// The same layout with the top panel pushed off-screen to one side
    pub fn dismissed(&self, view: ViewSize, side: SideHint) -> Self {
        let mut out = *self;
        match side {
            SideHint::Left => out.top.x = -self.top.width,
            SideHint::Right => out.top.x = view.width,
            SideHint::None => {}
        }
        out
    }

    /// Apply a new scale while keeping the top edge and horizontal anchor
    pub fn rescale_top(&mut self, view: ViewSize, config: &PipConfig, scale: f32) {
        let (width, height) = top_panel_size(view, config);
        self.scale = scale;
        self.top.width = width * scale;
        self.top.height = height * scale;
        self.top.x = anchored_x(view.width, width, scale);
    }
}
