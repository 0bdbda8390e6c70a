//! Pure interaction logic - no state, no side effects
//!
//! - `progress` - position to progress, scale and alpha factors
//! - `classifier` - horizontal vs vertical gating of a drag
//! - `snap` - release resolution (flick and position thresholds)
//! - `clamp` - live top/bottom travel limits

pub mod clamp;
pub mod classifier;
pub mod progress;
pub mod snap;

pub use clamp::Boundary;
pub use classifier::{classify, DragAxis};
pub use progress::{alpha_factor, progress, scale_factor, Margins};
pub use snap::{decide, Release, SnapDecision};
