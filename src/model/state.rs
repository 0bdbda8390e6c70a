//! Discrete interaction state, drag accumulation and pending transitions

use serde::{Deserialize, Serialize};

/// Discrete state of the panel pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    /// Top panel fully expanded
    Top,
    /// Top panel docked as a mini-player
    Bottom,
    /// Vertical resize drag in progress
    Scaling,
    /// Horizontal dismiss drag in progress
    Removing,
    /// No panels presented
    Undisplayed,
    /// Device in landscape; the top panel fills the screen
    Landscape,
}

impl InteractionState {
    /// Whether drag events are processed at all in this state
    pub fn accepts_drag(&self) -> bool {
        !matches!(
            self,
            InteractionState::Undisplayed | InteractionState::Landscape
        )
    }

    /// Whether a panel pair is on screen
    pub fn is_displayed(&self) -> bool {
        !matches!(self, InteractionState::Undisplayed)
    }

    /// Transient states only exist while a drag is active
    pub fn is_transient(&self) -> bool {
        matches!(self, InteractionState::Scaling | InteractionState::Removing)
    }

    /// Orientation lock requested while in this state
    pub fn orientation_lock(&self) -> OrientationLock {
        match self {
            InteractionState::Top => OrientationLock::All,
            _ => OrientationLock::Portrait,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Top => "top",
            InteractionState::Bottom => "bottom",
            InteractionState::Scaling => "scaling",
            InteractionState::Removing => "removing",
            InteractionState::Undisplayed => "undisplayed",
            InteractionState::Landscape => "landscape",
        }
    }
}

impl std::fmt::Display for InteractionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotation permission sent to the device orientation authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationLock {
    /// Rotation allowed
    All,
    /// Locked to portrait
    Portrait,
}

/// Device orientation reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Running sum of drag deltas since the gesture began
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccumulatedOffset {
    pub x: f32,
    pub y: f32,
}

impl AccumulatedOffset {
    pub fn add(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Identifies one animation handed to the animation driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

/// What happens when a pending animation completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCommit {
    /// Commit the given resting state
    Enter(InteractionState),
    /// Release the panels and become undisplayed
    Release,
}

impl TransitionCommit {
    pub fn target_state(&self) -> InteractionState {
        match self {
            TransitionCommit::Enter(state) => *state,
            TransitionCommit::Release => InteractionState::Undisplayed,
        }
    }
}

/// An animated transition waiting for the driver's completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub id: AnimationId,
    pub commit: TransitionCommit,
}
