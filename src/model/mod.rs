//! Session model - the complete state of one PiP interaction session
//!
//! The model owns a single `(state, geometry, accumulated offset)` tuple plus
//! the pending animated transition. State only changes through the methods
//! below, and every committed change yields an orientation-lock command.

pub mod geometry;
pub mod state;

pub use geometry::{PanelGeometry, Rect, SideHint, ViewSize};
pub use state::{
    AccumulatedOffset, AnimationId, InteractionState, Orientation, OrientationLock,
    PendingTransition, TransitionCommit,
};

use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::PipConfig;

/// Opaque handle to panel content owned by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelHandle(pub String);

impl PanelHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// The two stacked panels of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPair {
    pub top: PanelHandle,
    pub bottom: PanelHandle,
}

impl PanelPair {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: PanelHandle::new(top),
            bottom: PanelHandle::new(bottom),
        }
    }
}

/// The complete session model
#[derive(Debug, Clone)]
pub struct PipModel {
    config: PipConfig,
    view: ViewSize,
    state: InteractionState,
    geometry: Option<PanelGeometry>,
    offset: AccumulatedOffset,
    pending: Option<PendingTransition>,
    panels: Option<PanelPair>,
    /// X origin remembered the first time the panel docks
    docked_x: Option<f32>,
    interaction_enabled: bool,
    next_animation_id: u64,
}

impl PipModel {
    /// Create an undisplayed session. The config is clamped here and fixed
    /// for the lifetime of the session.
    pub fn new(config: PipConfig, view: ViewSize) -> Self {
        Self {
            config: config.sanitized(),
            view,
            state: InteractionState::Undisplayed,
            geometry: None,
            offset: AccumulatedOffset::default(),
            pending: None,
            panels: None,
            docked_x: None,
            interaction_enabled: true,
            next_animation_id: 1,
        }
    }

    // === Accessors ===

    pub fn config(&self) -> &PipConfig {
        &self.config
    }

    pub fn view(&self) -> ViewSize {
        self.view
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Live geometry; `None` while undisplayed
    pub fn geometry(&self) -> Option<&PanelGeometry> {
        self.geometry.as_ref()
    }

    pub fn offset(&self) -> AccumulatedOffset {
        self.offset
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn panels(&self) -> Option<&PanelPair> {
        self.panels.as_ref()
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn orientation_lock(&self) -> OrientationLock {
        self.state.orientation_lock()
    }

    /// Whether gesture input is currently processed
    pub fn accepts_gestures(&self) -> bool {
        self.interaction_enabled && self.pending.is_none() && self.state.accepts_drag()
    }

    // === Layouts ===

    pub fn expanded_geometry(&self) -> PanelGeometry {
        PanelGeometry::expanded(self.view, &self.config)
    }

    pub fn docked_geometry(&self) -> PanelGeometry {
        PanelGeometry::docked(self.view, &self.config, self.docked_x)
    }

    // === Mutation (crate-internal, driven by update) ===

    /// Commit a new logical state, returning the orientation-lock request
    pub(crate) fn commit_state(&mut self, next: InteractionState) -> Option<Cmd> {
        if self.state == next {
            return None;
        }
        tracing::debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
        Some(Cmd::LockOrientation {
            lock: next.orientation_lock(),
        })
    }

    pub(crate) fn set_geometry(&mut self, geometry: PanelGeometry) {
        self.geometry = Some(geometry);
    }

    pub(crate) fn offset_mut(&mut self) -> &mut AccumulatedOffset {
        &mut self.offset
    }

    /// A new host size invalidates the remembered dock position
    pub(crate) fn set_view(&mut self, view: ViewSize) {
        self.view = view;
        self.docked_x = None;
    }

    pub(crate) fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    pub(crate) fn attach_panels(&mut self, panels: PanelPair) {
        self.panels = Some(panels);
    }

    /// Remember the dock x origin the first time the panel docks
    pub(crate) fn remember_docked_x(&mut self, x: f32) {
        if self.docked_x.is_none() {
            self.docked_x = Some(x);
        }
    }

    /// Hand a target to the animation driver. The geometry jumps to the
    /// target immediately; with a `commit`, the logical state waits for the
    /// matching completion.
    pub(crate) fn animate_to(
        &mut self,
        from: Option<PanelGeometry>,
        to: PanelGeometry,
        commit: Option<TransitionCommit>,
    ) -> Cmd {
        let id = AnimationId(self.next_animation_id);
        self.next_animation_id += 1;
        self.geometry = Some(to);
        if let Some(commit) = commit {
            self.pending = Some(PendingTransition { id, commit });
        }
        Cmd::Animate {
            id,
            from,
            to,
            duration_secs: self.config.animation_duration,
        }
    }

    /// Take the pending transition if `id` matches it
    pub(crate) fn take_pending(&mut self, id: AnimationId) -> Option<PendingTransition> {
        match self.pending {
            Some(pending) if pending.id == id => self.pending.take(),
            _ => None,
        }
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Drop everything owned by the session and return the released panels.
    /// The next session starts with interaction enabled.
    pub(crate) fn release(&mut self) -> Option<PanelPair> {
        self.geometry = None;
        self.pending = None;
        self.offset.reset();
        self.docked_x = None;
        self.interaction_enabled = true;
        self.panels.take()
    }
}
