//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod gesture;
mod session;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PipModel;

#[cfg(debug_assertions)]
use crate::messages::{GestureMsg, SessionMsg};
#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use gesture::{restore_expanded, update_gesture};
pub use session::update_session;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PipModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PipModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Session(m) => session::update_session(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut PipModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::DragPhase;

    // Drag-changed samples arrive at display rate
    let is_noisy = matches!(
        &msg,
        Msg::Gesture(GestureMsg::Drag(sample)) if sample.phase == DragPhase::Changed
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SessionSnapshot::from_model(model);

    let result = update_inner(model, msg);

    let after = SessionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        if is_noisy {
            tracing::trace!(target: "session", %diff, "state changed");
        } else {
            debug!(target: "session", %diff, "state changed");
        }
    }

    assert_invariants(model, &msg_name);

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Gesture(GestureMsg::Drag(sample)) => format!("Gesture::Drag({:?})", sample.phase),
        Msg::Gesture(GestureMsg::Tap) => "Gesture::Tap".to_string(),
        Msg::Session(SessionMsg::Present { .. }) => "Session::Present".to_string(),
        Msg::Session(SessionMsg::Remove) => "Session::Remove".to_string(),
        Msg::Session(SessionMsg::Rotate { orientation, .. }) => {
            format!("Session::Rotate({:?})", orientation)
        }
        Msg::Session(SessionMsg::AnimationFinished(id)) => {
            format!("Session::AnimationFinished({})", id.0)
        }
        Msg::Session(SessionMsg::SetInteractionEnabled(enabled)) => {
            format!("Session::SetInteractionEnabled({})", enabled)
        }
    }
}

/// Model invariants checked after every message in debug builds
#[cfg(debug_assertions)]
fn assert_invariants(model: &PipModel, context: &str) {
    let displayed = model.state().is_displayed();
    debug_assert_eq!(
        model.geometry().is_some(),
        displayed,
        "[{}] geometry must be live exactly while displayed (state {})",
        context,
        model.state()
    );
    debug_assert_eq!(
        model.panels().is_some(),
        displayed,
        "[{}] panels must be owned exactly while displayed (state {})",
        context,
        model.state()
    );
    if !displayed {
        debug_assert!(
            model.pending().is_none() && model.offset().is_zero(),
            "[{}] undisplayed session must not carry gesture state",
            context
        );
    }
}
