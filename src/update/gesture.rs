//! Gesture handlers: drag tracking, release resolution and tap-to-restore
//!
//! Per drag sample: accumulate the offset, gate the direction, interpolate
//! scale/alpha, clamp to the travel limits, then commit the state. Release
//! hands the snap target to the animation driver and defers the commit.

use crate::commands::Cmd;
use crate::interaction::{self, clamp, Boundary, DragAxis, Release, SnapDecision};
use crate::messages::{DragPhase, DragSample, GestureMsg};
use crate::model::{InteractionState, PipModel, TransitionCommit};

/// Handle pointer input on the top panel
pub fn update_gesture(model: &mut PipModel, msg: GestureMsg) -> Option<Cmd> {
    if !model.accepts_gestures() {
        tracing::trace!(
            state = %model.state(),
            pending = model.pending().is_some(),
            enabled = model.is_interaction_enabled(),
            "gesture ignored"
        );
        return None;
    }

    match msg {
        GestureMsg::Drag(sample) => match sample.phase {
            DragPhase::Began => {
                model.offset_mut().add(sample.dx, sample.dy);
                None
            }
            DragPhase::Changed => drag_changed(model, sample),
            DragPhase::Ended => drag_ended(model, sample),
        },
        GestureMsg::Tap => restore_expanded(model),
    }
}

fn drag_changed(model: &mut PipModel, sample: DragSample) -> Option<Cmd> {
    model.offset_mut().add(sample.dx, sample.dy);

    match interaction::classify(model.offset(), model.state()) {
        Some(DragAxis::Horizontal) => drag_horizontal(model, sample.dx),
        Some(DragAxis::Vertical) => drag_vertical(model, sample.dy),
        None => None,
    }
}

/// Slide the top panel sideways; the bottom panel stays where it is
fn drag_horizontal(model: &mut PipModel, dx: f32) -> Option<Cmd> {
    let mut geometry = *model.geometry()?;
    geometry.top.x += dx * model.config().drag_sensitivity;
    model.set_geometry(geometry);

    let lock = model.commit_state(InteractionState::Removing);
    Some(Cmd::batch(vec![lock.into(), Cmd::ApplyGeometry { geometry }]))
}

/// Resize towards the dock. Factors come from the frame before this
/// sample's translation; both panels move by the same scaled delta.
fn drag_vertical(model: &mut PipModel, dy: f32) -> Option<Cmd> {
    let view = model.view();
    let config = model.config().clone();
    let mut geometry = *model.geometry()?;

    let scale = interaction::scale_factor(&geometry.top, view, &config);
    let alpha = interaction::alpha_factor(&geometry.top, view, &config);
    let dy = dy * config.drag_sensitivity;

    geometry.rescale_top(view, &config, scale);
    geometry.alpha = alpha;
    geometry.top.y += dy;
    geometry.bottom.y += dy;

    let (geometry, next) = match clamp::check(&geometry.top, view, &config) {
        Some(Boundary::Top) => (model.expanded_geometry(), InteractionState::Top),
        Some(Boundary::Bottom) => {
            let docked = model.docked_geometry();
            model.remember_docked_x(docked.top.x);
            (docked, InteractionState::Bottom)
        }
        None => (geometry, InteractionState::Scaling),
    };

    model.set_geometry(geometry);
    let lock = model.commit_state(next);
    Some(Cmd::batch(vec![lock.into(), Cmd::ApplyGeometry { geometry }]))
}

fn drag_ended(model: &mut PipModel, sample: DragSample) -> Option<Cmd> {
    model.offset_mut().reset();

    let geometry = *model.geometry()?;
    let decision = interaction::decide(&Release {
        state: model.state(),
        velocity_x: sample.vx,
        velocity_y: sample.vy,
        top_frame: geometry.top,
        view: model.view(),
        config: model.config(),
    });
    tracing::debug!(?decision, state = %model.state(), vx = sample.vx, vy = sample.vy, "gesture released");

    apply_snap(model, decision)
}

/// Start the animated transition for a snap decision
pub(crate) fn apply_snap(model: &mut PipModel, decision: SnapDecision) -> Option<Cmd> {
    let current = *model.geometry()?;

    let (target, commit) = match decision {
        SnapDecision::NoOp => return None,
        SnapDecision::RestoreToTop => (
            model.expanded_geometry(),
            TransitionCommit::Enter(InteractionState::Top),
        ),
        SnapDecision::DockToBottom => {
            let docked = model.docked_geometry();
            model.remember_docked_x(docked.top.x);
            (docked, TransitionCommit::Enter(InteractionState::Bottom))
        }
        SnapDecision::DismissLeft | SnapDecision::DismissRight => (
            current.dismissed(model.view(), decision.side()),
            TransitionCommit::Release,
        ),
    };

    Some(model.animate_to(Some(current), target, Some(commit)))
}

/// Restore the expanded layout unconditionally and commit `top` at once.
///
/// Idempotent: from an already expanded `top` it produces no commands.
/// Supersedes any pending transition.
pub fn restore_expanded(model: &mut PipModel) -> Option<Cmd> {
    if !model.state().accepts_drag() {
        return None;
    }

    let target = model.expanded_geometry();
    let current = model.geometry().copied();
    if model.state() == InteractionState::Top
        && model.pending().is_none()
        && current == Some(target)
    {
        return None;
    }

    model.clear_pending();
    model.offset_mut().reset();
    let animate = model.animate_to(current, target, None);
    let lock = model.commit_state(InteractionState::Top);
    Some(Cmd::batch(vec![lock.into(), animate]))
}
