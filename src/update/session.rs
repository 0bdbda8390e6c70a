//! Session lifecycle: present, remove, rotation, animation completion

use crate::commands::Cmd;
use crate::interaction;
use crate::messages::SessionMsg;
use crate::model::geometry::top_panel_size;
use crate::model::{
    AnimationId, InteractionState, Orientation, PanelGeometry, PanelPair, PipModel, Rect,
    TransitionCommit, ViewSize,
};

use super::gesture::restore_expanded;

/// Handle session lifecycle messages
pub fn update_session(model: &mut PipModel, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::Present {
            panels,
            initial_frame,
        } => present(model, panels, initial_frame),
        SessionMsg::Remove => remove(model),
        SessionMsg::Rotate { orientation, view } => rotate(model, orientation, view),
        SessionMsg::AnimationFinished(id) => animation_finished(model, id),
        SessionMsg::SetInteractionEnabled(enabled) => {
            if !enabled {
                model.offset_mut().reset();
            }
            model.set_interaction_enabled(enabled);
            None
        }
    }
}

/// Present a panel pair. An undisplayed session attaches the panels and
/// grows the top panel out of `initial_frame`; a displayed one keeps its
/// panels and returns to the expanded layout.
fn present(model: &mut PipModel, panels: PanelPair, initial_frame: Option<Rect>) -> Option<Cmd> {
    match model.state() {
        InteractionState::Undisplayed => {}
        InteractionState::Landscape => {
            tracing::debug!("present ignored in landscape");
            return None;
        }
        _ => {
            if model.panels() != Some(&panels) {
                tracing::debug!("session already displayed, keeping current panels");
            }
            return restore_expanded(model);
        }
    }

    let from = initial_frame.map(|frame| entrance_geometry(model, frame));
    let target = model.expanded_geometry();

    model.offset_mut().reset();
    model.attach_panels(panels.clone());
    let animate = model.animate_to(from, target, None);
    let lock = model.commit_state(InteractionState::Top);

    tracing::info!(top = %panels.top.0, bottom = %panels.bottom.0, "session presented");
    Some(Cmd::batch(vec![Cmd::AttachPanels { panels }, lock.into(), animate]))
}

/// Starting geometry of the entrance animation: the top panel sits at the
/// originating frame, scaled by the progress that position represents, and
/// the bottom panel waits just below the screen.
fn entrance_geometry(model: &PipModel, frame: Rect) -> PanelGeometry {
    let view = model.view();
    let config = model.config();
    let (width, height) = top_panel_size(view, config);
    let scale = interaction::scale_factor(&frame, view, config);
    let expanded = model.expanded_geometry();

    PanelGeometry {
        top: Rect::new(frame.x, frame.y, width * scale, height * scale),
        scale,
        bottom: Rect {
            y: view.height,
            ..expanded.bottom
        },
        alpha: 1.0,
    }
}

/// Explicit removal; the only transition that releases the panels
fn remove(model: &mut PipModel) -> Option<Cmd> {
    if !model.state().is_displayed() {
        return None;
    }
    release_session(model)
}

fn release_session(model: &mut PipModel) -> Option<Cmd> {
    let panels = model.release();
    let lock = model.commit_state(InteractionState::Undisplayed);
    tracing::info!("session removed");

    let detach = panels.map(|panels| Cmd::DetachPanels { panels });
    Some(Cmd::batch(vec![detach.into(), lock.into()]))
}

/// Landscape fills the screen and suspends gestures; portrait always comes
/// back expanded at the new size.
fn rotate(model: &mut PipModel, orientation: Orientation, view: ViewSize) -> Option<Cmd> {
    if !model.state().is_displayed() {
        model.set_view(view);
        return None;
    }

    if let Some(pending) = model.pending() {
        if pending.commit == TransitionCommit::Release {
            model.set_view(view);
            tracing::debug!("rotation ignored while dismissing, view size kept");
            return None;
        }
        tracing::debug!(id = pending.id.0, "rotation supersedes pending transition");
        model.clear_pending();
    }

    model.set_view(view);
    model.offset_mut().reset();

    let (geometry, next, enabled) = match orientation {
        Orientation::Landscape => (
            PanelGeometry::landscape(view, model.config()),
            InteractionState::Landscape,
            false,
        ),
        Orientation::Portrait => (model.expanded_geometry(), InteractionState::Top, true),
    };

    model.set_interaction_enabled(enabled);
    model.set_geometry(geometry);
    let lock = model.commit_state(next);
    Some(Cmd::batch(vec![lock.into(), Cmd::ApplyGeometry { geometry }]))
}

/// Commit the deferred state of a finished animation. Completions that do
/// not match the pending transition are stale and ignored.
fn animation_finished(model: &mut PipModel, id: AnimationId) -> Option<Cmd> {
    let Some(pending) = model.take_pending(id) else {
        tracing::trace!(id = id.0, "stale animation completion ignored");
        return None;
    };

    match pending.commit {
        TransitionCommit::Enter(state) => model.commit_state(state),
        TransitionCommit::Release => release_session(model),
    }
}
