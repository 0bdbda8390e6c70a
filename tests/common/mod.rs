//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use pip_drag::commands::Cmd;
use pip_drag::config::PipConfig;
use pip_drag::messages::{DragSample, GestureMsg, Msg, SessionMsg};
use pip_drag::model::{AnimationId, InteractionState, PanelPair, PipModel, ViewSize};
use pip_drag::update::update;

/// Portrait phone-sized host view
pub fn phone() -> ViewSize {
    ViewSize::new(320.0, 640.0)
}

/// Config with round numbers: a 320x180 top panel that docks at half size
pub fn test_config() -> PipConfig {
    PipConfig {
        video_ratio: 16.0 / 9.0,
        drag_sensitivity: 1.0,
        top_margin: 20.0,
        bottom_margin: 10.0,
        final_scale: 0.5,
        final_alpha: 0.0,
        animation_duration: 0.3,
        flick_velocity: 2000.0,
    }
}

pub fn panels() -> PanelPair {
    PanelPair::new("video", "details")
}

/// Send one message and return the flattened commands
pub fn send(model: &mut PipModel, msg: impl Into<Msg>) -> Vec<Cmd> {
    Cmd::from(update(model, msg.into())).flatten()
}

pub fn drag(model: &mut PipModel, sample: DragSample) -> Vec<Cmd> {
    send(model, Msg::Gesture(GestureMsg::Drag(sample)))
}

pub fn tap(model: &mut PipModel) -> Vec<Cmd> {
    send(model, Msg::Gesture(GestureMsg::Tap))
}

pub fn session(model: &mut PipModel, msg: SessionMsg) -> Vec<Cmd> {
    send(model, Msg::Session(msg))
}

pub fn finish(model: &mut PipModel, id: AnimationId) -> Vec<Cmd> {
    session(model, SessionMsg::AnimationFinished(id))
}

/// Id of the only animation in a command list
pub fn animation_id(cmds: &[Cmd]) -> AnimationId {
    let ids: Vec<AnimationId> = cmds.iter().filter_map(Cmd::animation_id).collect();
    assert_eq!(ids.len(), 1, "expected exactly one animation in {:?}", cmds);
    ids[0]
}

/// Finish the pending transition, if any
pub fn settle(model: &mut PipModel) -> Vec<Cmd> {
    match model.pending() {
        Some(pending) => finish(model, pending.id),
        None => Vec::new(),
    }
}

/// Full gesture: began, one changed sample per delta, ended
pub fn pan(model: &mut PipModel, deltas: &[(f32, f32)], vx: f32, vy: f32) -> Vec<Cmd> {
    let mut cmds = drag(model, DragSample::began());
    for &(dx, dy) in deltas {
        cmds.extend(drag(model, DragSample::changed(dx, dy)));
    }
    cmds.extend(drag(model, DragSample::ended(vx, vy)));
    cmds
}

/// An expanded session in `top`
pub fn presented_model() -> PipModel {
    let mut model = PipModel::new(test_config(), phone());
    session(
        &mut model,
        SessionMsg::Present {
            panels: panels(),
            initial_frame: None,
        },
    );
    assert_eq!(model.state(), InteractionState::Top);
    model
}

/// A session docked in `bottom` by a slow drag down
pub fn docked_model() -> PipModel {
    let mut model = presented_model();
    pan(&mut model, &[(0.0, 100.0), (0.0, 100.0), (0.0, 100.0)], 0.0, 0.0);
    settle(&mut model);
    assert_eq!(model.state(), InteractionState::Bottom);
    model
}

/// Lock requests in a command list, in order
pub fn locks(cmds: &[Cmd]) -> Vec<pip_drag::model::OrientationLock> {
    cmds.iter()
        .filter_map(|c| match c {
            Cmd::LockOrientation { lock } => Some(*lock),
            _ => None,
        })
        .collect()
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
