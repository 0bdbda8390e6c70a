//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that the host performs after an update:
//! layout, animation, orientation locking and panel lifecycle.

use serde::Serialize;

use crate::model::geometry::PanelGeometry;
use crate::model::state::{AnimationId, OrientationLock};
use crate::model::PanelPair;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Lay the panels out immediately, without animation
    ApplyGeometry { geometry: PanelGeometry },
    /// Animate towards `to`; the driver answers with
    /// `SessionMsg::AnimationFinished(id)` exactly once
    Animate {
        id: AnimationId,
        from: Option<PanelGeometry>,
        to: PanelGeometry,
        duration_secs: f32,
    },
    /// Fire-and-forget request to the orientation authority
    LockOrientation { lock: OrientationLock },
    /// Attach the panel contents to the host views
    AttachPanels { panels: PanelPair },
    /// Detach and release the panel contents
    DetachPanels { panels: PanelPair },
    /// Execute multiple commands
    Batch { cmds: Vec<Cmd> },
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch { cmds },
        }
    }

    /// Flatten nested batches into a list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Cmd>) {
        match self {
            Cmd::None => {}
            Cmd::Batch { cmds } => {
                for cmd in cmds {
                    cmd.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }

    /// The animation id this command waits on, if any
    pub fn animation_id(&self) -> Option<AnimationId> {
        match self {
            Cmd::Animate { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Convert Option<Cmd> with None to Cmd::None
    pub fn from_option(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
