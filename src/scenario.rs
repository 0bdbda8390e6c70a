//! Scenario replay - drive a session from a YAML gesture script
//!
//! A scenario names a host size, an optional config and a list of steps.
//! Each step becomes one or more messages; the commands they produce are
//! recorded so the run can be inspected or asserted on.
//!
//! ```yaml
//! view: { width: 375, height: 667 }
//! steps:
//!   - action: present
//!     top: video
//!     bottom: comments
//!   - action: pan
//!     dy: 400
//!     vy: 50
//!   - action: expect
//!     state: bottom
//! ```

use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::PipConfig;
use crate::messages::{DragPhase, DragSample, GestureMsg, Msg, SessionMsg};
use crate::model::{
    AnimationId, InteractionState, Orientation, PanelPair, PipModel, Rect, ViewSize,
};
use crate::update::update;

/// A scripted session
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub view: ViewSize,
    /// Overrides the configuration the runner was created with
    #[serde(default)]
    pub config: Option<PipConfig>,
    /// Answer every animation with its completion right away
    #[serde(default = "default_auto_complete")]
    pub auto_complete_animations: bool,
    pub steps: Vec<Step>,
}

fn default_auto_complete() -> bool {
    true
}

fn default_pan_samples() -> u32 {
    4
}

/// One scripted input
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Present {
        top: String,
        bottom: String,
        #[serde(default)]
        from: Option<Rect>,
    },
    /// A single raw drag sample
    Drag {
        phase: DragPhase,
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
        #[serde(default)]
        vx: f32,
        #[serde(default)]
        vy: f32,
    },
    /// A whole gesture: began, `samples` equal changed steps, ended
    Pan {
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
        #[serde(default)]
        vx: f32,
        #[serde(default)]
        vy: f32,
        #[serde(default = "default_pan_samples")]
        samples: u32,
    },
    Tap,
    Rotate {
        orientation: Orientation,
        width: f32,
        height: f32,
    },
    /// Complete the most recent animation
    FinishAnimation,
    Remove,
    SetInteractionEnabled {
        enabled: bool,
    },
    /// Fail the run unless the session is in `state`
    Expect {
        state: InteractionState,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Present { .. } => "present",
            Step::Drag { .. } => "drag",
            Step::Pan { .. } => "pan",
            Step::Tap => "tap",
            Step::Rotate { .. } => "rotate",
            Step::FinishAnimation => "finish_animation",
            Step::Remove => "remove",
            Step::SetInteractionEnabled { .. } => "set_interaction_enabled",
            Step::Expect { .. } => "expect",
        }
    }

    /// Messages this step sends, in order
    fn messages(&self) -> Vec<Msg> {
        match self {
            Step::Present { top, bottom, from } => vec![Msg::Session(SessionMsg::Present {
                panels: PanelPair::new(top.clone(), bottom.clone()),
                initial_frame: *from,
            })],
            Step::Drag {
                phase,
                dx,
                dy,
                vx,
                vy,
            } => vec![DragSample {
                phase: *phase,
                dx: *dx,
                dy: *dy,
                vx: *vx,
                vy: *vy,
            }
            .into()],
            Step::Pan {
                dx,
                dy,
                vx,
                vy,
                samples,
            } => {
                let n = (*samples).max(1);
                let mut msgs = Vec::with_capacity(n as usize + 2);
                msgs.push(DragSample::began().into());
                for _ in 0..n {
                    msgs.push(DragSample::changed(dx / n as f32, dy / n as f32).into());
                }
                msgs.push(DragSample::ended(*vx, *vy).into());
                msgs
            }
            Step::Tap => vec![Msg::Gesture(GestureMsg::Tap)],
            Step::Rotate {
                orientation,
                width,
                height,
            } => vec![Msg::Session(SessionMsg::Rotate {
                orientation: *orientation,
                view: ViewSize::new(*width, *height),
            })],
            Step::Remove => vec![Msg::Session(SessionMsg::Remove)],
            Step::SetInteractionEnabled { enabled } => {
                vec![Msg::Session(SessionMsg::SetInteractionEnabled(*enabled))]
            }
            Step::FinishAnimation | Step::Expect { .. } => vec![],
        }
    }
}

/// Errors from parsing or running a scenario
#[derive(Debug)]
pub enum ScenarioError {
    Parse(String),
    ExpectationFailed {
        step: usize,
        expected: InteractionState,
        actual: InteractionState,
    },
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Parse(e) => write!(f, "Parse error: {}", e),
            ScenarioError::ExpectationFailed {
                step,
                expected,
                actual,
            } => write!(
                f,
                "Step {}: expected state {}, found {}",
                step, expected, actual
            ),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl Scenario {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScenarioError> {
        serde_yaml::from_str(yaml).map_err(|e| ScenarioError::Parse(e.to_string()))
    }
}

/// Commands produced by one step
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub action: &'static str,
    pub state: InteractionState,
    pub commands: Vec<Cmd>,
}

/// Drives a model through scenario steps
#[derive(Debug)]
pub struct ScenarioRunner {
    model: PipModel,
    auto_complete: bool,
    last_animation: Option<AnimationId>,
}

impl ScenarioRunner {
    pub fn new(scenario: &Scenario, base_config: &PipConfig) -> Self {
        let config = scenario.config.clone().unwrap_or_else(|| base_config.clone());
        Self {
            model: PipModel::new(config, scenario.view),
            auto_complete: scenario.auto_complete_animations,
            last_animation: None,
        }
    }

    pub fn model(&self) -> &PipModel {
        &self.model
    }

    /// Run one step and collect every command it produced
    pub fn step(&mut self, index: usize, step: &Step) -> Result<StepRecord, ScenarioError> {
        let mut commands = Vec::new();

        match step {
            Step::Expect { state } => {
                if self.model.state() != *state {
                    return Err(ScenarioError::ExpectationFailed {
                        step: index,
                        expected: *state,
                        actual: self.model.state(),
                    });
                }
            }
            Step::FinishAnimation => {
                if let Some(id) = self.last_animation.take() {
                    self.dispatch(Msg::Session(SessionMsg::AnimationFinished(id)), &mut commands);
                }
            }
            _ => {
                for msg in step.messages() {
                    self.dispatch(msg, &mut commands);
                }
            }
        }

        Ok(StepRecord {
            step: index,
            action: step.name(),
            state: self.model.state(),
            commands,
        })
    }

    fn dispatch(&mut self, msg: Msg, out: &mut Vec<Cmd>) {
        let produced = Cmd::from(update(&mut self.model, msg)).flatten();
        let animations: Vec<AnimationId> =
            produced.iter().filter_map(Cmd::animation_id).collect();
        out.extend(produced);

        for id in animations {
            if self.auto_complete {
                self.dispatch(Msg::Session(SessionMsg::AnimationFinished(id)), out);
            } else {
                self.last_animation = Some(id);
            }
        }
    }
}

/// Run a whole scenario, stopping at the first failed expectation
pub fn run(scenario: &Scenario, base_config: &PipConfig) -> Result<Vec<StepRecord>, ScenarioError> {
    let mut runner = ScenarioRunner::new(scenario, base_config);
    scenario
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| runner.step(index, step))
        .collect()
}
