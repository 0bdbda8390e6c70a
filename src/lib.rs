//! pip-drag - Elm-style picture-in-picture drag engine
//!
//! This crate provides the core types and logic for a two-panel
//! picture-in-picture interaction: a top media panel that is dragged down
//! into a small docked thumbnail, tapped back to full size, or flicked
//! sideways to dismiss. Pointer samples and lifecycle events go in as
//! messages; geometry, animation and orientation-lock requests come out as
//! commands for the host to carry out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod interaction;
pub mod messages;
pub mod model;
pub mod scenario;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PipConfig;
pub use messages::Msg;
pub use model::PipModel;
pub use update::update;
