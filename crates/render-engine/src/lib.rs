//! YTP+ Render Engine
//!
//! Turns a [`RenderJob`](ytp_project_model::job::RenderJob) into external
//! tool invocations and runs them.
//!
//! # Pipeline
//!
//! ```text
//! effect map ── compile ── filter_complex ──┐
//!                                           ├── ffmpeg command ── runner ── output.mp4
//! sources ───── concat.txt (2+ inputs) ─────┘
//!
//! job ── generate_plan ── ytp_plan.json
//! ```
//!
//! Everything blocks until the external tool exits, except [`preview`],
//! which starts the previewer and returns.

pub mod command;
pub mod export;
pub mod generator;
pub mod manifest;
pub mod preview;
pub mod runner;

pub use command::{
    build_concat_command, build_single_command, concat_command_for_manifest, filter_complex,
    ToolInvocation,
};
pub use export::{export_plan, plan_json};
pub use generator::{preview, Generator, DEFAULT_PREVIEW_SECONDS};
pub use runner::{run, CommandRunner, ProcessOutput, SystemRunner};
