//! YTP+ Processing Core
//!
//! Turns a render job into the data the render engine acts on:
//! - **Effects:** Compile effect toggles into filter-graph fragments
//! - **Plan:** Snapshot a job (sources, settings, effects, filters) for review
//!
//! This crate is pure computation: no I/O and no external tools.
//! All inputs are data; all outputs are data.

pub mod effects;
pub mod plan;

pub use effects::{compile, EffectResult};
pub use plan::{generate_plan, PlanDocument};
