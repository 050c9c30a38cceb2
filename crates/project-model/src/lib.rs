//! YTP+ Project Model
//!
//! Defines the core data contracts for YTP+ projects:
//! - **Effects:** The fixed effect catalog and per-effect configuration
//! - **Sources:** Local media grouped by kind, plus remote URLs
//! - **Settings / Tools:** Rendering parameters and external tool locations
//! - **Job / Project:** The per-action render job and the persisted project file
//!
//! Everything here is plain value data; nothing touches external tools.

pub mod effect;
pub mod job;
pub mod project;
pub mod settings;
pub mod sources;
pub mod tools;

pub use effect::*;
pub use job::*;
pub use project::*;
pub use settings::*;
pub use sources::*;
pub use tools::*;
