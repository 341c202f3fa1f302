//! Core pipeline for stackbrew manifest generation
//!
//! - **version**: version parsing and the total order used everywhere
//! - **distro**: base distribution facts from Dockerfile FROM lines
//! - **release**: data carried between pipeline stages
//! - **select**: the three-stage version selection pipeline
//! - **detect**: per-revision distribution lookup
//! - **library**: tag derivation and "latest" anointment
//! - **manifest**: rendering and update-in-place merging
//! - **vcs**: the source-control collaborator boundary
//! - **error**: error types with contextual help messages

pub mod detect;
pub mod distro;
pub mod error;
pub mod library;
pub mod manifest;
pub mod release;
pub mod select;
pub mod vcs;
pub mod version;
