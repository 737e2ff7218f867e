//! Provides input functionality for trajectory file formats.
//!
//! The numerical kernel never touches files; this module exists for callers (such as the
//! command-line front end) that need to turn a file on disk into a [`Trajectory`] plus the
//! per-atom metadata required to build radii and selection masks.
//!
//! [`Trajectory`]: crate::core::models::frame::Trajectory

pub mod traits;
pub mod xyz;
