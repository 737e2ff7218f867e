//! # Core Module
//!
//! Stateless building blocks shared by every SASA computation.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Frames, trajectories, per-atom radii and selection, grid
//!   geometry and the per-frame output buffer
//! - **Sampling** ([`sphere`]) - Quasi-uniform unit-sphere directions used for Monte-Carlo
//!   surface sampling
//! - **File I/O** ([`io`]) - Reading multi-frame coordinate files
//!
//! Nothing in this module performs occlusion math; that lives in [`crate::engine`].

pub mod io;
pub mod models;
pub mod sphere;
