//! # GridSASA Core Library
//!
//! Solvent-accessible surface area (SASA) for molecular-dynamics trajectories, resolved onto a
//! regular voxel grid instead of a flat per-atom array.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Plain data models (`Trajectory`, `AtomTable`, `GridGeometry`,
//!   `GridSeries`), the golden-section-spiral sphere point set, and trajectory I/O.
//!
//! - **[`engine`]: The Numerical Kernel.** Neighbor discovery, occlusion testing with a rotating
//!   neighbor cursor, grid rasterization, per-frame processing with reusable scratch memory,
//!   and the parallel frame scheduler.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a single call that
//!   turns a trajectory into one accessible-area density grid per frame.

pub mod core;
pub mod engine;
pub mod workflows;
