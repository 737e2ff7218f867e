//! # Engine Module
//!
//! The numerical kernel of GridSASA: everything between "a trajectory and per-atom radii" and
//! "one accessible-area grid per frame".
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Sphere-point count, grid geometry and worker count
//! - **Kernel Tasks** ([`tasks`]) - Neighbor discovery, occlusion testing, rasterization and
//!   the per-frame driver that composes them
//! - **Scheduling** ([`scheduler`]) - Fans frames out over a worker pool with private scratch
//!   memory and write-disjoint output slices
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error types, including the fatal
//!   coincident-atom condition
//!
//! ## Key Capabilities
//!
//! - **Monte-Carlo SASA** on a golden-section-spiral point set
//! - **Rotating neighbor search** that exploits the spatial coherence of consecutive sphere points
//! - **Frame-level parallelism** (with the `parallel` feature) whose output is identical to a
//!   sequential run

pub mod config;
pub mod error;
pub mod progress;
pub mod scheduler;
pub mod tasks;
