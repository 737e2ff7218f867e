//! # Workflows Module
//!
//! High-level entry points for users of GridSASA.
//!
//! - **Grid SASA Workflow** ([`grid_sasa`]) - Computes one accessible-area density grid per
//!   trajectory frame, from coordinates, effective radii and a selection mask.

pub mod grid_sasa;
