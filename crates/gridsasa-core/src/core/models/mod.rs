//! # Core Models Module
//!
//! Data structures describing the inputs and outputs of a grid SASA computation.
//!
//! ## Key Components
//!
//! - [`frame`] - A single snapshot of atom positions and the ordered trajectory of snapshots
//! - [`atoms`] - Frame-invariant per-atom properties: effective radius and selection flag
//! - [`grid`] - Voxel grid geometry and the flat, frame-major output buffer
//!
//! ## Usage
//!
//! ```
//! use gridsasa::core::models::{atoms::AtomTable, frame::{Frame, Trajectory}, grid::GridGeometry};
//! use nalgebra::Point3;
//!
//! let frame = Frame::new(vec![Point3::new(5.0, 5.0, 5.0)]);
//! let trajectory = Trajectory::new(vec![frame]).unwrap();
//! let atoms = AtomTable::from_vdw_radii(&[1.7], 1.4);
//! let grid = GridGeometry::new([10, 10, 10], 1.0);
//!
//! assert_eq!(trajectory.atom_count(), atoms.len());
//! assert_eq!(grid.voxel_count(), 1000);
//! ```

pub mod atoms;
pub mod frame;
pub mod grid;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ModelError {
    #[error("Frame {frame} has {found} atoms, expected {expected}")]
    InconsistentAtomCount {
        frame: usize,
        expected: usize,
        found: usize,
    },
    #[error("Length mismatch: {radii} radii but {selection} selection flags")]
    SelectionLengthMismatch { radii: usize, selection: usize },
    #[error("Grid buffer holds {found} values, expected {expected}")]
    GridLengthMismatch { expected: usize, found: usize },
    #[error("Flat coordinate buffer of length {len} does not hold whole (x, y, z) triples")]
    RaggedCoordinates { len: usize },
}
