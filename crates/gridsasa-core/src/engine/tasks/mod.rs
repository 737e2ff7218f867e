//! Computational units of the SASA kernel.
//!
//! Each submodule implements one step of the per-frame pipeline. [`frame`] composes them:
//! for every selected atom it runs [`neighbors`], places the sphere points on the atom's
//! surface, tests each with [`occlusion`], and hands accessible points to [`rasterize`].

pub mod frame;
pub mod neighbors;
pub mod occlusion;
pub mod rasterize;
