//! Generators that emit OpenSCAD source.
//!
//! [`scad`] is a small solid-description builder that renders to OpenSCAD
//! text; [`models`] holds the shipped generators and [`registry`] lists them
//! by name for the front ends.

pub mod models;
pub mod registry;
pub mod scad;

pub use models::{CylinderRow, Spacer};
pub use registry::{find, names, registry, DEFAULT_MODEL};
pub use scad::{Align, Bounds, Solid};
