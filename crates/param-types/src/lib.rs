//! Shared data types for parametric generators.
//!
//! - [`Parameter`] the typed descriptor of one declared generator parameter
//! - [`RawValues`] untyped input collected by a front end
//! - [`Arguments`] the validated, typed argument mapping handed to a generator
//! - [`Artifact`] one named unit of generated output

pub mod artifact;
pub mod parameter;
pub mod raw;
pub mod value;

pub use artifact::*;
pub use parameter::*;
pub use raw::*;
pub use value::*;
