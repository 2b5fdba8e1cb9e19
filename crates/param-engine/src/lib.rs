//! Parameter reflection and validation for parametric generators.
//!
//! A generator publishes an explicit [`Signature`] next to its body. The
//! engine turns that declaration into [`Parameter`] descriptors once per
//! session, checks untyped front-end input against them, and only then calls
//! the generator:
//!
//! ```text
//! Signature --reflect--> [Parameter] --validate(RawValues)--> Arguments --invoke--> [Artifact]
//! ```
//!
//! Every failure along the way is a [`GenerationError`] that names the
//! offending parameter(s), so the CLI and the browser form report the same
//! thing.
//!
//! [`Parameter`]: param_types::Parameter

pub mod errors;
pub mod generator;
pub mod reflect;
pub mod session;
pub mod signature;
pub mod validate;

pub use errors::*;
pub use generator::{invoke, FnGenerator, Generator, SharedGenerator};
pub use reflect::{is_identifier, reflect};
pub use session::Session;
pub use signature::{Annotation, Literal, ParameterDecl, Signature};
pub use validate::{validate, validate_value};
