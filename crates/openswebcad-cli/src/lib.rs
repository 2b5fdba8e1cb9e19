//! Command-line front end for the parametric generators.
//!
//! - [`params`] turns `key=value` tokens into raw parameter values
//! - [`output`] writes generated artifacts to an output directory

pub mod output;
pub mod params;

pub use output::{write_artifacts, OutputError, OutputFormat, WriteOptions};
pub use params::{parse_assignment, parse_cmdline_params, ParamSyntaxError};
