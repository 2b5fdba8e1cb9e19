use std::num::{ParseFloatError, ParseIntError};

use param_types::{ArgumentError, NumericKind};
use serde::{Deserialize, Serialize};

use crate::signature::Literal;

/// A generator's declared signature cannot be turned into descriptors.
///
/// Always fatal: without a consistent parameter model nothing else can run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeclarationError {
    #[error("{parameter:?}: parameter name is not an identifier")]
    InvalidName { parameter: String },

    #[error("{parameter}: parameter declared more than once")]
    DuplicateName { parameter: String },

    #[error("{parameter}: unknown parameter type: {annotation}")]
    UnrecognizedType {
        parameter: String,
        annotation: String,
    },

    #[error("{parameter}: default {default} is not of declared type {expected}")]
    DefaultKindMismatch {
        parameter: String,
        expected: NumericKind,
        default: Literal,
    },

    #[error("{parameter}: default {value} is not a finite number")]
    NonFiniteDefault { parameter: String, value: f64 },

    #[error("{parameter}: default {default} is not one of {choices:?}")]
    DefaultNotAChoice {
        parameter: String,
        default: Literal,
        choices: Vec<String>,
    },
}

impl DeclarationError {
    pub fn parameter(&self) -> &str {
        match self {
            DeclarationError::InvalidName { parameter }
            | DeclarationError::DuplicateName { parameter }
            | DeclarationError::UnrecognizedType { parameter, .. }
            | DeclarationError::DefaultKindMismatch { parameter, .. }
            | DeclarationError::NonFiniteDefault { parameter, .. }
            | DeclarationError::DefaultNotAChoice { parameter, .. } => parameter,
        }
    }
}

/// Why a raw value could not be turned into a number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid integer {text:?}: {source}")]
    Integer {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid real number {text:?}: {source}")]
    Real {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{value} is not a finite number")]
    NotFinite { value: f64 },

    #[error("expected an integer, got {value:?}")]
    RealForInteger { value: f64 },

    #[error("no value given")]
    Empty,
}

/// A raw input value is missing or does not fit its parameter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("value for '{parameter}=' not given")]
    Missing { parameter: String },

    #[error("while parsing parameter {parameter}: {source}")]
    Malformed {
        parameter: String,
        #[source]
        source: ConversionError,
    },

    #[error("while parsing parameter {parameter}: {value} must be one of {choices:?}")]
    NotAChoice {
        parameter: String,
        value: String,
        choices: Vec<String>,
    },
}

impl InputError {
    pub fn parameter(&self) -> &str {
        match self {
            InputError::Missing { parameter }
            | InputError::Malformed { parameter, .. }
            | InputError::NotAChoice { parameter, .. } => parameter,
        }
    }
}

/// A generator refused a well-typed combination of arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parameter(s) {parameters:?} are invalid: {message}")]
pub struct DomainRejection {
    pub parameters: Vec<String>,
    pub message: String,
}

impl DomainRejection {
    pub fn new<I, S>(parameters: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

/// Coarse classification of a [`GenerationError`], for front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidDeclaration,
    InvalidInput,
    DomainRejection,
    GeneratorBug,
}

/// Anything that can stop a generation request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid parameter declaration: {0}")]
    Declaration(#[from] DeclarationError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Rejected(#[from] DomainRejection),

    #[error("generator does not match its signature: {0}")]
    Argument(#[from] ArgumentError),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Declaration(_) => ErrorKind::InvalidDeclaration,
            GenerationError::Input(_) => ErrorKind::InvalidInput,
            GenerationError::Rejected(_) => ErrorKind::DomainRejection,
            GenerationError::Argument(_) => ErrorKind::GeneratorBug,
        }
    }

    /// Names of the parameters this error is about.
    pub fn parameters(&self) -> Vec<String> {
        match self {
            GenerationError::Declaration(e) => vec![e.parameter().to_string()],
            GenerationError::Input(e) => vec![e.parameter().to_string()],
            GenerationError::Rejected(e) => e.parameters.clone(),
            GenerationError::Argument(
                ArgumentError::Missing { parameter } | ArgumentError::WrongType { parameter, .. },
            ) => vec![parameter.clone()],
        }
    }
}
