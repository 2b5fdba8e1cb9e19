use std::fmt;

use serde::{Deserialize, Serialize};

use crate::raw::RawValue;

/// The numeric kinds a parameter may be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Integer,
    Real,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => f.write_str("integer"),
            NumericKind::Real => f.write_str("real"),
        }
    }
}

/// A number whose kind is carried alongside its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    pub fn kind(&self) -> NumericKind {
        match self {
            Number::Integer(_) => NumericKind::Integer,
            Number::Real(_) => NumericKind::Real,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Real(v) => write!(f, "{v:?}"),
        }
    }
}

/// Descriptor of one generator parameter.
///
/// Descriptors are produced by the reflector from a declared signature and
/// are immutable afterwards. Constructing one directly never fails; the
/// invariants (unique names, defaults of the right kind, defaults among the
/// choices) are checked before a reflector hands one out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parameter {
    Numeric(NumericParameter),
    Choice(ChoiceParameter),
}

impl Parameter {
    pub fn name(&self) -> &str {
        match self {
            Parameter::Numeric(p) => &p.name,
            Parameter::Choice(p) => &p.name,
        }
    }

    /// Display label shown next to the form control.
    pub fn description(&self) -> &str {
        match self {
            Parameter::Numeric(p) => &p.description,
            Parameter::Choice(p) => &p.description,
        }
    }

    pub fn has_default(&self) -> bool {
        self.default_raw().is_some()
    }

    /// The declared default as a raw value, ready to seed an input mapping.
    pub fn default_raw(&self) -> Option<RawValue> {
        match self {
            Parameter::Numeric(p) => p.default.map(|n| match n {
                Number::Integer(v) => RawValue::Integer(v),
                Number::Real(v) => RawValue::Real(v),
            }),
            Parameter::Choice(p) => p.default.clone().map(RawValue::Text),
        }
    }
}

impl From<NumericParameter> for Parameter {
    fn from(p: NumericParameter) -> Self {
        Parameter::Numeric(p)
    }
}

impl From<ChoiceParameter> for Parameter {
    fn from(p: ChoiceParameter) -> Self {
        Parameter::Choice(p)
    }
}

/// An integer or real parameter. `default: None` means the value is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericParameter {
    pub name: String,
    pub description: String,
    pub kind: NumericKind,
    pub default: Option<Number>,
}

impl NumericParameter {
    pub fn new(name: impl Into<String>, kind: NumericKind) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            kind,
            default: None,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, NumericKind::Integer)
    }

    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, NumericKind::Real)
    }

    pub fn with_default(mut self, default: Number) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A parameter restricted to one of a fixed, ordered set of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceParameter {
    pub name: String,
    pub description: String,
    pub choices: Vec<String>,
    pub default: Option<String>,
}

impl ChoiceParameter {
    pub fn new<I, S>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            choices: choices.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn contains(&self, value: &str) -> bool {
        self.choices.iter().any(|c| c == value)
    }
}
