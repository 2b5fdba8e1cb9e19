use std::fmt;

use serde::{Deserialize, Serialize};

/// A default value as written in a generator's declaration.
///
/// This is wider than the set of parameter types on purpose: a declaration
/// like `count: integer = 3.0` must be expressible so that it can be
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Integer(v) => write!(f, "{v}"),
            Literal::Real(v) => write!(f, "{v:?}"),
            Literal::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Integer(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Integer(v.into())
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Real(v)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

/// The declared type of a generator parameter.
///
/// Only `Integer`, `Real` and `Choice` are supported; `Other` and `Missing`
/// exist so that unsupported declarations can be reported by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Annotation {
    Integer,
    Real,
    /// An enumerated literal type; the values are the allowed strings in
    /// declaration order.
    Choice(Vec<String>),
    /// Any other declared type, kept verbatim for the diagnostic.
    Other(String),
    /// No type declared at all.
    Missing,
}

impl Annotation {
    pub fn choice<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Annotation::Choice(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Integer => f.write_str("integer"),
            Annotation::Real => f.write_str("real"),
            Annotation::Choice(values) => write!(f, "choice{values:?}"),
            Annotation::Other(name) => f.write_str(name),
            Annotation::Missing => f.write_str("<no annotation>"),
        }
    }
}

/// One formal parameter of a generator, as declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    /// Display label; the name is used when absent.
    pub description: Option<String>,
    pub annotation: Annotation,
    pub default: Option<Literal>,
}

impl ParameterDecl {
    pub fn new(name: impl Into<String>, annotation: Annotation) -> Self {
        Self {
            name: name.into(),
            description: None,
            annotation,
            default: None,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, Annotation::Integer)
    }

    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, Annotation::Real)
    }

    pub fn choice<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, Annotation::choice(values))
    }

    pub fn with_default(mut self, default: impl Into<Literal>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The ordered formal parameters of a generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub parameters: Vec<ParameterDecl>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter; declaration order is preserved.
    pub fn with(mut self, parameter: ParameterDecl) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl FromIterator<ParameterDecl> for Signature {
    fn from_iter<T: IntoIterator<Item = ParameterDecl>>(iter: T) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}
