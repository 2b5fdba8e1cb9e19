use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated, typed argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Choice(String),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Choice(_) => "choice",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v:?}"),
            Value::Choice(s) => f.write_str(s),
        }
    }
}

/// Errors from reading a typed argument inside a generator body.
///
/// These only occur when a generator's body asks for something its declared
/// signature does not provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("no argument named '{parameter}'")]
    Missing { parameter: String },

    #[error("argument '{parameter}' is {found}, not {expected}")]
    WrongType {
        parameter: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// The typed argument mapping for one generation request.
///
/// Built once by validation and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Arguments(HashMap<String, Value>);

impl Arguments {
    /// The validated value for `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of arguments; one per declared parameter.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a generator that declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an argument named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// All arguments, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The integer argument `name`.
    ///
    /// Fails if the argument is absent or not an integer.
    pub fn integer(&self, name: &str) -> Result<i64, ArgumentError> {
        match self.require(name)? {
            Value::Integer(v) => Ok(*v),
            other => Err(wrong_type(name, "integer", other)),
        }
    }

    /// The real argument `name`.
    pub fn real(&self, name: &str) -> Result<f64, ArgumentError> {
        match self.require(name)? {
            Value::Real(v) => Ok(*v),
            other => Err(wrong_type(name, "real", other)),
        }
    }

    /// The selected choice for `name`.
    pub fn choice(&self, name: &str) -> Result<&str, ArgumentError> {
        match self.require(name)? {
            Value::Choice(s) => Ok(s),
            other => Err(wrong_type(name, "choice", other)),
        }
    }

    fn require(&self, name: &str) -> Result<&Value, ArgumentError> {
        self.0.get(name).ok_or_else(|| ArgumentError::Missing {
            parameter: name.to_string(),
        })
    }
}

fn wrong_type(name: &str, expected: &'static str, found: &Value) -> ArgumentError {
    ArgumentError::WrongType {
        parameter: name.to_string(),
        expected,
        found: found.type_name(),
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Arguments {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
