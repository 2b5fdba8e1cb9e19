use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parameter::Parameter;

/// An untyped input for one parameter, before validation.
///
/// The CLI only ever produces `Text`. A structured form control may hand
/// over an already-typed number, or `Unset` when the field is cleared.
/// In JSON this is a plain string, number or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Unset,
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(s) => f.write_str(s),
            RawValue::Integer(v) => write!(f, "{v}"),
            RawValue::Real(v) => write!(f, "{v:?}"),
            RawValue::Unset => f.write_str("<unset>"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Integer(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Real(v)
    }
}

/// Raw values keyed by parameter name, as collected by a front end.
///
/// Keys that match no parameter are allowed and ignored by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawValues(HashMap<String, RawValue>);

impl RawValues {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a mapping with every declared default.
    ///
    /// Parameters without a default are left out, so they still fail
    /// validation as missing until a value is supplied.
    pub fn from_defaults(parameters: &[Parameter]) -> Self {
        parameters
            .iter()
            .filter_map(|p| p.default_raw().map(|v| (p.name().to_string(), v)))
            .collect()
    }

    /// Set the value for `name`, returning the one it replaces.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.0.insert(name.into(), value.into())
    }

    /// The value supplied for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.0.get(name)
    }

    /// Drop the value for `name`, returning it.
    pub fn remove(&mut self, name: &str) -> Option<RawValue> {
        self.0.remove(name)
    }

    /// Overlay `other` on top of `self`; values in `other` win.
    pub fn merge(&mut self, other: RawValues) {
        self.0.extend(other.0);
    }

    /// Number of supplied values, undeclared keys included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All supplied values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for RawValues
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
