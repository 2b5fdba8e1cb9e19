use param_types::{
    Arguments, ChoiceParameter, NumericKind, NumericParameter, Parameter, RawValue, RawValues,
    Value,
};
use tracing::{debug, instrument};

use crate::errors::{ConversionError, InputError};

/// Check raw input against descriptors and build the typed argument mapping.
///
/// Descriptors are scanned in order and the first problem is returned; no
/// partial mapping is ever produced. Defaults are not filled in here: a
/// front end that wants them seeds `raw` first (see
/// [`RawValues::from_defaults`]). Keys with no matching descriptor are
/// ignored.
#[instrument(skip_all, fields(parameters = parameters.len(), supplied = raw.len()))]
pub fn validate(parameters: &[Parameter], raw: &RawValues) -> Result<Arguments, InputError> {
    for (name, _) in raw.iter() {
        if !parameters.iter().any(|p| p.name() == name) {
            debug!(name, "ignoring value for undeclared parameter");
        }
    }

    parameters
        .iter()
        .map(|parameter| -> Result<(String, Value), InputError> {
            let value = match raw.get(parameter.name()) {
                Some(value) => validate_value(parameter, value)?,
                None => return Err(missing(parameter)),
            };
            debug!(name = parameter.name(), %value, "validated parameter");
            Ok((parameter.name().to_string(), value))
        })
        .collect()
}

/// Convert and check a single raw value against its descriptor.
///
/// `RawValue::Unset` counts as missing, exactly like an absent key.
pub fn validate_value(parameter: &Parameter, value: &RawValue) -> Result<Value, InputError> {
    if matches!(value, RawValue::Unset) {
        return Err(missing(parameter));
    }

    match parameter {
        Parameter::Numeric(p) => convert_numeric(p, value).map_err(|source| InputError::Malformed {
            parameter: p.name.clone(),
            source,
        }),
        Parameter::Choice(p) => check_choice(p, value),
    }
}

fn convert_numeric(parameter: &NumericParameter, value: &RawValue) -> Result<Value, ConversionError> {
    match parameter.kind {
        NumericKind::Integer => convert_integer(value).map(Value::Integer),
        NumericKind::Real => convert_real(value).map(Value::Real),
    }
}

fn convert_integer(value: &RawValue) -> Result<i64, ConversionError> {
    match value {
        RawValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|source| ConversionError::Integer {
                text: text.clone(),
                source,
            }),
        RawValue::Integer(v) => Ok(*v),
        RawValue::Real(v) => Err(ConversionError::RealForInteger { value: *v }),
        RawValue::Unset => Err(ConversionError::Empty),
    }
}

fn convert_real(value: &RawValue) -> Result<f64, ConversionError> {
    let v = match value {
        RawValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|source| ConversionError::Real {
                text: text.clone(),
                source,
            })?,
        // A number field may report a whole number for a real parameter.
        RawValue::Integer(v) => *v as f64,
        RawValue::Real(v) => *v,
        RawValue::Unset => return Err(ConversionError::Empty),
    };
    if !v.is_finite() {
        return Err(ConversionError::NotFinite { value: v });
    }
    Ok(v)
}

fn check_choice(parameter: &ChoiceParameter, value: &RawValue) -> Result<Value, InputError> {
    match value {
        RawValue::Text(s) if parameter.contains(s) => Ok(Value::Choice(s.clone())),
        other => Err(InputError::NotAChoice {
            parameter: parameter.name.clone(),
            value: other.to_string(),
            choices: parameter.choices.clone(),
        }),
    }
}

fn missing(parameter: &Parameter) -> InputError {
    InputError::Missing {
        parameter: parameter.name().to_string(),
    }
}
