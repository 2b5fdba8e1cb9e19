use std::collections::HashSet;

use param_types::{ChoiceParameter, Number, NumericKind, NumericParameter, Parameter};
use tracing::{debug, instrument};

use crate::errors::DeclarationError;
use crate::signature::{Annotation, Literal, ParameterDecl, Signature};

/// Turn a declared signature into parameter descriptors.
///
/// Descriptors come back in declaration order. The first offending
/// parameter aborts reflection; later ones are not examined.
#[instrument(skip(signature), fields(declared = signature.len()))]
pub fn reflect(signature: &Signature) -> Result<Vec<Parameter>, DeclarationError> {
    let mut seen = HashSet::new();
    let mut parameters = Vec::with_capacity(signature.len());

    for decl in &signature.parameters {
        if !is_identifier(&decl.name) {
            return Err(DeclarationError::InvalidName {
                parameter: decl.name.clone(),
            });
        }
        if !seen.insert(decl.name.as_str()) {
            return Err(DeclarationError::DuplicateName {
                parameter: decl.name.clone(),
            });
        }

        let parameter = reflect_parameter(decl)?;
        debug!(name = %decl.name, annotation = %decl.annotation, "reflected parameter");
        parameters.push(parameter);
    }

    Ok(parameters)
}

fn reflect_parameter(decl: &ParameterDecl) -> Result<Parameter, DeclarationError> {
    let description = decl.description.clone().unwrap_or_else(|| decl.name.clone());

    match &decl.annotation {
        Annotation::Choice(values) => {
            if !is_literal_set(values) {
                return Err(unrecognized(decl));
            }
            let default = match &decl.default {
                None => None,
                Some(Literal::Str(s)) if values.contains(s) => Some(s.clone()),
                Some(other) => {
                    return Err(DeclarationError::DefaultNotAChoice {
                        parameter: decl.name.clone(),
                        default: other.clone(),
                        choices: values.clone(),
                    })
                }
            };
            Ok(Parameter::Choice(ChoiceParameter {
                name: decl.name.clone(),
                description,
                choices: values.clone(),
                default,
            }))
        }
        Annotation::Integer => numeric(decl, description, NumericKind::Integer),
        Annotation::Real => numeric(decl, description, NumericKind::Real),
        Annotation::Other(_) | Annotation::Missing => Err(unrecognized(decl)),
    }
}

fn numeric(
    decl: &ParameterDecl,
    description: String,
    kind: NumericKind,
) -> Result<Parameter, DeclarationError> {
    // No widening in either direction: `real = 3` is as wrong as `integer = 3.0`.
    let default = match (&decl.default, kind) {
        (None, _) => None,
        (Some(Literal::Integer(v)), NumericKind::Integer) => Some(Number::Integer(*v)),
        (Some(Literal::Real(v)), NumericKind::Real) if !v.is_finite() => {
            return Err(DeclarationError::NonFiniteDefault {
                parameter: decl.name.clone(),
                value: *v,
            })
        }
        (Some(Literal::Real(v)), NumericKind::Real) => Some(Number::Real(*v)),
        (Some(other), _) => {
            return Err(DeclarationError::DefaultKindMismatch {
                parameter: decl.name.clone(),
                expected: kind,
                default: other.clone(),
            })
        }
    };
    Ok(Parameter::Numeric(NumericParameter {
        name: decl.name.clone(),
        description,
        kind,
        default,
    }))
}

fn unrecognized(decl: &ParameterDecl) -> DeclarationError {
    DeclarationError::UnrecognizedType {
        parameter: decl.name.clone(),
        annotation: decl.annotation.to_string(),
    }
}

/// A usable literal set is non-empty and has no repeated values.
fn is_literal_set(values: &[String]) -> bool {
    let mut seen = HashSet::new();
    !values.is_empty() && values.iter().all(|v| seen.insert(v.as_str()))
}

/// Whether `name` can be used as a parameter name (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("a"));
        assert!(is_identifier("_inner"));
        assert!(is_identifier("outer_diameter2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a=b"));
        assert!(!is_identifier("länge"));
    }

    #[test]
    fn literal_sets() {
        assert!(is_literal_set(&["x".into(), "y".into()]));
        assert!(!is_literal_set(&[]));
        assert!(!is_literal_set(&["x".into(), "x".into()]));
    }
}
