use param_engine::is_identifier;
use param_types::RawValues;

/// A command-line token that is not a `key=value` assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parameter '{token}' does not follow key=value format")]
pub struct ParamSyntaxError {
    pub token: String,
}

/// Split one `key=value` token.
///
/// The token must contain exactly one `=` and the key must be an identifier.
/// The value may be empty; whether that is acceptable is up to validation.
pub fn parse_assignment(token: &str) -> Result<(&str, &str), ParamSyntaxError> {
    let mut parts = token.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) if is_identifier(key) => Ok((key, value)),
        _ => Err(ParamSyntaxError {
            token: token.to_string(),
        }),
    }
}

/// Collect `key=value` tokens into raw values. A repeated key keeps the last value.
pub fn parse_cmdline_params<I, S>(tokens: I) -> Result<RawValues, ParamSyntaxError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut raw = RawValues::new();
    for token in tokens {
        let (key, value) = parse_assignment(token.as_ref())?;
        raw.insert(key, value);
    }
    Ok(raw)
}
