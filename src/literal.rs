//! Typing rules for prefixed literals.
//!
//! Bare literals are always strings. The two prefixed forms are resolved here:
//!
//! - `:text` ([`resolve_raw`]) must be one of `true`, `false`, `null`, an
//!   integer or a float.
//! - `^NAME` ([`resolve_env`]) reads a process environment variable. A missing
//!   variable is not an error and yields an empty string.

use std::env;

use thiserror::Error;

/// A resolved leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("invalid raw literal {0:?}: isn't any of true, false, null or a numeric")]
    InvalidRaw(String),
}

fn parse_numeric(text: &str) -> Option<Scalar> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Scalar::Integer(n));
    }
    text.parse::<f64>().ok().map(Scalar::Float)
}

/// Resolve the text of a `:`-prefixed literal.
///
/// # Examples
///
/// ```text
/// :42     -> Integer(42)
/// :3.14   -> Float(3.14)
/// :true   -> Boolean(true)
/// :null   -> Null
/// :nope   -> LiteralError::InvalidRaw
/// ```
pub fn resolve_raw(text: &str) -> Result<Scalar, LiteralError> {
    match text {
        "true" => Ok(Scalar::Boolean(true)),
        "false" => Ok(Scalar::Boolean(false)),
        "null" => Ok(Scalar::Null),
        _ => parse_numeric(text).ok_or_else(|| LiteralError::InvalidRaw(text.to_string())),
    }
}

/// Resolve a `^`-prefixed reference against the process environment.
pub fn resolve_env(name: &str) -> Scalar {
    resolve_env_with(name, |key| env::var(key).ok())
}

/// Resolve a `^`-prefixed reference using `lookup` in place of the process
/// environment.
///
/// The keyword check (`true`, `false`, `null`) looks at the variable NAME,
/// not its value; only the numeric attempts and the string fallback use the
/// value. An unset variable resolves to `""` before any of those checks.
pub fn resolve_env_with<F>(name: &str, lookup: F) -> Scalar
where
    F: FnOnce(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        tracing::trace!(name, "environment variable not set");
        return Scalar::String(String::new());
    };

    match name {
        "true" => Scalar::Boolean(true),
        "false" => Scalar::Boolean(false),
        "null" => Scalar::Null,
        _ => parse_numeric(&value).unwrap_or(Scalar::String(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn raw_keywords_and_numbers() {
        assert_eq!(resolve_raw("true"), Ok(Scalar::Boolean(true)));
        assert_eq!(resolve_raw("false"), Ok(Scalar::Boolean(false)));
        assert_eq!(resolve_raw("null"), Ok(Scalar::Null));
        assert_eq!(resolve_raw("42"), Ok(Scalar::Integer(42)));
        assert_eq!(resolve_raw("-7"), Ok(Scalar::Integer(-7)));
        assert_eq!(resolve_raw("3.14"), Ok(Scalar::Float(3.14)));
        assert_eq!(resolve_raw("1e3"), Ok(Scalar::Float(1000.0)));
    }

    #[test]
    fn raw_integer_overflow_falls_back_to_float() {
        assert_eq!(
            resolve_raw("9223372036854775808"),
            Ok(Scalar::Float(9223372036854775808.0))
        );
    }

    #[test]
    fn raw_rejects_words() {
        assert_eq!(
            resolve_raw("notanumber"),
            Err(LiteralError::InvalidRaw("notanumber".into()))
        );
        assert!(resolve_raw("").is_err());
        assert!(resolve_raw("True").is_err());
    }

    #[test]
    fn env_missing_is_empty_string() {
        let scalar = resolve_env_with("MISSING", lookup_from(&[]));
        assert_eq!(scalar, Scalar::String(String::new()));
    }

    #[test]
    fn env_value_is_typed_numerically() {
        let lookup = lookup_from(&[("PORT", "8080"), ("RATIO", "0.5"), ("NAME", "geralt")]);
        assert_eq!(resolve_env_with("PORT", &lookup), Scalar::Integer(8080));
        assert_eq!(resolve_env_with("RATIO", &lookup), Scalar::Float(0.5));
        assert_eq!(resolve_env_with("NAME", &lookup), Scalar::from("geralt"));
    }

    #[test]
    fn env_keyword_check_uses_the_name() {
        let lookup = lookup_from(&[("true", "no"), ("null", "42"), ("FLAG", "true")]);
        assert_eq!(resolve_env_with("true", &lookup), Scalar::Boolean(true));
        assert_eq!(resolve_env_with("null", &lookup), Scalar::Null);
        // the value "true" is not a keyword, only a string
        assert_eq!(resolve_env_with("FLAG", &lookup), Scalar::from("true"));
    }

    #[test]
    fn env_keyword_name_unset_is_still_empty() {
        assert_eq!(
            resolve_env_with("false", lookup_from(&[])),
            Scalar::String(String::new())
        );
    }
}
