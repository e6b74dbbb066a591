use crate::literal::Scalar;

/// The generic value tree produced from a parsed expression.
///
/// This is what a renderer consumes. Integers and floats are kept apart so
/// `:42` renders as `42` and `:42.0` as `42.0`.
///
/// # Field order
///
/// Objects keep their fields in the order each key was first written. A key
/// that is written again (and merged) keeps its original slot.
///
/// Equality ignores field order: two objects are equal when they hold the
/// same keys with equal values. Use [`Value::keys`] to compare order.
///
/// # Examples
///
/// ```
/// use clon::Value;
///
/// let object = Value::Object(vec![
///     ("name".to_string(), Value::String("foo".to_string())),
///     ("age".to_string(), Value::Integer(30)),
/// ]);
///
/// assert_eq!(object.get("age"), Some(&Value::Integer(30)));
/// assert_eq!(object.get("missing"), None);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Fields in insertion order; keys are unique
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Look up a field of an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as array elements
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Object keys in field order; empty for non-objects
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Value::Object(fields) => fields.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // keys are unique, so equal length plus one-way lookup suffices
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(key, value)| other.get(key) == Some(value))
            }
            _ => false,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Boolean(b) => Value::Boolean(b),
            Scalar::Integer(n) => Value::Integer(n),
            Scalar::Float(n) => Value::Float(n),
            Scalar::String(s) => Value::String(s),
        }
    }
}
