use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A dynamically-typed document value, the input domain of the matcher.
///
/// This type represents all valid JSON types with a distinction between
/// integers and floats (unlike standard JSON which only has "number").
///
/// # Type Preservation
///
/// The integer/float split is preserved through conversion and matching:
/// - Documents round-trip without collapsing `1` into `1.0`
/// - Comparison operators treat both variants as one numeric domain,
///   promoting as needed
///
/// # Examples
///
/// ```
/// use mangomatch::Value;
/// use std::collections::HashMap;
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let mut obj = HashMap::new();
/// obj.insert("key".to_string(), Value::String("value".to_string()));
/// let object = Value::Object(obj);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Array of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Object with string keys; key uniqueness is guaranteed by the map,
    /// iteration order carries no meaning
    Object(HashMap<String, Value>),
}

/// Type tags recognized by the `$type` operator.
///
/// `Number` covers both [`Value::Integer`] and [`Value::Float`]. Every
/// value matches exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl TypeTag {
    /// Parse a tag name as accepted by `$type`. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<TypeTag> {
        match name {
            "string" => Some(TypeTag::String),
            "number" => Some(TypeTag::Number),
            "boolean" => Some(TypeTag::Boolean),
            "object" => Some(TypeTag::Object),
            "array" => Some(TypeTag::Array),
            "null" => Some(TypeTag::Null),
            _ => None,
        }
    }
}

impl Value {
    /// The `$type` tag this value falls under.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Integer(_) | Value::Float(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// Get as float, promoting integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as integer, truncating floats toward zero
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Float(n) => Some(n.trunc() as i64),
            _ => None,
        }
    }

    /// Get as integer, rejecting floats with a fractional part
    pub fn as_exact_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Float(n) if n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        }
    }

    /// True if this value is numeric (integer or float)
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }
}

/// Returns a human-readable type name for a Value
pub(crate) fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Boolean(_) => "boolean",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
