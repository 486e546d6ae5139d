use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// Variables are untyped: a name holds whatever was last assigned to it.
/// Anything that inspects a value matches on all three variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point). Integer and float
    /// literals both evaluate to this.
    Number(f64),
    /// The contents of a string literal, without its quotes.
    Text(String),
    /// The value of a variable that was never assigned.
    Absent,
}

impl Value {
    /// Returns `true` for [`Value::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) | Self::Absent => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) | Self::Absent => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Numbers print in canonical decimal form with at least one fractional
/// digit (`5.0`, `2.5`). Absent values print as `None`.
///
/// # Example
/// ```
/// use legoc::interpreter::value::Value;
///
/// assert_eq!(Value::Number(5.0).to_string(), "5.0");
/// assert_eq!(Value::Number(0.25).to_string(), "0.25");
/// assert_eq!(Value::from("hi").to_string(), "hi");
/// assert_eq!(Value::Absent.to_string(), "None");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Text(s) => f.write_str(s),
            Self::Absent => f.write_str("None"),
        }
    }
}
