use std::{cmp::Ordering, fmt};

use crate::{FixedArray, loose::{LooseEq, slots_loose_eq}, natural::{NaturalOrd, float_cmp}};


/// A dynamically typed value for heterogeneous [`FixedArray`]s.
///
/// `Null` is a stored value, distinct from an empty slot. Nested arrays are
/// what [`FixedArray::flatten`] descends into.
///
/// # Equality
///
/// [`PartialEq`] is strict: the variants must match, so `Int(1)`, `Float(1.0)`,
/// `Str("1")` and `Bool(true)` are all different. [`LooseEq`] applies
/// coercion, under which those four are equal.
///
/// # Ordering
///
/// [`PartialOrd`] ranks `Null < Bool < Int/Float < Str < Array`. Numbers
/// compare numerically; an `Int` sorts before a numerically equal `Float`.
/// `NaN` is incomparable. [`NaturalOrd`] extends this to a total order with
/// `NaN` after every other number, which is what sorting uses.
///
/// # Examples
///
/// ```
/// use fixedarr::{values, LooseEq, Value};
///
/// let row = values![1, "two", 3.5, Value::Null];
/// assert_eq!(row.size(), 4);
///
/// assert!(Value::from(true).loose_eq(&Value::from("yes")));
/// assert!(Value::from(1) < Value::from("a"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(FixedArray<Value>),
}

impl Value {

    /// Returns `true` for `Null`.
    #[inline]
    pub const fn is_null(&self) -> bool { matches!(self, Value::Null) }

    /// Returns `true` if the value is a nested array.
    #[inline]
    pub const fn is_array(&self) -> bool { matches!(self, Value::Array(_)) }

    #[inline]
    pub const fn as_array(&self) -> Option<&FixedArray<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric value of an `Int` or `Float`.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The name of the variant, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
        }
    }

    /// Truthiness used by loose comparison.
    ///
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"` and zero-capacity arrays are
    /// falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Array(arr) => !arr.is_empty(),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
            Value::Array(_) => 4,
        }
    }
}

/// Parses a numeric string, ignoring surrounding whitespace.
///
/// Words such as `inf` or `NaN` are not numeric.
fn numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    let plausible = !s.is_empty() && s.bytes().all(|b| {
        b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
    });
    if !plausible { return None }
    s.parse().ok()
}

impl LooseEq for Value {
    fn loose_eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (Null, Null) => true,
            (Null, Str(s)) | (Str(s), Null) => s.is_empty(),
            (Null, v) | (v, Null) => !v.is_truthy(),
            (Bool(b), v) | (v, Bool(b)) => *b == v.is_truthy(),
            (Array(a), Array(b)) => {
                a.len() == b.len() &&
                a.iter().zip(b.iter()).all(|(x, y)| slots_loose_eq(x, y))
            }
            (Array(_), _) | (_, Array(_)) => false,
            (Int(a), Int(b)) => a == b,
            (Str(a), Str(b)) => match (numeric(a), numeric(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (Str(s), n) | (n, Str(s)) => match (numeric(s), n.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => n.to_string() == *s,
            },
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    fn loosely_empty(&self) -> bool {
        self.loose_eq(&Value::Null)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Null, Null) => Some(Ordering::Equal),
            (Bool(a), Bool(b)) => a.partial_cmp(b),
            (Int(a), Int(b)) => a.partial_cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b).map(|o| o.then(Ordering::Less)),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).map(|o| o.then(Ordering::Greater)),
            (Str(a), Str(b)) => a.partial_cmp(b),
            (Array(a), Array(b)) => a.partial_cmp(b),
            (a, b) => a.rank().partial_cmp(&b.rank()),
        }
    }
}

impl NaturalOrd for Value {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        use Value::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => float_cmp(*a, *b),
            (Int(a), Float(b)) => float_cmp(*a as f64, *b).then(Ordering::Less),
            (Float(a), Int(b)) => float_cmp(*a, *b as f64).then(Ordering::Greater),
            (Str(a), Str(b)) => a.cmp(b),
            (Array(a), Array(b)) => a.natural_cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl fmt::Display for Value {
    /// Scalars print bare (`Null` prints nothing); arrays print their slots
    /// in brackets, with empty slots shown as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => write!(f, "1"),
            Value::Bool(false) => Ok(()),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, slot) in arr.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    match slot {
                        Some(v) => write!(f, "{v}")?,
                        None => f.write_str("_")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

impl Default for Value {
    fn default() -> Self { Value::Null }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(i: $ty) -> Self { Value::Int(i64::from(i)) }
        })*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self { Value::Float(f64::from(x)) }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Float(x) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Str(s.to_owned()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Str(s) }
}

impl From<FixedArray<Value>> for Value {
    fn from(arr: FixedArray<Value>) -> Self { Value::Array(arr) }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self { Value::Array(FixedArray::from(values)) }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    /// `None` becomes `Null`.
    fn from(value: Option<V>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Value> for FixedArray<Value> {
    /// An `Array` value is unwrapped; any other value becomes a one-slot array.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(arr) => arr,
            scalar => FixedArray::from([scalar]),
        }
    }
}
