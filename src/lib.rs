//! Fixed-capacity slot arrays.
//!
//! A [`FixedArray`] has a declared number of slots, each holding a value or
//! nothing. Out-of-range access is an error rather than growth, and the
//! capacity only changes on request. On top of the primitive sit the usual
//! array helpers (push, shift, chunk, flatten, unique, shuffle, ...) and a
//! chaining wrapper, [`Fluent`].
//!
//! ```
//! use fixedarr::{fixed_array, values, FixedArray};
//!
//! let mut arr = FixedArray::from([1, 2, 3]);
//! assert_eq!(arr.shift(), Some(1));
//! assert_eq!(arr, [Some(2), Some(3), None]);
//!
//! let chunks = fixed_array([1, 2, 3, 4, 5]).chunk(2).unwrap();
//! assert_eq!(chunks.size(), 3);
//!
//! assert_eq!(values![1, values![2, 3], 4].flatten(None), values![1, 2, 3, 4]);
//! ```

mod fixedarray;
mod fluent;
mod loose;
mod natural;
mod random;
mod value;
#[cfg(feature = "serde")]
mod serialize;

pub(crate)mod errors;

pub use errors::{FixedArrayError, Result};
pub use fixedarray::{FixedArray, IntoIter, Iter, Values};
pub use fluent::Fluent;
pub use loose::LooseEq;
pub use natural::NaturalOrd;
pub use value::Value;

/// Number of slots in a [`FixedArray::default`] array.
pub const DEFAULT_CAPACITY: usize = 5;

/// Wraps an array, a vec, a [`Value`] or an existing [`Fluent`] for chaining.
///
/// An existing wrapper is returned unchanged.
///
/// # Examples
/// ```
/// use fixedarr::{fixed_array, Value};
///
/// let doubled = fixed_array([1, 2]).map(|v| v.map(|v| v * 2));
/// assert_eq!(doubled.to_vec(), vec![Some(2), Some(4)]);
///
/// let scalar = fixed_array(Value::from("solo"));
/// assert_eq!(scalar.size(), 1);
/// ```
#[inline]
pub fn fixed_array<T, I: Into<Fluent<T>>>(input: I) -> Fluent<T> {
    input.into()
}

/// Builds a fully occupied `FixedArray<Value>`, converting each element with
/// [`Value::from`].
///
/// # Examples
/// ```
/// use fixedarr::{values, Value};
///
/// let arr = values![1, "two", 3.0, values![4]];
/// assert_eq!(arr.get(1).unwrap(), Some(&Value::from("two")));
/// assert!(values![].is_empty());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::FixedArray::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::FixedArray::<$crate::Value>::from_values([$($crate::Value::from($value)),+])
    };
}
