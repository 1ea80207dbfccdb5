/// Coercive ("loose") equality, as opposed to the strict equality of
/// [`PartialEq`].
///
/// For most types the two coincide and the provided defaults apply. Types
/// with cross-kind coercion, such as [`Value`](crate::Value), override them.
///
/// # Examples
///
/// ```
/// use fixedarr::{LooseEq, Value};
///
/// assert!(Value::from(1).loose_eq(&Value::from("1")));
/// assert!(Value::from(1) != Value::from("1"));
/// assert!(3u8.loose_eq(&3));
/// ```
pub trait LooseEq: PartialEq {
    /// Returns `true` if `self` and `other` are equal after coercion.
    fn loose_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns `true` if this value compares loosely equal to an empty slot.
    fn loosely_empty(&self) -> bool {
        false
    }
}

macro_rules! strict_loose_eq {
    ($($ty:ty),* $(,)?) => {
        $(impl LooseEq for $ty {})*
    };
}

strict_loose_eq!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, String, &str,
);

impl<T: LooseEq> LooseEq for Option<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        slots_loose_eq(self.as_ref(), other.as_ref())
    }

    fn loosely_empty(&self) -> bool {
        self.as_ref().is_none_or(T::loosely_empty)
    }
}

/// Loose comparison of two slots, where either may be empty.
pub(crate) fn slots_loose_eq<T: LooseEq>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.loose_eq(b),
        (None, None) => true,
        (Some(v), None) | (None, Some(v)) => v.loosely_empty(),
    }
}
