use std::cmp::Ordering;

use crate::FixedArray;


/// The total order used by [`FixedArray::sort`].
///
/// Unlike [`PartialOrd`] this always yields an ordering. Floating point `NaN`
/// sorts after every other number, empty slots sort before present values,
/// and arrays compare slot by slot with the shorter array first on a tie.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use fixedarr::{NaturalOrd, Value};
///
/// assert_eq!(f64::NAN.natural_cmp(&1.0), Ordering::Greater);
/// assert_eq!(Value::from(1).natural_cmp(&Value::from("a")), Ordering::Less);
/// ```
pub trait NaturalOrd {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! ord_natural {
    ($($ty:ty),* $(,)?) => {
        $(impl NaturalOrd for $ty {
            #[inline]
            fn natural_cmp(&self, other: &Self) -> Ordering { self.cmp(other) }
        })*
    };
}

ord_natural!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, String, &str,
);

/// Orders floats numerically with every `NaN` last.
pub(crate) fn float_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl NaturalOrd for f64 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering { float_cmp(*self, *other) }
}

impl NaturalOrd for f32 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        float_cmp(f64::from(*self), f64::from(*other))
    }
}

impl<T: NaturalOrd> NaturalOrd for Option<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.natural_cmp(b),
        }
    }
}

impl<T: NaturalOrd> NaturalOrd for FixedArray<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.as_slots()
            .iter()
            .zip(other.as_slots())
            .map(|(a, b)| a.natural_cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }
}
