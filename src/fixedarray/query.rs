use rand::{TryCryptoRng, rngs::OsRng};

use super::FixedArray;
use crate::{errors::{FixedArrayError, Result}, loose::{LooseEq, slots_loose_eq}, random};


impl<T> FixedArray<T> {

    /// Returns `true` if some occupied slot is strictly equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::{values, Value};
    ///
    /// let arr = values![1, "2", true];
    /// assert!(arr.contains(&Value::from("2")));
    /// assert!(!arr.contains(&Value::from(2)));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Returns `true` if some slot is loosely equal to `value`.
    ///
    /// Empty slots take part: they match values that are loosely equal to an
    /// empty slot (see [`LooseEq::loosely_empty`]).
    ///
    /// # Examples
    /// ```
    /// use fixedarr::{values, Value};
    ///
    /// let arr = values![1, "2", true];
    /// assert!(arr.contains_loose(&Value::from(2)));
    /// ```
    pub fn contains_loose(&self, value: &T) -> bool
    where
        T: LooseEq,
    {
        self.iter().any(|slot| slots_loose_eq(slot, Some(value)))
    }

    /// Calls `f` with every slot and its index, then returns the array.
    pub fn each<F: FnMut(Option<&T>, usize)>(&self, mut f: F) -> &Self {
        self.iter().enumerate().for_each(|(i, slot)| f(slot, i));
        self
    }

    /// Returns the value of the first slot for which `predicate` holds.
    ///
    /// The predicate sees empty slots too; a match on an empty slot yields
    /// `None`, the same as no match at all.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let arr = FixedArray::from([1, 5, 8]);
    /// assert_eq!(arr.find(|v, _| v.is_some_and(|v| *v > 3)), Some(&5));
    /// assert_eq!(arr.find(|_, i| i == 2), Some(&8));
    /// ```
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(Option<&T>, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .find(|(i, slot)| predicate(*slot, *i))
            .and_then(|(_, slot)| slot)
    }

    /// Returns the index of the first slot for which `predicate` holds.
    pub fn find_key<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(Option<&T>, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .position(|(i, slot)| predicate(slot, i))
    }

    /// Alias for [`find_key`](Self::find_key).
    #[inline]
    pub fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(Option<&T>, usize) -> bool,
    {
        self.find_key(predicate)
    }

    /// Reads slot 0.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::IndexOutOfRange`] for a zero-capacity array.
    #[inline]
    pub fn first(&self) -> Result<Option<&T>> {
        self.get(0)
    }

    /// Reads the last slot.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::IndexOutOfRange`] for a zero-capacity array.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// assert_eq!(FixedArray::from([1, 2]).last().unwrap(), Some(&2));
    /// assert_eq!(FixedArray::<i32>::create(3).unwrap().last().unwrap(), None);
    /// assert!(FixedArray::<i32>::new().last().is_err());
    /// ```
    pub fn last(&self) -> Result<Option<&T>> {
        let index = self.len()
            .checked_sub(1)
            .ok_or(FixedArrayError::out_of_range(0, 0))?;
        self.get(index)
    }

    /// Reads slot 1.
    ///
    /// Unlike [`first`](Self::first) and [`last`](Self::last) this never
    /// fails: a missing second slot reads as `None`.
    #[inline]
    pub fn second(&self) -> Option<&T> {
        self.slots.get(1).and_then(Option::as_ref)
    }

    /// Reads a uniformly chosen slot using the operating system's secure
    /// random source.
    ///
    /// Returns `Ok(None)` for a zero-capacity array or an empty chosen slot.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::RandomSource`] if the source fails.
    #[inline]
    pub fn random(&self) -> Result<Option<&T>> {
        self.random_with(&mut OsRng)
    }

    /// Like [`random`](Self::random), drawing from the given secure source.
    pub fn random_with<R: TryCryptoRng>(&self, rng: &mut R) -> Result<Option<&T>> {
        match self.len() {
            0 => Ok(None),
            count => {
                let index = random::index_in(rng, count - 1)?;
                self.get(index)
            }
        }
    }
}
