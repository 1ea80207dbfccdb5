mod iter;
mod query;
mod transform;
mod flatten;

use std::{fmt, ops::{Index, IndexMut}};
use tracing::{debug, trace};
use crate::{DEFAULT_CAPACITY, errors::{FixedArrayError, Result}};

pub use iter::{IntoIter, Iter, Values};

/// A capacity-bounded, mutable, indexable array of slots.
///
/// Every slot either holds a `T` or is empty (`None`). The number of slots is
/// the array's capacity, and it only changes through an explicit
/// [`resize`](Self::resize), [`push`](Self::push), [`unshift`](Self::unshift)
/// or [`insert`](Self::insert). Reading or writing outside `0..capacity` is an
/// error, never a silent truncation.
///
/// # Examples
///
/// ```
/// use fixedarr::FixedArray;
///
/// let mut arr = FixedArray::<i32>::create(3).unwrap();
/// assert_eq!(arr, [None, None, None]);
///
/// arr.set(0, 7).unwrap();
/// arr.push(9);
///
/// assert_eq!(arr.size(), 4);
/// assert_eq!(arr, [Some(7), None, None, Some(9)]);
/// assert!(arr.get(4).is_err());
/// ```
///
/// # Capacity
///
/// Unlike a [`Vec`], a `FixedArray` has no logical length separate from its
/// capacity: [`count`](Self::count), [`size`](Self::size), [`len`](Self::len)
/// and [`capacity`](Self::capacity) all report the number of slots, occupied
/// or not. [`pop`](Self::pop) and [`shift`](Self::shift) read and clear a slot
/// but never shrink the array.
///
/// Growth is always by exactly one slot. There is no doubling strategy, so
/// building an array by repeated [`push`](Self::push) may reallocate on every
/// call.
#[derive(Clone, PartialEq, Eq, PartialOrd, Hash)]
pub struct FixedArray<T> {
    slots: Vec<Option<T>>,
}

fn alloc_slots<T>(capacity: usize) -> Result<Vec<Option<T>>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| FixedArrayError::InvalidSize { requested: capacity })?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}

impl<T: fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for FixedArray<T> {
    /// An array of [`DEFAULT_CAPACITY`] empty slots.
    fn default() -> Self {
        Self { slots: std::iter::repeat_with(|| None).take(DEFAULT_CAPACITY).collect() }
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[Option<T>; N]> for FixedArray<T> {
    fn eq(&self, other: &[Option<T>; N]) -> bool {
        self.slots.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<&[Option<T>; N]> for FixedArray<T> {
    fn eq(&self, other: &&[Option<T>; N]) -> bool {
        self.slots.as_slice() == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<Option<T>>> for FixedArray<T> {
    fn eq(&self, other: &Vec<Option<T>>) -> bool {
        &self.slots == other
    }
}

impl<T: PartialEq> PartialEq<[Option<T>]> for FixedArray<T> {
    fn eq(&self, other: &[Option<T>]) -> bool {
        self.slots.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[Option<T>]> for FixedArray<T> {
    fn eq(&self, other: &&[Option<T>]) -> bool {
        self.slots.as_slice() == *other
    }
}

impl<T> Index<usize> for FixedArray<T> {
    type Output = Option<T>;

    /// # Panics
    ///
    /// Panics if `index >= capacity`. Use [`get`](FixedArray::get) for a
    /// checked read.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for FixedArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}

impl<T> FromIterator<Option<T>> for FixedArray<T> {
    /// Collects slots, one per item, keeping empty ones.
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self { slots: iter.into_iter().collect() }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T> {

    /// Create a fully occupied array from an array of values.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let arr = FixedArray::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// assert_eq!(arr, [Some(1), Some(2), Some(3)]);
    /// ```
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T> From<Vec<T>> for FixedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T> From<FixedArray<T>> for Vec<Option<T>> {
    fn from(arr: FixedArray<T>) -> Self {
        arr.slots
    }
}

impl<T> FixedArray<T> {

    /// Creates an array with `capacity` empty slots.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::InvalidSize`] when storage for `capacity`
    /// slots cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let arr = FixedArray::<&str>::create(5).unwrap();
    /// assert_eq!(arr.size(), 5);
    /// assert!(arr.iter().all(|slot| slot.is_none()));
    /// ```
    pub fn create(capacity: usize) -> Result<Self> {
        Ok(Self { slots: alloc_slots(capacity)? })
    }

    /// Creates an array of zero slots.
    #[inline]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an array with one occupied slot per value, in iteration order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().map(Some).collect()
    }

    /// Creates an array that takes ownership of the given slots as-is.
    #[inline]
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Self { slots }
    }

    /// Returns the number of slots.
    ///
    /// Identical to [`size`](Self::size), [`count`](Self::count) and
    /// [`capacity`](Self::capacity).
    #[inline(always)]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns the number of slots, occupied or not.
    #[inline(always)]
    pub fn count(&self) -> usize { self.len() }

    /// Returns the declared size of the array.
    #[inline(always)]
    pub fn size(&self) -> usize { self.len() }

    /// Alias for [`size`](Self::size).
    #[inline(always)]
    pub fn get_size(&self) -> usize { self.len() }

    /// Returns the capacity of the array.
    #[inline(always)]
    pub fn capacity(&self) -> usize { self.len() }

    /// Returns `true` if the array has no slots at all.
    ///
    /// An array whose slots are all empty is *not* empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Reads the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::IndexOutOfRange`] when `index >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2]);
    /// arr.clear(1).unwrap();
    ///
    /// assert_eq!(arr.get(0).unwrap(), Some(&1));
    /// assert_eq!(arr.get(1).unwrap(), None);
    /// assert!(arr.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(FixedArrayError::out_of_range(index, self.len()))
    }

    /// Mutably borrows the value at `index`, if the slot is occupied.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        let capacity = self.len();
        self.slots
            .get_mut(index)
            .map(Option::as_mut)
            .ok_or(FixedArrayError::out_of_range(index, capacity))
    }

    /// Stores `value` at `index`, overwriting whatever the slot held.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.set_slot(index, Some(value))
    }

    /// Overwrites the slot at `index`, including with an empty slot.
    pub fn set_slot(&mut self, index: usize, slot: Option<T>) -> Result<()> {
        let capacity = self.len();
        let target = self.slots
            .get_mut(index)
            .ok_or(FixedArrayError::out_of_range(index, capacity))?;
        *target = slot;
        Ok(())
    }

    /// Empties the slot at `index`.
    #[inline]
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.set_slot(index, None)
    }

    /// Returns `true` if `index` is in range *and* its slot holds a value.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::<bool>::create(2).unwrap();
    /// arr.set(0, false).unwrap();
    ///
    /// assert!(arr.exists(0));
    /// assert!(!arr.exists(1));
    /// assert!(!arr.exists(2));
    /// ```
    #[inline]
    pub fn exists(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Changes the capacity of the array.
    ///
    /// Growing appends empty slots. Shrinking drops trailing slots and the
    /// values they held; that loss is irreversible.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::InvalidSize`] when storage for the new
    /// capacity cannot be reserved. The array is unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2, 3, 4, 5]);
    /// assert!(arr.resize(2).unwrap());
    /// assert_eq!(arr, [Some(1), Some(2)]);
    ///
    /// arr.resize(3).unwrap();
    /// assert_eq!(arr, [Some(1), Some(2), None]);
    /// ```
    pub fn resize(&mut self, capacity: usize) -> Result<bool> {
        let current = self.len();
        trace!(from = current, to = capacity, "resizing fixed array");

        if capacity < current {
            let discarded = self.slots[capacity..].iter().filter(|s| s.is_some()).count();
            if discarded > 0 {
                debug!(discarded, capacity, "shrink discards occupied slots");
            }
            self.slots.truncate(capacity);
            self.slots.shrink_to_fit();
        } else if capacity > current {
            self.slots
                .try_reserve_exact(capacity - current)
                .map_err(|_| FixedArrayError::InvalidSize { requested: capacity })?;
            self.slots.resize_with(capacity, || None);
        }
        Ok(true)
    }

    /// Alias for [`resize`](Self::resize).
    #[inline]
    pub fn set_size(&mut self, capacity: usize) -> Result<bool> {
        self.resize(capacity)
    }

    #[inline]
    fn grow_by_one(&mut self) {
        trace!(from = self.len(), to = self.len() + 1, "growing fixed array by one slot");
        self.slots.reserve_exact(1);
        self.slots.push(None);
    }

    /// Grows the array by one slot and stores `value` there.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2, 3]);
    /// arr.push(4);
    /// assert_eq!(arr, [Some(1), Some(2), Some(3), Some(4)]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(n) time in the worst case: the array grows by exactly one
    /// slot per call and may reallocate each time.
    #[inline]
    pub fn push(&mut self, value: T) -> &mut Self {
        self.push_slot(Some(value))
    }

    /// Alias for [`push`](Self::push).
    #[inline]
    pub fn add(&mut self, value: T) -> &mut Self {
        self.push(value)
    }

    /// Grows the array by one slot and stores `slot` there, which may be empty.
    pub fn push_slot(&mut self, slot: Option<T>) -> &mut Self {
        self.grow_by_one();
        let last = self.len() - 1;
        self.slots[last] = slot;
        self
    }

    /// Reads and clears the last slot.
    ///
    /// The capacity is *not* reduced. Returns `None` for a zero-capacity array
    /// or when the last slot is already empty.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2]);
    /// assert_eq!(arr.pop(), Some(2));
    /// assert_eq!(arr, [Some(1), None]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.slots.last_mut()?.take()
    }

    /// Reads slot 0, moves every later slot one position left and empties the
    /// last slot. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2, 3]);
    /// assert_eq!(arr.shift(), Some(1));
    /// assert_eq!(arr, [Some(2), Some(3), None]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(n) time, every remaining slot is moved.
    pub fn shift(&mut self) -> Option<T> {
        let count = self.len();
        if count == 0 { return None }

        let item = self.slots[0].take();
        for i in 1..count {
            self.slots[i - 1] = self.slots[i].take();
        }
        item
    }

    /// Grows the array by one slot, moves every slot one position right and
    /// stores `value` at index 0.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([2, 3]);
    /// arr.unshift(1);
    /// assert_eq!(arr, [Some(1), Some(2), Some(3)]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(n) time, every existing slot is moved.
    #[inline]
    pub fn unshift(&mut self, value: T) -> &mut Self {
        self.unshift_slot(Some(value))
    }

    /// Like [`unshift`](Self::unshift), but the new first slot may be empty.
    pub fn unshift_slot(&mut self, slot: Option<T>) -> &mut Self {
        let count = self.len();
        self.grow_by_one();

        // Walk backwards so no slot is overwritten before it has moved.
        for i in (0..count).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[0] = slot;
        self
    }

    /// Grows the array by one slot and stores `value` at `index`, moving the
    /// slots from `index` onwards one position right.
    ///
    /// `index == capacity` appends.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::IndexOutOfRange`] when `index > capacity`.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 3]);
    /// arr.insert(1, 2).unwrap();
    /// assert_eq!(arr, [Some(1), Some(2), Some(3)]);
    /// assert!(arr.insert(5, 0).is_err());
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`capacity - index`) time.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut Self> {
        let count = self.len();
        if index > count { return Err(FixedArrayError::out_of_range(index, count)) }

        self.grow_by_one();
        for i in (index..count).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[index] = Some(value);
        Ok(self)
    }

    /// Pushes every item, in iteration order.
    pub fn add_from<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        items.into_iter().for_each(|item| { self.push(item); });
        self
    }

    /// Pushes every slot of every source onto this array, sources in order.
    ///
    /// Empty slots in the sources are carried over as empty slots.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut target = FixedArray::from([1]);
    /// let mut other = FixedArray::from([3]);
    /// other.unshift_slot(None);
    ///
    /// target.merge([FixedArray::from([2]), other]);
    /// assert_eq!(target, [Some(1), Some(2), None, Some(3)]);
    /// ```
    pub fn merge<S, I>(&mut self, sources: S) -> &mut Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = Option<T>>,
    {
        for source in sources {
            for slot in source {
                self.push_slot(slot);
            }
        }
        self
    }

    /// Stores a clone of `value` in every slot. The capacity is unchanged.
    pub fn fill(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.slots.iter_mut().for_each(|slot| *slot = Some(value.clone()));
        self
    }

    /// Empties every slot. The capacity is unchanged.
    pub fn nullify(&mut self) -> &mut Self {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self
    }

    /// Returns an iterator over the slots.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.iter())
    }

    /// Returns an iterator over the occupied slots' values only.
    #[inline]
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self.slots.iter())
    }

    /// Borrows the raw slots.
    #[inline]
    pub fn as_slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Copies the slots into a `Vec`.
    pub fn to_vec(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.slots.clone()
    }

    /// Converts into the underlying `Vec` of slots.
    #[inline]
    pub fn into_vec(self) -> Vec<Option<T>> {
        self.slots
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    type A = FixedArray<u32>;

    #[test]
    fn create() {
        for capacity in [0, 1, 5, 64] {
            let arr = A::create(capacity).unwrap();
            assert_eq!(arr.size(), capacity);
            assert!(arr.iter().all(|slot| slot.is_none()));
        }
    }

    #[test]
    fn create_unreservable() {
        let err = A::create(usize::MAX).unwrap_err();
        assert_eq!(err, FixedArrayError::InvalidSize { requested: usize::MAX });
    }

    #[test]
    fn default_capacity() {
        let arr = A::default();
        assert_eq!(arr, [None, None, None, None, None]);
    }

    #[test]
    fn counts_agree() {
        let mut arr = A::from([1, 2]);
        arr.resize(4).unwrap();
        assert_eq!(arr.len(), 4);
        assert_eq!(arr.count(), 4);
        assert_eq!(arr.size(), 4);
        assert_eq!(arr.get_size(), 4);
        assert_eq!(arr.capacity(), 4);
        assert!(!arr.is_empty());
        assert!(A::new().is_empty());
    }

    #[test]
    fn get_and_set() {
        let mut arr = A::create(3).unwrap();
        arr.set(1, 9).unwrap();

        assert_eq!(arr.get(1).unwrap(), Some(&9));
        assert_eq!(arr.get(0).unwrap(), None);
        assert_eq!(arr.get(3), Err(FixedArrayError::out_of_range(3, 3)));
        assert_eq!(arr.set(3, 1), Err(FixedArrayError::out_of_range(3, 3)));
    }

    #[test]
    fn set_overwrites_with_empty() {
        let mut arr = A::from([1, 2]);
        arr.set_slot(0, None).unwrap();
        arr.clear(1).unwrap();
        assert_eq!(arr, [None, None]);
        assert!(arr.clear(2).is_err());
    }

    #[test]
    fn get_mut() {
        let mut arr = A::from([1, 2]);
        if let Some(v) = arr.get_mut(0).unwrap() { *v = 10; }
        assert_eq!(arr[0], Some(10));
        assert!(arr.get_mut(2).is_err());
    }

    #[test]
    fn exists() {
        let mut arr = A::from([0, 1]);
        arr.clear(1).unwrap();

        assert!(arr.exists(0));
        assert!(!arr.exists(1));
        assert!(!arr.exists(2));
    }

    #[test]
    fn index() {
        let mut arr = A::from([1, 2, 3]);
        arr[1] = None;
        assert_eq!(arr[0], Some(1));
        assert_eq!(arr[1], None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let arr = A::from([1, 2, 3]);
        let _ = arr[3];
    }

    #[test]
    fn resize_grow_and_shrink() {
        let mut arr = A::from([1, 2, 3, 4, 5]);
        assert!(arr.resize(2).unwrap());
        assert_eq!(arr, [Some(1), Some(2)]);

        assert!(arr.set_size(4).unwrap());
        assert_eq!(arr, [Some(1), Some(2), None, None]);

        assert!(arr.resize(4).unwrap());
        assert_eq!(arr.size(), 4);

        arr.resize(0).unwrap();
        assert!(arr.is_empty());
    }

    #[test]
    fn resize_unreservable_leaves_array() {
        let mut arr = A::from([1]);
        assert!(arr.resize(usize::MAX).is_err());
        assert_eq!(arr, [Some(1)]);
    }

    #[test]
    fn push() {
        let mut arr = A::from([1, 2, 3]);
        arr.push(4).add(5);
        assert_eq!(arr, [Some(1), Some(2), Some(3), Some(4), Some(5)]);

        let mut arr = A::new();
        arr.push(1);
        assert_eq!(arr, [Some(1)]);
    }

    #[test]
    fn push_keeps_empty_slots() {
        let mut arr = A::create(2).unwrap();
        arr.push(1).push_slot(None);
        assert_eq!(arr, [None, None, Some(1), None]);
    }

    #[test]
    fn pop() {
        let mut arr = A::from([3, 4]);
        assert_eq!(arr.pop(), Some(4));
        assert_eq!(arr.size(), 2);
        assert_eq!(arr.pop(), None);
        assert_eq!(arr, [Some(3), None]);

        assert_eq!(A::new().pop(), None);
    }

    #[test]
    fn push_then_pop() {
        let mut arr = A::from([1, 2]);
        arr.push(3);
        assert_eq!(arr.pop(), Some(3));
        assert_eq!(arr.size(), 3);
    }

    #[test]
    fn shift() {
        let mut arr = A::from([1, 2, 3]);
        assert_eq!(arr.shift(), Some(1));
        assert_eq!(arr, [Some(2), Some(3), None]);

        let mut arr = A::from([1, 2]);
        arr.clear(0).unwrap();
        assert_eq!(arr.shift(), None);
        assert_eq!(arr, [Some(2), None]);

        assert_eq!(A::new().shift(), None);
    }

    #[test]
    fn unshift() {
        let mut arr = A::from([2, 3]);
        arr.unshift(1);
        assert_eq!(arr, [Some(1), Some(2), Some(3)]);

        let mut arr = A::new();
        arr.unshift(1);
        assert_eq!(arr, [Some(1)]);

        let mut arr = A::from([1]);
        arr.unshift_slot(None);
        assert_eq!(arr, [None, Some(1)]);
    }

    #[test]
    fn unshift_then_shift() {
        let mut arr = A::from([1, 2, 3]);
        arr.unshift(0);
        assert_eq!(arr.shift(), Some(0));
        assert_eq!(arr, [Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn insert() {
        let mut arr = A::from([1, 3]);
        arr.insert(1, 2).unwrap();
        arr.insert(3, 4).unwrap();
        arr.insert(0, 0).unwrap();
        assert_eq!(arr, [Some(0), Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn insert_out_of_bounds() {
        let mut arr = A::from([1, 2]);
        assert_eq!(arr.insert(3, 0).unwrap_err(), FixedArrayError::out_of_range(3, 2));
        assert_eq!(arr.size(), 2);
    }

    #[test]
    fn add_from() {
        let mut arr = A::from([1]);
        arr.add_from(vec![2, 3]).add_from(A::from([4]).values().copied());
        assert_eq!(arr, [Some(1), Some(2), Some(3), Some(4)]);

        arr.add_from([]);
        assert_eq!(arr.size(), 4);
    }

    #[test]
    fn merge() {
        let mut target = A::from([1]);
        let with_gap = FixedArray::from_slots(vec![None, Some(3)]);

        let merged = target.merge([A::from([2]), with_gap]).merge([vec![Some(4)]]);
        assert_eq!(*merged, [Some(1), Some(2), None, Some(3), Some(4)]);
        assert_eq!(target.size(), 5);
    }

    #[test]
    fn fill_and_nullify() {
        let mut arr = A::create(3).unwrap();
        arr.fill(7);
        assert_eq!(arr, [Some(7), Some(7), Some(7)]);

        arr.nullify();
        assert_eq!(arr, [None, None, None]);

        let mut arr = A::new();
        arr.fill(1).nullify();
        assert!(arr.is_empty());
    }

    #[test]
    fn dropping_types() {
        let mut arr: FixedArray<String> = FixedArray::from(vec!["aa".to_string(), "bb".to_string()]);

        let popped = arr.pop();
        arr.push("ff".to_string());
        let shifted = arr.shift();
        arr.unshift("dd".to_string());

        assert_eq!(popped, Some("bb".to_string()));
        assert_eq!(shifted, Some("aa".to_string()));
        assert_eq!(arr, [Some("dd".to_string()), None, Some("ff".to_string()), None]);
    }

    #[test]
    fn conversions() {
        let arr = A::from(vec![1, 2]);
        assert_eq!(arr.to_vec(), vec![Some(1), Some(2)]);
        assert_eq!(arr.as_slots(), &[Some(1), Some(2)]);

        let slots: Vec<Option<u32>> = arr.clone().into();
        assert_eq!(slots, arr.into_vec());

        let collected: A = [Some(1), None].into_iter().collect();
        assert_eq!(collected, vec![Some(1), None]);
    }

    #[test]
    fn partial_eq() {
        let arr = A::from([1, 2]);
        let vec = vec![Some(1), Some(2)];
        assert_eq!(arr, [Some(1), Some(2)]);
        assert_eq!(arr, &[Some(1), Some(2)]);
        assert_eq!(arr, *vec.as_slice());
        assert_eq!(arr, vec.as_slice());
        assert_eq!(arr, vec);
        assert_eq!(arr, arr.clone());
    }

    #[test]
    fn debug_lists_slots() {
        let arr = FixedArray::from_slots(vec![Some(1), None]);
        assert_eq!(format!("{arr:?}"), "[Some(1), None]");
    }
}
