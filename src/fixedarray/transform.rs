use std::{cmp::Ordering, mem};

use rand::{TryCryptoRng, rngs::OsRng};

use super::FixedArray;
use crate::{errors::{FixedArrayError, Result}, loose::{LooseEq, slots_loose_eq}, natural::NaturalOrd, random};


impl<T> FixedArray<T> {

    /// Applies `f` to every slot, in index order, producing a new array of
    /// the same capacity.
    ///
    /// `f` is called for empty slots as well and receives `None`.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2]);
    /// arr.push_slot(None);
    ///
    /// let doubled = arr.map(|v| v.map(|v| v * 2));
    /// assert_eq!(doubled, [Some(2), Some(4), None]);
    ///
    /// let filled = arr.map(|v| Some(v.copied().unwrap_or(0)));
    /// assert_eq!(filled, [Some(1), Some(2), Some(0)]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> FixedArray<U>
    where
        F: FnMut(Option<&T>) -> Option<U>,
    {
        self.iter().map(f).collect()
    }

    /// Keeps the slots for which `predicate` holds, without gaps.
    ///
    /// The predicate sees empty slots and may keep them. The result's
    /// capacity is the number of kept slots.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let arr = FixedArray::from([1, 2, 3, 4]);
    /// let even = arr.filter(|v| v.is_some_and(|v| v % 2 == 0));
    /// assert_eq!(even, [Some(2), Some(4)]);
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(Option<&T>) -> bool,
        T: Clone,
    {
        self.iter()
            .filter(|slot| predicate(*slot))
            .map(|slot| slot.cloned())
            .collect()
    }

    /// Splits the slots into consecutive arrays of `size` slots; the last one
    /// may be shorter.
    ///
    /// A zero-capacity array yields a zero-capacity result, not one empty chunk.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::InvalidArgument`] when `size` is 0.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let chunks = FixedArray::from([1, 2, 3, 4, 5]).chunk(2).unwrap();
    /// assert_eq!(chunks.size(), 3);
    /// assert_eq!(chunks[2], Some(FixedArray::from([5])));
    /// ```
    pub fn chunk(&self, size: usize) -> Result<FixedArray<FixedArray<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(FixedArrayError::InvalidArgument("chunk size must be greater than zero"))
        }

        Ok(FixedArray::from_values(
            self.slots.chunks(size).map(|chunk| FixedArray::from_slots(chunk.to_vec()))
        ))
    }

    /// Splits the slots into runs, starting a new run whenever `f` returns
    /// `false`.
    ///
    /// `f` receives the current slot, its index, and the slot immediately
    /// before it. The first slot always opens the first run without a call.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let arr = FixedArray::from([1, 2, 3, 7, 8, 10]);
    /// let runs = arr.chunk_while(|v, _, prev| match (v, prev) {
    ///     (Some(v), Some(prev)) => *v == prev + 1,
    ///     _ => false,
    /// });
    ///
    /// assert_eq!(runs.size(), 3);
    /// assert_eq!(runs[1], Some(FixedArray::from([7, 8])));
    /// ```
    pub fn chunk_while<F>(&self, mut f: F) -> FixedArray<FixedArray<T>>
    where
        F: FnMut(Option<&T>, usize, Option<&T>) -> bool,
        T: Clone,
    {
        let mut chunks = Vec::new();
        let mut current = Vec::new();
        let mut previous = None;

        for (key, slot) in self.iter().enumerate() {
            if !current.is_empty() && !f(slot, key, previous) {
                chunks.push(FixedArray::from_slots(mem::take(&mut current)));
            }
            current.push(slot.cloned());
            previous = slot;
        }

        if !current.is_empty() {
            chunks.push(FixedArray::from_slots(current));
        }
        FixedArray::from_values(chunks)
    }

    /// Returns the slots in ascending natural order.
    ///
    /// Ordering follows [`NaturalOrd`]: empty slots sort first and `NaN`
    /// sorts after every other number, at any nesting depth. The sort is
    /// stable.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let sorted = FixedArray::from([3, 1, 4, 2]).sort();
    /// assert_eq!(sorted, [Some(1), Some(2), Some(3), Some(4)]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(n log n) time.
    pub fn sort(&self) -> Self
    where
        T: NaturalOrd + Clone,
    {
        let mut slots = self.slots.clone();
        slots.sort_by(NaturalOrd::natural_cmp);
        Self::from_slots(slots)
    }

    /// Returns the slots sorted by `compare`, which sees empty slots as `None`.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let desc = FixedArray::from([3, 1, 4, 2]).sort_by(|a, b| b.cmp(&a));
    /// assert_eq!(desc, [Some(4), Some(3), Some(2), Some(1)]);
    /// ```
    pub fn sort_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(Option<&T>, Option<&T>) -> Ordering,
        T: Clone,
    {
        let mut slots = self.slots.clone();
        slots.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
        Self::from_slots(slots)
    }

    fn dedup_with<F>(&self, same: F) -> Self
    where
        F: Fn(Option<&T>, Option<&T>) -> bool,
        T: Clone,
    {
        let mut kept: Vec<Option<&T>> = Vec::new();
        for slot in self.iter() {
            if !kept.iter().any(|k| same(*k, slot)) {
                kept.push(slot);
            }
        }
        kept.into_iter().map(|slot| slot.cloned()).collect()
    }

    /// Removes strictly equal duplicates, keeping first occurrences in order.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::values;
    ///
    /// assert_eq!(values![1, true, 2, 2, "1"].unique(), values![1, true, 2, "1"]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(n²) time; only equality is required of `T`.
    pub fn unique(&self) -> Self
    where
        T: PartialEq + Clone,
    {
        self.dedup_with(|a, b| a == b)
    }

    /// Removes loosely equal duplicates, keeping first occurrences in order.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::values;
    ///
    /// assert_eq!(values![1, "1", true].unique_loose(), values![1]);
    /// ```
    pub fn unique_loose(&self) -> Self
    where
        T: LooseEq + Clone,
    {
        self.dedup_with(slots_loose_eq)
    }

    /// Returns the slots in reverse order.
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.slots.iter().rev().cloned().collect()
    }

    /// Returns a copy of a run of slots.
    ///
    /// A negative `offset` counts from the end. `length` of `None` runs to the
    /// end; a negative `length` stops that many slots before the end. Offsets
    /// past the end yield a zero-capacity array.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let arr = FixedArray::from([1, 2, 3, 4, 5]);
    /// assert_eq!(arr.slice(1, Some(3)), [Some(2), Some(3), Some(4)]);
    /// assert_eq!(arr.slice(-2, None), [Some(4), Some(5)]);
    /// assert_eq!(arr.slice(1, Some(-2)), [Some(2), Some(3)]);
    /// assert!(arr.slice(9, None).is_empty());
    /// ```
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Self
    where
        T: Clone,
    {
        // `Vec` never holds more than `isize::MAX` slots.
        let count = self.len() as isize;

        let start = match offset {
            o if o < 0 => (count + o).max(0),
            o => o.min(count),
        };
        let end = match length {
            None => count,
            Some(l) if l < 0 => (count + l).max(start),
            Some(l) => start.saturating_add(l).min(count),
        };

        self.slots[start as usize..end as usize].iter().cloned().collect()
    }

    /// Returns the slots in a random order, using a Fisher-Yates shuffle
    /// driven by the operating system's secure random source.
    ///
    /// The array itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::RandomSource`] if the source fails.
    #[inline]
    pub fn shuffle(&self) -> Result<Self>
    where
        T: Clone,
    {
        self.shuffle_with(&mut OsRng)
    }

    /// Like [`shuffle`](Self::shuffle), drawing from the given secure source.
    pub fn shuffle_with<R: TryCryptoRng>(&self, rng: &mut R) -> Result<Self>
    where
        T: Clone,
    {
        let mut slots = self.slots.clone();
        for i in (1..slots.len()).rev() {
            let j = random::index_in(rng, i)?;
            slots.swap(i, j);
        }
        Ok(Self::from_slots(slots))
    }
}

impl<T: Clone> FixedArray<FixedArray<T>> {

    /// Joins nested arrays one level deep, skipping empty outer slots.
    ///
    /// Undoes [`chunk`](FixedArray::chunk).
    ///
    /// # Examples
    /// ```
    /// use fixedarr::FixedArray;
    ///
    /// let arr = FixedArray::from([1, 2, 3]);
    /// assert_eq!(arr.chunk(2).unwrap().concat(), arr);
    /// ```
    pub fn concat(&self) -> FixedArray<T> {
        self.values()
            .flat_map(|inner| inner.iter().map(|slot| slot.cloned()))
            .collect()
    }
}
