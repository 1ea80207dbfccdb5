use std::cmp::Ordering;

use rand::TryCryptoRng;

use crate::{FixedArray, LooseEq, NaturalOrd, Value, errors::Result};


/// A chaining handle that owns exactly one [`FixedArray`].
///
/// Chain steps take the handle by value and hand it back. Structural steps
/// (`push`, `unshift`, `fill`, ...) mutate the owned array; transform steps
/// (`map`, `filter`, `sort`, ...) rebind the handle to the new array they
/// produce. Queries borrow the handle and return plain values.
///
/// # Examples
///
/// ```
/// use fixedarr::fixed_array;
///
/// let arr = fixed_array(vec![3, 1, 2])
///     .push(5)
///     .sort()
///     .filter(|v| v.is_some_and(|v| *v < 5))
///     .into_inner();
///
/// assert_eq!(arr, [Some(1), Some(2), Some(3)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fluent<T> {
    data: FixedArray<T>,
}

impl<T> From<FixedArray<T>> for Fluent<T> {
    fn from(data: FixedArray<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vec<T>> for Fluent<T> {
    fn from(values: Vec<T>) -> Self {
        Self::make(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Fluent<T> {
    fn from(values: [T; N]) -> Self {
        Self::make(values)
    }
}

impl From<Value> for Fluent<Value> {
    /// An `Array` value is wrapped as-is; a scalar becomes a one-slot array.
    fn from(value: Value) -> Self {
        Self::make(value)
    }
}

impl<T> Fluent<T> {

    /// Wraps anything convertible into a [`FixedArray`].
    #[inline]
    pub fn make(data: impl Into<FixedArray<T>>) -> Self {
        Self { data: data.into() }
    }

    /// Wraps a single value in a one-slot array.
    #[inline]
    pub fn of(value: T) -> Self {
        Self::make([value])
    }

    /// Wraps `value` at slot 0 of a `count`-slot array.
    ///
    /// A `count` of 0 falls back to a one-slot array.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::Fluent;
    ///
    /// let wrapped = Fluent::with_count("a", 3).unwrap();
    /// assert_eq!(wrapped.to_vec(), vec![Some("a"), None, None]);
    /// ```
    pub fn with_count(value: T, count: usize) -> Result<Self> {
        if count == 0 { return Ok(Self::of(value)) }

        let mut data = FixedArray::create(count)?;
        data.set(0, value)?;
        Ok(Self { data })
    }

    /// Wraps a new array of `capacity` empty slots.
    #[inline]
    pub fn create(capacity: usize) -> Result<Self> {
        Ok(Self { data: FixedArray::create(capacity)? })
    }

    /// Borrows the wrapped array.
    #[inline]
    pub fn inner(&self) -> &FixedArray<T> { &self.data }

    /// Unwraps the array.
    #[inline]
    pub fn into_inner(self) -> FixedArray<T> { self.data }

    /// Copies the wrapped array.
    #[inline]
    pub fn to_fixed_array(&self) -> FixedArray<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.data.to_vec()
    }

    #[inline]
    pub fn size(&self) -> usize { self.data.size() }

    #[inline]
    pub fn count(&self) -> usize { self.data.count() }

    #[inline]
    pub fn get_size(&self) -> usize { self.data.get_size() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    #[inline]
    pub fn get(&self, index: usize) -> Result<Option<&T>> { self.data.get(index) }

    #[inline]
    pub fn exists(&self, index: usize) -> bool { self.data.exists(index) }

    pub fn set(mut self, index: usize, value: T) -> Result<Self> {
        self.data.set(index, value)?;
        Ok(self)
    }

    pub fn clear(mut self, index: usize) -> Result<Self> {
        self.data.clear(index)?;
        Ok(self)
    }

    pub fn resize(mut self, capacity: usize) -> Result<Self> {
        self.data.resize(capacity)?;
        Ok(self)
    }

    /// Alias for [`resize`](Self::resize).
    #[inline]
    pub fn set_size(self, capacity: usize) -> Result<Self> {
        self.resize(capacity)
    }

    pub fn push(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    /// Alias for [`push`](Self::push).
    #[inline]
    pub fn add(self, value: T) -> Self {
        self.push(value)
    }

    pub fn add_from<I: IntoIterator<Item = T>>(mut self, items: I) -> Self {
        self.data.add_from(items);
        self
    }

    pub fn unshift(mut self, value: T) -> Self {
        self.data.unshift(value);
        self
    }

    pub fn insert(mut self, index: usize, value: T) -> Result<Self> {
        self.data.insert(index, value)?;
        Ok(self)
    }

    pub fn merge<S, I>(mut self, sources: S) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = Option<T>>,
    {
        self.data.merge(sources);
        self
    }

    pub fn fill(mut self, value: T) -> Self
    where
        T: Clone,
    {
        self.data.fill(value);
        self
    }

    pub fn nullify(mut self) -> Self {
        self.data.nullify();
        self
    }

    /// Reads and clears the last slot of the wrapped array.
    #[inline]
    pub fn pop(&mut self) -> Option<T> { self.data.pop() }

    /// Pops the last slot into `output` and keeps the chain going.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::fixed_array;
    ///
    /// let mut popped = Vec::new();
    /// let rest = fixed_array([1, 2, 3])
    ///     .pop_to(&mut popped)
    ///     .pop_to(&mut popped)
    ///     .into_inner();
    ///
    /// assert_eq!(popped, vec![Some(3), None]);
    /// assert_eq!(rest, [Some(1), Some(2), None]);
    /// ```
    pub fn pop_to(mut self, output: &mut Vec<Option<T>>) -> Self {
        output.push(self.data.pop());
        self
    }

    /// Reads slot 0 and moves the rest of the wrapped array left.
    #[inline]
    pub fn shift(&mut self) -> Option<T> { self.data.shift() }

    pub fn each<F: FnMut(Option<&T>, usize)>(self, f: F) -> Self {
        self.data.each(f);
        self
    }

    pub fn map<U, F>(self, f: F) -> Fluent<U>
    where
        F: FnMut(Option<&T>) -> Option<U>,
    {
        Fluent { data: self.data.map(f) }
    }

    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnMut(Option<&T>) -> bool,
        T: Clone,
    {
        Self { data: self.data.filter(predicate) }
    }

    pub fn chunk(self, size: usize) -> Result<Fluent<FixedArray<T>>>
    where
        T: Clone,
    {
        Ok(Fluent { data: self.data.chunk(size)? })
    }

    pub fn chunk_while<F>(self, f: F) -> Fluent<FixedArray<T>>
    where
        F: FnMut(Option<&T>, usize, Option<&T>) -> bool,
        T: Clone,
    {
        Fluent { data: self.data.chunk_while(f) }
    }

    pub fn sort(self) -> Self
    where
        T: NaturalOrd + Clone,
    {
        Self { data: self.data.sort() }
    }

    pub fn sort_by<F>(self, compare: F) -> Self
    where
        F: FnMut(Option<&T>, Option<&T>) -> Ordering,
        T: Clone,
    {
        Self { data: self.data.sort_by(compare) }
    }

    pub fn unique(self) -> Self
    where
        T: PartialEq + Clone,
    {
        Self { data: self.data.unique() }
    }

    pub fn unique_loose(self) -> Self
    where
        T: LooseEq + Clone,
    {
        Self { data: self.data.unique_loose() }
    }

    pub fn reverse(self) -> Self
    where
        T: Clone,
    {
        Self { data: self.data.reverse() }
    }

    pub fn slice(self, offset: isize, length: Option<isize>) -> Self
    where
        T: Clone,
    {
        Self { data: self.data.slice(offset, length) }
    }

    pub fn shuffle(self) -> Result<Self>
    where
        T: Clone,
    {
        Ok(Self { data: self.data.shuffle()? })
    }

    pub fn shuffle_with<R: TryCryptoRng>(self, rng: &mut R) -> Result<Self>
    where
        T: Clone,
    {
        Ok(Self { data: self.data.shuffle_with(rng)? })
    }

    /// Strict membership test, the same default as [`FixedArray::contains`].
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(value)
    }

    #[inline]
    pub fn contains_loose(&self, value: &T) -> bool
    where
        T: LooseEq,
    {
        self.data.contains_loose(value)
    }

    #[inline]
    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(Option<&T>, usize) -> bool,
    {
        self.data.find(predicate)
    }

    #[inline]
    pub fn find_key<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(Option<&T>, usize) -> bool,
    {
        self.data.find_key(predicate)
    }

    /// Alias for [`find_key`](Self::find_key).
    #[inline]
    pub fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(Option<&T>, usize) -> bool,
    {
        self.data.find_key(predicate)
    }

    #[inline]
    pub fn first(&self) -> Result<Option<&T>> { self.data.first() }

    #[inline]
    pub fn last(&self) -> Result<Option<&T>> { self.data.last() }

    #[inline]
    pub fn second(&self) -> Option<&T> { self.data.second() }

    #[inline]
    pub fn random(&self) -> Result<Option<&T>> { self.data.random() }

    #[inline]
    pub fn random_with<R: TryCryptoRng>(&self, rng: &mut R) -> Result<Option<&T>> {
        self.data.random_with(rng)
    }
}

impl<T: Clone> Fluent<FixedArray<T>> {

    /// Joins the wrapped chunks back into one array.
    pub fn concat(self) -> Fluent<T> {
        Fluent { data: self.data.concat() }
    }
}

impl Fluent<Value> {

    /// Rebinds the handle to the flattened array, see [`FixedArray::flatten`].
    pub fn flatten(self, depth: Option<usize>) -> Self {
        Self { data: self.data.flatten(depth) }
    }
}
