use std::{iter::FusedIterator, slice, vec};

use super::FixedArray;


/// Borrowing iterator over the slots of a [`FixedArray`].
///
/// Yields `None` for empty slots, so the number of items always equals the
/// array's capacity.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(inner: slice::Iter<'a, Option<T>>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.next().map(Option::as_ref) }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.next_back().map(Option::as_ref) }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}


/// Borrowing iterator over the values of the occupied slots only.
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Values<'a, T> {
    #[inline]
    pub(super) fn new(inner: slice::Iter<'a, Option<T>>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.inner.size_hint().1) }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.inner.next_back() {
            if let Some(value) = slot { return Some(value) }
        }
        None
    }
}

impl<T> FusedIterator for Values<'_, T> {}


/// Owning iterator over the slots of a [`FixedArray`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.next() }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}


impl<T> IntoIterator for FixedArray<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { IntoIter { inner: self.slots.into_iter() } }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
