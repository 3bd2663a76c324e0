use crate::range::{assert_nonempty, BidirectionalRange, ForwardRange, InputRange, RandomAccessRange};
use std::iter::FusedIterator;

/// Lazy prefix of at most `n` elements of a range.
///
/// Splitting and prefix operations return their leading pieces as `Take`,
/// which keeps them lazy over any forward range. Over random-access sources
/// it is random-access itself.
#[derive(Debug, Clone)]
pub struct Take<R> {
    source: R,
    remaining: usize,
}

/// Creates a view over the first `n` elements of `source`.
pub fn take<R: InputRange>(source: R, n: usize) -> Take<R> {
    Take {
        source,
        remaining: n,
    }
}

impl<R: InputRange> Take<R> {
    /// Returns the unconsumed part of the underlying range, ignoring the limit.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: InputRange> InputRange for Take<R> {
    type Item = R::Item;

    fn is_empty(&self) -> bool {
        self.remaining == 0 || self.source.is_empty()
    }

    fn front(&self) -> R::Item {
        assert_nonempty(self, "fetch the front of");
        self.source.front()
    }

    fn pop_front(&mut self) {
        assert_nonempty(self, "pop the front of");
        self.source.pop_front();
        self.remaining -= 1;
    }

    fn known_len(&self) -> Option<usize> {
        if R::IS_INFINITE {
            return Some(self.remaining);
        }
        self.source.known_len().map(|len| len.min(self.remaining))
    }
}

impl<R: ForwardRange> ForwardRange for Take<R> {}

impl<R: RandomAccessRange> BidirectionalRange for Take<R> {
    fn back(&self) -> R::Item {
        assert_nonempty(self, "fetch the back of");
        self.source.at(RandomAccessRange::len(self) - 1)
    }

    fn pop_back(&mut self) {
        assert_nonempty(self, "pop the back of");
        self.remaining = RandomAccessRange::len(self) - 1;
    }
}

impl<R: RandomAccessRange> RandomAccessRange for Take<R> {
    fn len(&self) -> usize {
        self.source.len().min(self.remaining)
    }

    fn at(&self, index: usize) -> R::Item {
        assert!(
            index < RandomAccessRange::len(self),
            "index {} out of bounds for range of length {}",
            index,
            RandomAccessRange::len(self)
        );
        self.source.at(index)
    }

    fn advance_by(&mut self, n: usize) {
        let len = RandomAccessRange::len(self);
        assert!(
            n <= len,
            "cannot advance by {} past the end of a range of length {}",
            n,
            len
        );
        self.source.advance_by(n);
        self.remaining = len - n;
    }
}

/// Standard iterator over the elements of a range.
///
/// Created by [`InputRange::elements`].
#[derive(Debug, Clone)]
pub struct RangeIter<R> {
    range: R,
}

impl<R: InputRange> RangeIter<R> {
    pub(crate) fn new(range: R) -> Self {
        Self { range }
    }

    /// Returns the remaining range.
    pub fn into_range(self) -> R {
        self.range
    }
}

impl<R: InputRange> Iterator for RangeIter<R> {
    type Item = R::Item;

    fn next(&mut self) -> Option<R::Item> {
        if self.range.is_empty() {
            return None;
        }
        let item = self.range.front();
        self.range.pop_front();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if R::IS_INFINITE {
            return (usize::MAX, None);
        }
        match self.range.known_len() {
            Some(len) => (len, Some(len)),
            None => (0, None),
        }
    }
}

impl<R: BidirectionalRange> DoubleEndedIterator for RangeIter<R> {
    fn next_back(&mut self) -> Option<R::Item> {
        if self.range.is_empty() {
            return None;
        }
        let item = self.range.back();
        self.range.pop_back();
        Some(item)
    }
}

impl<R: InputRange> FusedIterator for RangeIter<R> {}

/// Range over the items of a standard iterator.
///
/// Buffers one item so `front` can be observed without consuming it. The
/// range is forward when the iterator is `Clone`.
pub struct IterRange<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
}

/// Wraps any iterable as an input range.
pub fn iter_range<I>(iterable: I) -> IterRange<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut iter = iterable.into_iter();
    let head = iter.next();
    IterRange { iter, head }
}

impl<I> Clone for IterRange<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            head: self.head.clone(),
        }
    }
}

impl<I> std::fmt::Debug for IterRange<I>
where
    I: Iterator,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterRange").field("head", &self.head).finish()
    }
}

impl<I> InputRange for IterRange<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn front(&self) -> I::Item {
        match &self.head {
            Some(item) => item.clone(),
            None => panic!("Attempting to fetch the front of an empty range"),
        }
    }

    fn pop_front(&mut self) {
        assert_nonempty(self, "pop the front of");
        self.head = self.iter.next();
    }
}

impl<I> ForwardRange for IterRange<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
}

/// Restricts a range to the input tier.
///
/// Useful for checking that an algorithm works on single-pass sources.
#[derive(Debug)]
pub struct InputOnly<R> {
    inner: R,
}

pub fn input_only<R: InputRange>(inner: R) -> InputOnly<R> {
    InputOnly { inner }
}

impl<R: InputRange> InputRange for InputOnly<R> {
    type Item = R::Item;
    const IS_INFINITE: bool = R::IS_INFINITE;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn front(&self) -> R::Item {
        self.inner.front()
    }

    fn pop_front(&mut self) {
        self.inner.pop_front()
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()
    }
}

/// Infinite range yielding the same value forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> InputRange for Repeat<T> {
    type Item = T;
    const IS_INFINITE: bool = true;

    fn is_empty(&self) -> bool {
        false
    }

    fn front(&self) -> T {
        self.value.clone()
    }

    fn pop_front(&mut self) {}
}

impl<T: Clone> ForwardRange for Repeat<T> {}
