//! Range capability tiers.
//!
//! A range is a cursor over a sequence. Each tier adds operations to the one
//! before it:
//!
//! 1. [`InputRange`]: single pass, `is_empty`/`front`/`pop_front`
//! 2. [`ForwardRange`]: `save` duplicates the cursor
//! 3. [`BidirectionalRange`]: `back`/`pop_back`
//! 4. [`RandomAccessRange`]: O(1) `len`, `at` and `advance_by`
//!
//! Algorithms are bounded by the weakest tier they need. Ranges that never
//! become empty set [`InputRange::IS_INFINITE`], which lets algorithms that
//! must consume their input reject them at compile time.

use crate::adapters::RangeIter;

/// Single-pass cursor over a sequence.
pub trait InputRange {
    type Item;

    /// True for ranges that never become empty.
    const IS_INFINITE: bool = false;

    /// Returns true when no elements remain.
    fn is_empty(&self) -> bool;

    /// Returns the current element.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    fn front(&self) -> Self::Item;

    /// Moves past the current element.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    fn pop_front(&mut self);

    /// Number of remaining elements, when it is known in O(1).
    fn known_len(&self) -> Option<usize> {
        None
    }

    /// Consumes the range into a standard iterator.
    fn elements(self) -> RangeIter<Self>
    where
        Self: Sized,
    {
        RangeIter::new(self)
    }
}

/// A range whose position can be duplicated.
///
/// The duplicate and the original evolve independently.
pub trait ForwardRange: InputRange + Clone {
    fn save(&self) -> Self {
        self.clone()
    }
}

/// A forward range that can also be consumed from the back.
pub trait BidirectionalRange: ForwardRange {
    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    fn back(&self) -> Self::Item;

    /// Drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    fn pop_back(&mut self);
}

/// A finite bidirectional range with O(1) indexing.
pub trait RandomAccessRange: BidirectionalRange {
    fn len(&self) -> usize;

    /// Returns the element `index` positions past the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at(&self, index: usize) -> Self::Item;

    /// Drops the first `n` elements in O(1).
    ///
    /// # Panics
    ///
    /// Panics if `n > self.len()`.
    fn advance_by(&mut self, n: usize);
}

#[track_caller]
#[inline]
pub(crate) fn assert_nonempty<R: InputRange>(range: &R, operation: &str) {
    assert!(
        !range.is_empty(),
        "Attempting to {} an empty range",
        operation
    );
}

impl<'a, T> InputRange for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    #[inline]
    fn front(&self) -> &'a T {
        assert_nonempty(self, "fetch the front of");
        let slice: &'a [T] = *self;
        &slice[0]
    }

    #[inline]
    fn pop_front(&mut self) {
        assert_nonempty(self, "pop the front of");
        let slice: &'a [T] = *self;
        *self = &slice[1..];
    }

    #[inline]
    fn known_len(&self) -> Option<usize> {
        Some(<[T]>::len(self))
    }
}

impl<T> ForwardRange for &[T] {}

impl<'a, T> BidirectionalRange for &'a [T] {
    #[inline]
    fn back(&self) -> &'a T {
        assert_nonempty(self, "fetch the back of");
        let slice: &'a [T] = *self;
        &slice[slice.len() - 1]
    }

    #[inline]
    fn pop_back(&mut self) {
        assert_nonempty(self, "pop the back of");
        let slice: &'a [T] = *self;
        *self = &slice[..slice.len() - 1];
    }
}

impl<'a, T> RandomAccessRange for &'a [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &'a T {
        let slice: &'a [T] = *self;
        &slice[index]
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        let slice: &'a [T] = *self;
        *self = &slice[n..];
    }
}

// Strings are ranges of decoded chars. Their length in chars is not O(1),
// so they stop at the bidirectional tier.
impl<'a> InputRange for &'a str {
    type Item = char;

    #[inline]
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    #[inline]
    fn front(&self) -> char {
        match self.chars().next() {
            Some(c) => c,
            None => panic!("Attempting to fetch the front of an empty range"),
        }
    }

    #[inline]
    fn pop_front(&mut self) {
        let s: &'a str = *self;
        let width = InputRange::front(&s).len_utf8();
        *self = &s[width..];
    }
}

impl ForwardRange for &str {}

impl<'a> BidirectionalRange for &'a str {
    #[inline]
    fn back(&self) -> char {
        match self.chars().next_back() {
            Some(c) => c,
            None => panic!("Attempting to fetch the back of an empty range"),
        }
    }

    #[inline]
    fn pop_back(&mut self) {
        let s: &'a str = *self;
        let width = BidirectionalRange::back(&s).len_utf8();
        *self = &s[..s.len() - width];
    }
}

macro_rules! integer_ranges {
    ($($t:ty),* $(,)?) => {$(
        impl InputRange for std::ops::Range<$t> {
            type Item = $t;

            #[inline]
            fn is_empty(&self) -> bool {
                self.start >= self.end
            }

            #[inline]
            fn front(&self) -> $t {
                assert_nonempty(self, "fetch the front of");
                self.start
            }

            #[inline]
            fn pop_front(&mut self) {
                assert_nonempty(self, "pop the front of");
                self.start += 1;
            }

            #[inline]
            fn known_len(&self) -> Option<usize> {
                Some(RandomAccessRange::len(self))
            }
        }

        impl ForwardRange for std::ops::Range<$t> {}

        impl BidirectionalRange for std::ops::Range<$t> {
            #[inline]
            fn back(&self) -> $t {
                assert_nonempty(self, "fetch the back of");
                self.end - 1
            }

            #[inline]
            fn pop_back(&mut self) {
                assert_nonempty(self, "pop the back of");
                self.end -= 1;
            }
        }

        impl RandomAccessRange for std::ops::Range<$t> {
            #[inline]
            fn len(&self) -> usize {
                if self.start >= self.end {
                    0
                } else {
                    (self.end as i128 - self.start as i128) as usize
                }
            }

            #[inline]
            fn at(&self, index: usize) -> $t {
                assert!(
                    index < RandomAccessRange::len(self),
                    "index {} out of bounds for range of length {}",
                    index,
                    RandomAccessRange::len(self)
                );
                (self.start as i128 + index as i128) as $t
            }

            #[inline]
            fn advance_by(&mut self, n: usize) {
                assert!(
                    n <= RandomAccessRange::len(self),
                    "cannot advance by {} past the end of a range of length {}",
                    n,
                    RandomAccessRange::len(self)
                );
                self.start = (self.start as i128 + n as i128) as $t;
            }
        }

        /// Counts up without end.
        ///
        /// # Panics
        ///
        /// `pop_front` panics once the front is the type's maximum value, in
        /// release builds as well as debug builds.
        impl InputRange for std::ops::RangeFrom<$t> {
            type Item = $t;
            const IS_INFINITE: bool = true;

            #[inline]
            fn is_empty(&self) -> bool {
                false
            }

            #[inline]
            fn front(&self) -> $t {
                self.start
            }

            #[inline]
            fn pop_front(&mut self) {
                self.start = match self.start.checked_add(1) {
                    Some(next) => next,
                    None => panic!(
                        "RangeFrom<{}> overflowed past its maximum value",
                        stringify!($t)
                    ),
                };
            }
        }

        impl ForwardRange for std::ops::RangeFrom<$t> {}
    )*};
}

integer_ranges!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
