//! Equality, ordering and extremum queries over ranges.

use crate::error::{Error, Result};
use crate::range::{ForwardRange, InputRange};
use std::cmp::Ordering;

/// Returns true if both ranges have the same length and equal elements.
///
/// ```
/// use searching_rs::equal;
///
/// assert!(equal(&[1, 2, 3][..], &[1, 2, 3][..]));
/// assert!(!equal("abc", "ab"));
/// ```
pub fn equal<R1, R2>(r1: R1, r2: R2) -> bool
where
    R1: InputRange,
    R2: InputRange,
    R1::Item: PartialEq<R2::Item>,
{
    equal_by(r1, r2, |a, b| a == b)
}

/// Returns true if both ranges have the same length and `pred` holds for
/// every pair of elements at the same position.
///
/// When both lengths are known and differ, `pred` is never called. Against an
/// infinite range a finite one is never equal.
pub fn equal_by<R1, R2, P>(mut r1: R1, mut r2: R2, mut pred: P) -> bool
where
    R1: InputRange,
    R2: InputRange,
    P: FnMut(&R1::Item, &R2::Item) -> bool,
{
    const {
        assert!(
            !(R1::IS_INFINITE && R2::IS_INFINITE),
            "cannot compare two infinite ranges for equality"
        )
    };
    if R1::IS_INFINITE || R2::IS_INFINITE {
        return false;
    }

    if let (Some(a), Some(b)) = (r1.known_len(), r2.known_len()) {
        if a != b {
            return false;
        }
    }

    loop {
        match (r1.is_empty(), r2.is_empty()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        if !pred(&r1.front(), &r2.front()) {
            return false;
        }
        r1.pop_front();
        r2.pop_front();
    }
}

/// Lexicographic three-way comparison using `<`.
///
/// A proper prefix compares less than the longer range.
pub fn compare<R1, R2>(r1: R1, r2: R2) -> Ordering
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    R1::Item: PartialOrd,
{
    compare_by(r1, r2, |a, b| a < b)
}

/// Lexicographic three-way comparison under the strict order `less`.
///
/// At each position `less(a, b)` is checked before `less(b, a)`; elements
/// ordered in neither direction are equivalent.
pub fn compare_by<R1, R2, P>(mut r1: R1, mut r2: R2, mut less: P) -> Ordering
where
    R1: InputRange,
    R2: InputRange<Item = R1::Item>,
    P: FnMut(&R1::Item, &R1::Item) -> bool,
{
    loop {
        if r1.is_empty() {
            return if r2.is_empty() {
                Ordering::Equal
            } else {
                Ordering::Less
            };
        }
        if r2.is_empty() {
            return Ordering::Greater;
        }

        let (a, b) = (r1.front(), r2.front());
        if less(&a, &b) {
            return Ordering::Less;
        }
        if less(&b, &a) {
            return Ordering::Greater;
        }
        r1.pop_front();
        r2.pop_front();
    }
}

/// Advances both ranges while their elements are equal.
///
/// Returns the two suffixes starting at the first difference, or at the end
/// of the shorter range.
pub fn mismatch<R1, R2>(r1: R1, r2: R2) -> (R1, R2)
where
    R1: InputRange,
    R2: InputRange,
    R1::Item: PartialEq<R2::Item>,
{
    mismatch_by(r1, r2, |a, b| a == b)
}

pub fn mismatch_by<R1, R2, P>(mut r1: R1, mut r2: R2, mut pred: P) -> (R1, R2)
where
    R1: InputRange,
    R2: InputRange,
    P: FnMut(&R1::Item, &R2::Item) -> bool,
{
    const {
        assert!(
            !(R1::IS_INFINITE && R2::IS_INFINITE),
            "mismatch needs at least one finite range"
        )
    };

    while !r1.is_empty() && !r2.is_empty() && pred(&r1.front(), &r2.front()) {
        r1.pop_front();
        r2.pop_front();
    }
    (r1, r2)
}

/// Pairwise minimum and maximum with a common result type.
///
/// Operands of the same type compare with `PartialOrd` and ties return the
/// left operand. A signed and an unsigned primitive integer are both widened
/// to `i128` first, so a negative value always orders below any unsigned one.
/// This is the trait behind the [`min!`](crate::min) and
/// [`max!`](crate::max) macros.
///
/// `u128` has no type wide enough to hold it alongside a signed integer, so it
/// only pairs with itself:
///
/// ```compile_fail
/// use searching_rs::min;
///
/// let _ = min!(-1i32, 1u128);
/// ```
pub trait Extremum<Rhs = Self> {
    type Output;

    fn min_of(self, rhs: Rhs) -> Self::Output;

    fn max_of(self, rhs: Rhs) -> Self::Output;
}

impl<T: PartialOrd> Extremum<T> for T {
    type Output = T;

    #[inline]
    fn min_of(self, rhs: T) -> T {
        if rhs < self {
            rhs
        } else {
            self
        }
    }

    #[inline]
    fn max_of(self, rhs: T) -> T {
        if self < rhs {
            rhs
        } else {
            self
        }
    }
}

macro_rules! mixed_sign_extremum {
    ($($signed:ty),*; $unsigned:tt) => {
        $( mixed_sign_extremum!(@pairs $signed; $unsigned); )*
    };
    (@pairs $signed:ty; ($($unsigned:ty),*)) => {$(
        impl Extremum<$unsigned> for $signed {
            type Output = i128;

            #[inline]
            fn min_of(self, rhs: $unsigned) -> i128 {
                (self as i128).min_of(rhs as i128)
            }

            #[inline]
            fn max_of(self, rhs: $unsigned) -> i128 {
                (self as i128).max_of(rhs as i128)
            }
        }

        impl Extremum<$signed> for $unsigned {
            type Output = i128;

            #[inline]
            fn min_of(self, rhs: $signed) -> i128 {
                (self as i128).min_of(rhs as i128)
            }

            #[inline]
            fn max_of(self, rhs: $signed) -> i128 {
                (self as i128).max_of(rhs as i128)
            }
        }
    )*};
}

mixed_sign_extremum!(i8, i16, i32, i64, i128, isize; (u8, u16, u32, u64, usize));

/// Minimum of one or more values, folded left to right.
///
/// ```
/// use searching_rs::min;
///
/// assert_eq!(min!(3i32, 1i32, 2i32), 1);
/// assert_eq!(min!(-1i32, 0u32), -1i128);
/// ```
#[macro_export]
macro_rules! min {
    ($x:expr $(,)?) => { $x };
    ($x:expr, $y:expr $(, $rest:expr)* $(,)?) => {
        $crate::min!($crate::Extremum::min_of($x, $y) $(, $rest)*)
    };
}

/// Maximum of one or more values, folded left to right.
///
/// ```
/// use searching_rs::max;
///
/// assert_eq!(max!(3u8, 7u8, 2u8), 7);
/// assert_eq!(max!(-1i64, 5u8), 5i128);
/// ```
#[macro_export]
macro_rules! max {
    ($x:expr $(,)?) => { $x };
    ($x:expr, $y:expr $(, $rest:expr)* $(,)?) => {
        $crate::max!($crate::Extremum::max_of($x, $y) $(, $rest)*)
    };
}

/// Returns the minimum element and how many elements are equivalent to it.
///
/// ```
/// use searching_rs::min_element_with_count;
///
/// let data = [2, 3, 4, 1, 2, 4, 1, 1, 2];
/// assert_eq!(min_element_with_count(&data[..]), Ok((&1, 3)));
/// ```
pub fn min_element_with_count<R>(range: R) -> Result<(R::Item, usize)>
where
    R: InputRange,
    R::Item: PartialOrd,
{
    min_element_with_count_by(range, |a, b| a < b)
}

/// Like [`min_element_with_count`] under the strict order `less`.
///
/// An element less than the current minimum replaces it and resets the count
/// to one; an element ordered in neither direction increments the count.
pub fn min_element_with_count_by<R, P>(mut range: R, mut less: P) -> Result<(R::Item, usize)>
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    const { assert!(!R::IS_INFINITE, "cannot count elements of an infinite range") };

    if range.is_empty() {
        return Err(Error::EmptyRange);
    }

    let mut min = range.front();
    let mut count = 1;
    range.pop_front();

    while !range.is_empty() {
        let current = range.front();
        if less(&current, &min) {
            min = current;
            count = 1;
        } else if !less(&min, &current) {
            count += 1;
        }
        range.pop_front();
    }

    Ok((min, count))
}

/// Returns the maximum element and how many elements are equivalent to it.
pub fn max_element_with_count<R>(range: R) -> Result<(R::Item, usize)>
where
    R: InputRange,
    R::Item: PartialOrd,
{
    min_element_with_count_by(range, |a, b| b < a)
}

pub fn max_element_with_count_by<R, P>(range: R, mut less: P) -> Result<(R::Item, usize)>
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    min_element_with_count_by(range, move |a, b| less(b, a))
}

/// Returns the suffix of `range` starting at its first minimal element.
///
/// ```
/// use searching_rs::min_subrange;
///
/// let data = [4, 2, 5, 1, 3, 1];
/// assert_eq!(min_subrange(&data[..]), Ok(&[1, 3, 1][..]));
/// ```
pub fn min_subrange<R>(range: R) -> Result<R>
where
    R: ForwardRange,
    R::Item: PartialOrd,
{
    min_subrange_by(range, |a, b| a < b)
}

/// Like [`min_subrange`] under `less`; calls it once per element after the
/// first.
pub fn min_subrange_by<R, P>(mut range: R, mut less: P) -> Result<R>
where
    R: ForwardRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    const { assert!(!R::IS_INFINITE, "an infinite range has no minimal suffix") };

    if range.is_empty() {
        return Err(Error::EmptyRange);
    }

    let mut result = range.save();
    let mut best = range.front();
    range.pop_front();

    while !range.is_empty() {
        let current = range.front();
        if less(&current, &best) {
            result = range.save();
            best = current;
        }
        range.pop_front();
    }

    Ok(result)
}

/// Returns the suffix of `range` starting at its first maximal element.
pub fn max_subrange<R>(range: R) -> Result<R>
where
    R: ForwardRange,
    R::Item: PartialOrd,
{
    min_subrange_by(range, |a, b| b < a)
}

pub fn max_subrange_by<R, P>(range: R, mut less: P) -> Result<R>
where
    R: ForwardRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    min_subrange_by(range, move |a, b| less(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{input_only, repeat};

    #[test]
    fn test_equal() {
        let a = [1, 2, 3];
        assert!(equal(&a[..], &a[..]));
        assert!(!equal(&a[..], &a[1..]));
        assert!(equal("", ""));
        assert!(equal(input_only("abc"), "abc"));
        assert!(!equal(input_only("abc"), "abd"));
    }

    #[test]
    fn test_equal_length_shortcut_skips_pred() {
        let a = [1, 2, 3];
        let b = [1, 2];
        let mut calls = 0;
        assert!(!equal_by(&a[..], &b[..], |x, y| {
            calls += 1;
            x == y
        }));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_equal_against_infinite() {
        assert!(!equal(&[1, 1][..], repeat(&1)));
    }

    #[test]
    fn test_equal_by_case_insensitive() {
        assert!(equal_by("Hello", "hELLO", |a: &char, b: &char| {
            a.eq_ignore_ascii_case(b)
        }));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare("abc", "abc"), Ordering::Equal);
        assert_eq!(compare("ab", "abc"), Ordering::Less);
        assert_eq!(compare("abd", "abc"), Ordering::Greater);
        assert_eq!(compare("", ""), Ordering::Equal);
        assert_eq!(compare(&[2][..], &[1, 9][..]), Ordering::Greater);
    }

    #[test]
    fn test_compare_by_reversed_order() {
        let a = [1, 2, 3];
        let b = [1, 3, 0];
        assert_eq!(compare_by(&a[..], &b[..], |x, y| x > y), Ordering::Greater);
    }

    #[test]
    fn test_mismatch() {
        let a = [1, 2, 3, 4];
        let b = [1, 2, 5];
        let (ra, rb) = mismatch(&a[..], &b[..]);
        assert_eq!(ra, &[3, 4]);
        assert_eq!(rb, &[5]);

        let (ra, rb) = mismatch("abc", "abcdef");
        assert_eq!(ra, "");
        assert_eq!(rb, "def");
    }

    #[test]
    fn test_min_max_same_type() {
        assert_eq!(min!(5i32), 5);
        assert_eq!(min!(3i32, 1i32, 2i32), 1);
        assert_eq!(max!(3i32, 1i32, 2i32), 3);
        assert_eq!(min!(2.5f64, -1.0f64, 7.0f64), -1.0);
        assert_eq!(max!("pear", "apple", "zucchini"), "zucchini");
    }

    #[test]
    fn test_min_max_mixed_sign() {
        assert_eq!(min!(-1i32, 0u32), -1i128);
        assert_eq!(max!(-1i32, 0u32), 0i128);
        assert_eq!(min!(u64::MAX, -5i64, 3u8), -5i128);
        assert_eq!(max!(i8::MIN, u64::MAX), u64::MAX as i128);
        assert_eq!(min!(i128::MIN, usize::MAX), i128::MIN);
        assert_eq!(max!(i128::MAX, u64::MAX), i128::MAX);
    }

    #[test]
    fn test_min_max_u128_pairs_with_itself() {
        assert_eq!(min!(u128::MAX, 1u128), 1u128);
        assert_eq!(max!(u128::MAX, 1u128, 7u128), u128::MAX);
    }

    #[test]
    fn test_min_max_ties_keep_left() {
        assert!(min!(0.0f64, -0.0f64).is_sign_positive());
        assert!(max!(-0.0f64, 0.0f64).is_sign_negative());
    }

    #[test]
    fn test_min_element_with_count() {
        let data = [2, 3, 4, 1, 2, 4, 1, 1, 2];
        assert_eq!(min_element_with_count(&data[..]), Ok((&1, 3)));
        assert_eq!(max_element_with_count(&data[..]), Ok((&4, 2)));

        let empty: &[i32] = &[];
        assert_eq!(min_element_with_count(empty), Err(Error::EmptyRange));
    }

    #[test]
    fn test_min_element_with_count_by_key() {
        let words = ["bb", "a", "cc", "d"];
        let result = min_element_with_count_by(&words[..], |a, b| a.len() < b.len());
        assert_eq!(result, Ok((&"a", 2)));
    }

    #[test]
    fn test_min_subrange() {
        let data = [4, 2, 5, 1, 3, 1];
        assert_eq!(min_subrange(&data[..]), Ok(&data[3..]));
        assert_eq!(max_subrange(&data[..]), Ok(&data[2..]));
        assert_eq!(min_subrange("banana"), Ok("anana"));

        let empty: &[i32] = &[];
        assert_eq!(min_subrange(empty), Err(Error::EmptyRange));
    }

    #[test]
    fn test_min_subrange_by_calls_less_once_per_later_element() {
        let data = [4, 2, 5, 1, 3, 1];
        let mut calls = 0;
        let found = min_subrange_by(&data[..], |a, b| {
            calls += 1;
            a < b
        });
        assert_eq!(found, Ok(&data[3..]));
        assert_eq!(calls, data.len() - 1);

        let mut calls = 0;
        let found = max_subrange_by(&data[..], |a, b| {
            calls += 1;
            a < b
        });
        assert_eq!(found, Ok(&data[2..]));
        assert_eq!(calls, data.len() - 1);

        let mut calls = 0;
        let single = [9];
        assert_eq!(
            min_subrange_by(&single[..], |a, b| {
                calls += 1;
                a < b
            }),
            Ok(&single[..])
        );
        assert_eq!(calls, 0);
    }
}
