//! Counting occurrences and offsets.

use crate::error::{Error, Result};
use crate::needle::{prefix_len_by, NeedleSet};
use crate::range::{ForwardRange, InputRange};
use crate::search::find_skip_by;

/// Counts the elements equal to `needle`.
pub fn count<R, E>(haystack: R, needle: E) -> usize
where
    R: InputRange,
    R::Item: PartialEq<E>,
{
    count_by(haystack, needle, |a, b| a == b)
}

/// Counts the elements `x` for which `pred(x, needle)` holds.
pub fn count_by<R, E, P>(haystack: R, needle: E, mut pred: P) -> usize
where
    R: InputRange,
    P: FnMut(&R::Item, &E) -> bool,
{
    count_if(haystack, |x| pred(x, &needle))
}

/// Counts the elements satisfying `pred`.
pub fn count_if<R, P>(mut haystack: R, mut pred: P) -> usize
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    const { assert!(!R::IS_INFINITE, "cannot count the elements of an infinite range") };

    let mut count = 0;
    while !haystack.is_empty() {
        if pred(&haystack.front()) {
            count += 1;
        }
        haystack.pop_front();
    }
    count
}

/// Counts the non-overlapping occurrences of `needle` in `haystack`.
///
/// ```
/// use searching_rs::count_subrange;
///
/// assert_eq!(count_subrange("ababab", "abab"), Ok(1));
/// assert_eq!(count_subrange("ababab", "ab"), Ok(3));
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyNeedle`] if `needle` is empty. An infinite needle
/// cannot fit in a finite haystack and counts as `Ok(0)`.
pub fn count_subrange<H, N>(haystack: H, needle: N) -> Result<usize>
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    count_subrange_by(haystack, needle, |a, b| a == b)
}

pub fn count_subrange_by<H, N, P>(mut haystack: H, needle: N, mut pred: P) -> Result<usize>
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    const { assert!(!H::IS_INFINITE, "cannot count occurrences in an infinite range") };

    if needle.is_empty() {
        return Err(Error::EmptyNeedle);
    }
    if N::IS_INFINITE {
        return Ok(0);
    }

    let mut count = 0;
    while find_skip_by(&mut haystack, needle.save(), &mut pred) {
        count += 1;
    }
    Ok(count)
}

/// Returns the offset of the first element equal to `needle`.
///
/// `None` means the haystack ran out without a match. On an infinite
/// haystack without a match this never returns.
pub fn count_until<R, E>(haystack: R, needle: E) -> Option<usize>
where
    R: InputRange,
    R::Item: PartialEq<E>,
{
    count_until_by(haystack, needle, |a, b| a == b)
}

pub fn count_until_by<R, E, P>(haystack: R, needle: E, mut pred: P) -> Option<usize>
where
    R: InputRange,
    P: FnMut(&R::Item, &E) -> bool,
{
    count_until_if(haystack, |x| pred(x, &needle))
}

/// Returns the offset of the first element satisfying `pred`.
pub fn count_until_if<R, P>(mut haystack: R, mut pred: P) -> Option<usize>
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    let mut offset = 0;
    while !haystack.is_empty() {
        if pred(&haystack.front()) {
            return Some(offset);
        }
        haystack.pop_front();
        offset += 1;
    }
    None
}

/// Returns the offset at which `needle` first occurs in `haystack`.
///
/// ```
/// use searching_rs::count_until_subrange;
///
/// assert_eq!(count_until_subrange("hello world", "world"), Some(6));
/// assert_eq!(count_until_subrange("hello world", "xyz"), None);
/// ```
pub fn count_until_subrange<H, N>(haystack: H, needle: N) -> Option<usize>
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    count_until_subrange_by(haystack, needle, |a, b| a == b)
}

pub fn count_until_subrange_by<H, N, P>(mut haystack: H, needle: N, mut pred: P) -> Option<usize>
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    if needle.is_empty() {
        return Some(0);
    }

    let first = needle.front();
    let mut offset = 0;
    while !haystack.is_empty() {
        // Cheap first-element test before the full prefix walk.
        if pred(&haystack.front(), &first)
            && prefix_len_by(haystack.save(), needle.save(), &mut pred).is_some()
        {
            return Some(offset);
        }
        haystack.pop_front();
        offset += 1;
    }
    None
}

/// Returns the offset of the earliest position where any needle matches.
///
/// Needles at the same offset resolve to the left-most in the tuple. An empty
/// range needle matches at offset 0.
///
/// ```
/// use searching_rs::{count_until_any, Elem};
///
/// assert_eq!(count_until_any("hello world", ("wor", Elem('o'))), Some(4));
/// assert_eq!(count_until_any("hello", ("xy", Elem('z'))), None);
/// ```
pub fn count_until_any<H, T, S>(haystack: H, needles: S) -> Option<usize>
where
    H: InputRange,
    H::Item: PartialEq<T>,
    S: NeedleSet<H, T>,
{
    count_until_any_by(haystack, needles, |a, b| a == b)
}

/// [`count_until_any`] with a custom element predicate shared by all needles.
pub fn count_until_any_by<H, T, S, P>(mut haystack: H, needles: S, mut pred: P) -> Option<usize>
where
    H: InputRange,
    S: NeedleSet<H, T>,
    P: FnMut(&H::Item, &T) -> bool,
{
    if needles.has_empty() {
        return Some(0);
    }

    let mut offset = 0;
    while !haystack.is_empty() {
        if needles.match_any_by(&haystack, &mut pred).is_some() {
            return Some(offset);
        }
        haystack.pop_front();
        offset += 1;
    }
    None
}

/// Checks that `open` and `close` are properly nested in `range`.
///
/// ```
/// use searching_rs::balanced_parens;
///
/// assert!(balanced_parens("1+(2*(3+1)/2)", '(', ')'));
/// assert!(!balanced_parens("1+(2*(3+1/2)", '(', ')'));
/// ```
pub fn balanced_parens<R, E>(range: R, open: E, close: E) -> bool
where
    R: InputRange,
    R::Item: PartialEq<E>,
{
    balanced_parens_with_limit(range, open, close, usize::MAX)
}

/// Like [`balanced_parens`], but fails as soon as an opener would take the
/// nesting depth above `max_nesting`.
pub fn balanced_parens_with_limit<R, E>(mut range: R, open: E, close: E, max_nesting: usize) -> bool
where
    R: InputRange,
    R::Item: PartialEq<E>,
{
    const { assert!(!R::IS_INFINITE, "cannot check nesting of an infinite range") };

    let mut depth = 0usize;
    while !range.is_empty() {
        let current = range.front();
        if current == open {
            if depth >= max_nesting {
                return false;
            }
            depth += 1;
        } else if current == close {
            if depth == 0 {
                return false;
            }
            depth -= 1;
        }
        range.pop_front();
    }
    depth == 0
}
