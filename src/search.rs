//! Searching for elements and subranges.
//!
//! Every `find` variant returns the suffix of the haystack that starts at the
//! match. When there is no match the haystack comes back fully consumed, so
//! "not found" is simply an empty result.
//!
//! Subrange search comes in several strategies chosen by the capabilities of
//! the arguments. They always agree on the result:
//!
//! - [`find_subrange`]: forward ranges, O(n·m) double scan
//! - [`find_subrange_indexed`]: random-access haystack with a bidirectional
//!   needle; skips ahead using the needle's self-overlap
//! - [`find_bytes`] and [`find_str`]: flat memory, delegated to `memchr` and
//!   `str::find`
//! - [`BoyerMooreFinder`](crate::BoyerMooreFinder): precomputed tables for a
//!   needle searched many times

use crate::adapters::{take, Take};
use crate::needle::{prefix_len_by, NeedleSet};
use crate::range::{BidirectionalRange, ForwardRange, InputRange, RandomAccessRange};

/// Advances `haystack` to the first element equal to `needle`.
///
/// ```
/// use searching_rs::find;
///
/// assert_eq!(find("hello", 'l'), "llo");
/// assert_eq!(find("hello", 'z'), "");
/// ```
pub fn find<H, E>(haystack: H, needle: E) -> H
where
    H: InputRange,
    H::Item: PartialEq<E>,
{
    find_by(haystack, needle, |a, b| a == b)
}

pub fn find_by<H, E, P>(haystack: H, needle: E, mut pred: P) -> H
where
    H: InputRange,
    P: FnMut(&H::Item, &E) -> bool,
{
    find_if(haystack, |x| pred(x, &needle))
}

/// Advances `haystack` to the first element satisfying `pred`.
pub fn find_if<H, P>(mut haystack: H, mut pred: P) -> H
where
    H: InputRange,
    P: FnMut(&H::Item) -> bool,
{
    while !haystack.is_empty() && !pred(&haystack.front()) {
        haystack.pop_front();
    }
    haystack
}

/// Byte search delegated to `memchr`.
pub fn find_byte(haystack: &[u8], needle: u8) -> &[u8] {
    match memchr::memchr(needle, haystack) {
        Some(index) => &haystack[index..],
        None => &haystack[haystack.len()..],
    }
}

/// Advances `haystack` to the first position where `needle` occurs.
///
/// An empty needle matches immediately.
///
/// ```
/// use searching_rs::find_subrange;
///
/// assert_eq!(find_subrange("hello world", "wor"), "world");
/// assert_eq!(find_subrange("hello world", "word"), "");
/// ```
pub fn find_subrange<H, N>(haystack: H, needle: N) -> H
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    find_subrange_by(haystack, needle, |a, b| a == b)
}

pub fn find_subrange_by<H, N, P>(mut haystack: H, needle: N, mut pred: P) -> H
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    if needle.is_empty() {
        return haystack;
    }

    loop {
        let mut h = haystack.save();
        let mut n = needle.save();
        loop {
            if n.is_empty() {
                return haystack;
            }
            // Running out of haystack mid-match means no later start can fit.
            if h.is_empty() {
                return h;
            }
            if !pred(&h.front(), &n.front()) {
                break;
            }
            h.pop_front();
            n.pop_front();
        }
        haystack.pop_front();
    }
}

/// Subrange search over a random-access haystack.
///
/// Anchors on the needle's last element and, after a failed candidate,
/// jumps by the distance from that element to its previous occurrence in the
/// needle.
pub fn find_subrange_indexed<H, N>(haystack: H, needle: N) -> H
where
    H: RandomAccessRange,
    N: BidirectionalRange,
    H::Item: PartialEq<N::Item>,
    N::Item: PartialEq,
{
    if needle.is_empty() {
        return haystack;
    }

    let mut rest = needle.save();
    let last = rest.back();
    rest.pop_back();

    let mut stride = 1;
    while !rest.is_empty() && rest.back() != last {
        rest.pop_back();
        stride += 1;
    }

    indexed_scan(haystack, needle, stride, |a, b| a == b)
}

/// Like [`find_subrange_indexed`] under `pred`.
///
/// An arbitrary predicate says nothing about how needle elements relate to
/// each other, so this variant advances one position at a time.
pub fn find_subrange_indexed_by<H, N, P>(haystack: H, needle: N, pred: P) -> H
where
    H: RandomAccessRange,
    N: BidirectionalRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    if needle.is_empty() {
        return haystack;
    }
    indexed_scan(haystack, needle, 1, pred)
}

fn indexed_scan<H, N, P>(mut haystack: H, needle: N, stride: usize, mut pred: P) -> H
where
    H: RandomAccessRange,
    N: BidirectionalRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    let needle_len = needle
        .known_len()
        .unwrap_or_else(|| needle.save().elements().count());
    let haystack_len = haystack.len();
    log::trace!(
        "indexed search: haystack {}, needle {}, stride {}",
        haystack_len,
        needle_len,
        stride
    );

    if needle_len > haystack_len {
        haystack.advance_by(haystack_len);
        return haystack;
    }

    let mut init = needle.save();
    let last = init.back();
    init.pop_back();

    let mut scout = needle_len - 1;
    while scout < haystack_len {
        if !pred(&haystack.at(scout), &last) {
            scout += 1;
            continue;
        }
        let mut candidate = haystack.save();
        candidate.advance_by(scout + 1 - needle_len);
        if prefix_len_by(candidate.save(), init.save(), &mut pred).is_some() {
            return candidate;
        }
        scout += stride;
    }

    haystack.advance_by(haystack_len);
    haystack
}

/// Subsequence search over flat bytes, delegated to `memchr::memmem`.
pub fn find_bytes<'a>(haystack: &'a [u8], needle: &[u8]) -> &'a [u8] {
    match memchr::memmem::find(haystack, needle) {
        Some(index) => &haystack[index..],
        None => &haystack[haystack.len()..],
    }
}

/// Substring search delegated to `str::find`.
pub fn find_str<'a>(haystack: &'a str, needle: &str) -> &'a str {
    match haystack.find(needle) {
        Some(index) => &haystack[index..],
        None => &haystack[haystack.len()..],
    }
}

/// Searches for several needles at once.
///
/// Returns the suffix at the earliest match and the 1-based index of the
/// needle that matched there (the left-most one if several do), or the
/// consumed haystack and 0.
///
/// ```
/// use searching_rs::{find_any, Elem};
///
/// let data = [1, 4, 2, 3];
/// let (rest, which) = find_any(&data[..], (&[2, 3][..], Elem(&4)));
/// assert_eq!((rest, which), (&[4, 2, 3][..], 2));
/// ```
pub fn find_any<H, T, S>(haystack: H, needles: S) -> (H, usize)
where
    H: InputRange,
    H::Item: PartialEq<T>,
    S: NeedleSet<H, T>,
{
    find_any_by(haystack, needles, |a, b| a == b)
}

/// [`find_any`] with a custom element predicate shared by all needles.
///
/// ```
/// use searching_rs::{find_any_by, Elem};
///
/// let ci = |a: &char, b: &char| a.eq_ignore_ascii_case(b);
/// assert_eq!(find_any_by("Hello World", ("WOR", Elem('L')), ci), ("llo World", 2));
/// ```
pub fn find_any_by<H, T, S, P>(mut haystack: H, needles: S, mut pred: P) -> (H, usize)
where
    H: InputRange,
    S: NeedleSet<H, T>,
    P: FnMut(&H::Item, &T) -> bool,
{
    loop {
        if let Some((index, _)) = needles.match_any_by(&haystack, &mut pred) {
            return (haystack, index);
        }
        if haystack.is_empty() {
            return (haystack, 0);
        }
        haystack.pop_front();
    }
}

/// Pieces of a haystack around the first occurrence of a needle.
#[derive(Debug, Clone)]
pub struct FindSplit<H> {
    pub before: Take<H>,
    pub matched: Take<H>,
    pub after: H,
}

impl<H: InputRange> FindSplit<H> {
    /// True if a non-empty match was found.
    pub fn found(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// A haystack split just before the first occurrence of a needle.
#[derive(Debug, Clone)]
pub struct FindSplitBefore<H> {
    pub before: Take<H>,
    pub rest: H,
    found: bool,
}

impl<H> FindSplitBefore<H> {
    pub fn found(&self) -> bool {
        self.found
    }
}

/// A haystack split just after the first occurrence of a needle.
#[derive(Debug, Clone)]
pub struct FindSplitAfter<H> {
    pub through: Take<H>,
    pub after: H,
    found: bool,
}

impl<H> FindSplitAfter<H> {
    pub fn found(&self) -> bool {
        self.found
    }
}

struct SplitPoint<H> {
    original: H,
    start: H,
    after: H,
    before_len: usize,
    match_len: usize,
    needle_exhausted: bool,
}

fn split_point_by<H, N, P>(haystack: H, needle: N, pred: &mut P) -> SplitPoint<H>
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    let original = haystack.save();
    let mut start = haystack;
    let mut h = start.save();
    let mut n = needle.save();
    let mut before_len = 0;
    let mut end = 0;

    while !n.is_empty() && !h.is_empty() {
        if pred(&h.front(), &n.front()) {
            h.pop_front();
            n.pop_front();
            end += 1;
        } else {
            start.pop_front();
            h = start.save();
            n = needle.save();
            before_len += 1;
            end = before_len;
        }
    }

    let needle_exhausted = n.is_empty();
    if !needle_exhausted {
        // Partial match cut off by the end of the haystack.
        before_len = end;
    }

    SplitPoint {
        original,
        start,
        after: h,
        before_len,
        match_len: end - before_len,
        needle_exhausted,
    }
}

/// Splits `haystack` into the part before `needle`, the match, and the rest.
///
/// Without a match the result is `(haystack, empty, empty)`.
///
/// ```
/// use searching_rs::{find_split, InputRange};
///
/// let split = find_split("key=value", "=");
/// assert!(split.found());
/// let before: String = split.before.elements().collect();
/// assert_eq!(before, "key");
/// assert_eq!(split.after, "value");
/// ```
pub fn find_split<H, N>(haystack: H, needle: N) -> FindSplit<H>
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    find_split_by(haystack, needle, |a, b| a == b)
}

pub fn find_split_by<H, N, P>(haystack: H, needle: N, mut pred: P) -> FindSplit<H>
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    let point = split_point_by(haystack, needle, &mut pred);
    FindSplit {
        before: take(point.original, point.before_len),
        matched: take(point.start, point.match_len),
        after: point.after,
    }
}

/// Splits `haystack` into the part before `needle` and the part starting at
/// it. Without a match the result is `(haystack, empty)`.
pub fn find_split_before<H, N>(haystack: H, needle: N) -> FindSplitBefore<H>
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    find_split_before_by(haystack, needle, |a, b| a == b)
}

pub fn find_split_before_by<H, N, P>(haystack: H, needle: N, mut pred: P) -> FindSplitBefore<H>
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    let point = split_point_by(haystack, needle, &mut pred);
    FindSplitBefore {
        before: take(point.original, point.before_len),
        rest: if point.needle_exhausted {
            point.start
        } else {
            point.after
        },
        found: point.match_len > 0,
    }
}

/// Splits `haystack` into the part up to and including `needle` and the rest.
/// Without a match the result is `(empty, haystack)`.
pub fn find_split_after<H, N>(haystack: H, needle: N) -> FindSplitAfter<H>
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    find_split_after_by(haystack, needle, |a, b| a == b)
}

pub fn find_split_after_by<H, N, P>(haystack: H, needle: N, mut pred: P) -> FindSplitAfter<H>
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    let point = split_point_by(haystack, needle, &mut pred);
    if point.needle_exhausted {
        FindSplitAfter {
            through: take(point.original, point.before_len + point.match_len),
            after: point.after,
            found: point.match_len > 0,
        }
    } else {
        FindSplitAfter {
            through: take(point.original.save(), 0),
            after: point.original,
            found: false,
        }
    }
}

/// Moves `haystack` just past the first occurrence of `needle`.
///
/// Returns false and leaves `haystack` untouched when there is no non-empty
/// match.
///
/// ```
/// use searching_rs::find_skip;
///
/// let mut h = "a,b,c";
/// assert!(find_skip(&mut h, ","));
/// assert_eq!(h, "b,c");
/// ```
pub fn find_skip<H, N>(haystack: &mut H, needle: N) -> bool
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    find_skip_by(haystack, needle, |a, b| a == b)
}

pub fn find_skip_by<H, N, P>(haystack: &mut H, needle: N, pred: P) -> bool
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    let split = find_split_by(haystack.save(), needle, pred);
    if !split.found() {
        return false;
    }
    *haystack = split.after;
    true
}

/// Advances to the first pair of adjacent equal elements.
///
/// ```
/// use searching_rs::find_adjacent;
///
/// assert_eq!(find_adjacent(&[1, 2, 3, 3, 4][..]), &[3, 3, 4]);
/// ```
pub fn find_adjacent<R>(range: R) -> R
where
    R: ForwardRange,
    R::Item: PartialEq,
{
    find_adjacent_by(range, |a, b| a == b)
}

/// Advances to the first element `x` whose successor `y` satisfies
/// `pred(x, y)`. Returns an empty range if there is none.
pub fn find_adjacent_by<R, P>(mut range: R, mut pred: P) -> R
where
    R: ForwardRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    let mut ahead = range.save();
    if ahead.is_empty() {
        return ahead;
    }
    ahead.pop_front();
    while !ahead.is_empty() {
        if pred(&range.front(), &ahead.front()) {
            return range;
        }
        range.pop_front();
        ahead.pop_front();
    }
    ahead
}

/// Advances `seq` to the first element equal to any of `choices`.
///
/// ```
/// use searching_rs::find_among;
///
/// assert_eq!(find_among("hello world", "ow"), "o world");
/// ```
pub fn find_among<R, C>(seq: R, choices: C) -> R
where
    R: InputRange,
    C: ForwardRange,
    R::Item: PartialEq<C::Item>,
{
    find_among_by(seq, choices, |a, b| a == b)
}

/// Advances `seq` to the first element `x` for which `pred(x, choice)` holds
/// for some choice.
pub fn find_among_by<R, C, P>(seq: R, choices: C, mut pred: P) -> R
where
    R: InputRange,
    C: ForwardRange,
    P: FnMut(&R::Item, &C::Item) -> bool,
{
    find_if(seq, |x| {
        let mut c = choices.save();
        while !c.is_empty() {
            if pred(x, &c.front()) {
                return true;
            }
            c.pop_front();
        }
        false
    })
}

/// True if `haystack` contains `needle`.
pub fn can_find<H, E>(haystack: H, needle: E) -> bool
where
    H: InputRange,
    H::Item: PartialEq<E>,
{
    !find(haystack, needle).is_empty()
}

pub fn can_find_by<H, E, P>(haystack: H, needle: E, pred: P) -> bool
where
    H: InputRange,
    P: FnMut(&H::Item, &E) -> bool,
{
    !find_by(haystack, needle, pred).is_empty()
}

/// True if some element satisfies `pred`.
pub fn can_find_if<H, P>(haystack: H, pred: P) -> bool
where
    H: InputRange,
    P: FnMut(&H::Item) -> bool,
{
    !find_if(haystack, pred).is_empty()
}

/// True if `needle` occurs in `haystack`. An empty needle always does.
pub fn can_find_subrange<H, N>(haystack: H, needle: N) -> bool
where
    H: ForwardRange,
    N: ForwardRange,
    H::Item: PartialEq<N::Item>,
{
    needle.is_empty() || !find_subrange(haystack, needle).is_empty()
}

pub fn can_find_subrange_by<H, N, P>(haystack: H, needle: N, pred: P) -> bool
where
    H: ForwardRange,
    N: ForwardRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    needle.is_empty() || !find_subrange_by(haystack, needle, pred).is_empty()
}

/// Returns the 1-based index of the needle [`find_any`] would report, or 0.
pub fn can_find_any<H, T, S>(haystack: H, needles: S) -> usize
where
    H: InputRange,
    H::Item: PartialEq<T>,
    S: NeedleSet<H, T>,
{
    find_any(haystack, needles).1
}

pub fn can_find_any_by<H, T, S, P>(haystack: H, needles: S, pred: P) -> usize
where
    H: InputRange,
    S: NeedleSet<H, T>,
    P: FnMut(&H::Item, &T) -> bool,
{
    find_any_by(haystack, needles, pred).1
}

/// True if every element satisfies `pred`.
pub fn all<R, P>(range: R, mut pred: P) -> bool
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    find_if(range, |x| !pred(x)).is_empty()
}

/// True if some element satisfies `pred`.
pub fn any<R, P>(range: R, pred: P) -> bool
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    can_find_if(range, pred)
}
