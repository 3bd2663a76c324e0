//! Prefix matching and the needle abstraction used by multi-needle search.
//!
//! A needle is either a range (matched element by element) or a single
//! element wrapped in [`Elem`]. Several needles are passed together as a
//! tuple, which implements [`NeedleSet`]:
//!
//! ```
//! use searching_rs::{find_any, Elem};
//!
//! let (rest, which) = find_any("hello world", ("wor", Elem('o')));
//! assert_eq!(rest, "o world");
//! assert_eq!(which, 2);
//! ```

use crate::range::{BidirectionalRange, ForwardRange, InputRange};

/// A single element used as a needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Elem<E>(pub E);

/// Something that can be matched at the front of a haystack.
///
/// `T` is the element type the needle compares haystack elements against:
/// the wrapped value for [`Elem`], the item type for range needles.
pub trait Needle<H: InputRange, T> {
    /// Returns how many haystack elements a match at the front covers, or
    /// `None` when the haystack does not start with this needle under `pred`.
    fn match_front_by<P>(&self, haystack: &H, pred: &mut P) -> Option<usize>
    where
        P: FnMut(&H::Item, &T) -> bool;

    fn match_front(&self, haystack: &H) -> Option<usize>
    where
        H::Item: PartialEq<T>,
    {
        self.match_front_by(haystack, &mut |a: &H::Item, b: &T| a == b)
    }
}

impl<H, E> Needle<H, E> for Elem<E>
where
    H: InputRange,
{
    fn match_front_by<P>(&self, haystack: &H, pred: &mut P) -> Option<usize>
    where
        P: FnMut(&H::Item, &E) -> bool,
    {
        (!haystack.is_empty() && pred(&haystack.front(), &self.0)).then_some(1)
    }
}

impl<H, N> Needle<H, N::Item> for N
where
    H: ForwardRange,
    N: ForwardRange,
{
    fn match_front_by<P>(&self, haystack: &H, pred: &mut P) -> Option<usize>
    where
        P: FnMut(&H::Item, &N::Item) -> bool,
    {
        prefix_len_by(haystack.save(), self.save(), pred)
    }
}

/// An ordered group of needles searched for simultaneously.
///
/// Implemented for tuples of up to eight [`Needle`]s sharing one element
/// type `T`, so a single predicate can compare against all of them.
pub trait NeedleSet<H: InputRange, T> {
    /// Returns the 1-based index of the first needle, in argument order, that
    /// matches at the front of `haystack`, together with the match length.
    fn match_any_by<P>(&self, haystack: &H, pred: &mut P) -> Option<(usize, usize)>
    where
        P: FnMut(&H::Item, &T) -> bool;

    fn match_any(&self, haystack: &H) -> Option<(usize, usize)>
    where
        H::Item: PartialEq<T>,
    {
        self.match_any_by(haystack, &mut |a: &H::Item, b: &T| a == b)
    }

    /// True if any needle is an empty range, which matches everywhere.
    fn has_empty(&self) -> bool;
}

/// Needles that report whether they can match zero elements.
///
/// Lets [`NeedleSet::has_empty`] detect empty range needles without knowing
/// the needle kind.
pub trait NeedleWidth {
    fn is_empty_needle(&self) -> bool;
}

impl<E> NeedleWidth for Elem<E> {
    fn is_empty_needle(&self) -> bool {
        false
    }
}

impl<N: ForwardRange> NeedleWidth for N {
    fn is_empty_needle(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! needle_tuples {
    ($( ($($idx:tt $name:ident),+) )*) => {$(
        impl<H, T, $($name),+> NeedleSet<H, T> for ($($name,)+)
        where
            H: InputRange,
            $($name: Needle<H, T> + NeedleWidth,)+
        {
            fn match_any_by<P>(&self, haystack: &H, pred: &mut P) -> Option<(usize, usize)>
            where
                P: FnMut(&H::Item, &T) -> bool,
            {
                $(
                    if let Some(len) = self.$idx.match_front_by(haystack, pred) {
                        return Some(($idx + 1, len));
                    }
                )+
                None
            }

            fn has_empty(&self) -> bool {
                false $(|| self.$idx.is_empty_needle())+
            }
        }
    )*};
}

needle_tuples! {
    (0 A)
    (0 A, 1 B)
    (0 A, 1 B, 2 C)
    (0 A, 1 B, 2 C, 3 D)
    (0 A, 1 B, 2 C, 3 D, 4 E)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 I)
}

/// Walks `haystack` and `needle` in lockstep and returns the needle length if
/// the haystack starts with it.
pub(crate) fn prefix_len_by<H, N, P>(mut haystack: H, mut needle: N, pred: &mut P) -> Option<usize>
where
    H: InputRange,
    N: InputRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    if let (Some(h), Some(n)) = (haystack.known_len(), needle.known_len()) {
        if h < n {
            return None;
        }
    }

    let mut len = 0;
    loop {
        if needle.is_empty() {
            return Some(len);
        }
        if haystack.is_empty() || !pred(&haystack.front(), &needle.front()) {
            return None;
        }
        haystack.pop_front();
        needle.pop_front();
        len += 1;
    }
}

/// Returns true if `haystack` begins with the elements of `needle`.
///
/// An empty needle is a prefix of everything.
pub fn starts_with<H, N>(haystack: H, needle: N) -> bool
where
    H: InputRange,
    N: InputRange,
    H::Item: PartialEq<N::Item>,
{
    starts_with_by(haystack, needle, |a, b| a == b)
}

pub fn starts_with_by<H, N, P>(haystack: H, needle: N, mut pred: P) -> bool
where
    H: InputRange,
    N: InputRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    prefix_len_by(haystack, needle, &mut pred).is_some()
}

/// Returns the 1-based index of the first needle that `haystack` starts with,
/// or 0 if none does.
pub fn starts_with_any<H, T, S>(haystack: H, needles: S) -> usize
where
    H: InputRange,
    H::Item: PartialEq<T>,
    S: NeedleSet<H, T>,
{
    starts_with_any_by(haystack, needles, |a, b| a == b)
}

pub fn starts_with_any_by<H, T, S, P>(haystack: H, needles: S, mut pred: P) -> usize
where
    H: InputRange,
    S: NeedleSet<H, T>,
    P: FnMut(&H::Item, &T) -> bool,
{
    needles
        .match_any_by(&haystack, &mut pred)
        .map_or(0, |(index, _)| index)
}

/// Returns true if `haystack` ends with the elements of `needle`.
pub fn ends_with<H, N>(haystack: H, needle: N) -> bool
where
    H: BidirectionalRange,
    N: BidirectionalRange,
    H::Item: PartialEq<N::Item>,
{
    ends_with_by(haystack, needle, |a, b| a == b)
}

pub fn ends_with_by<H, N, P>(mut haystack: H, mut needle: N, mut pred: P) -> bool
where
    H: BidirectionalRange,
    N: BidirectionalRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    if let (Some(h), Some(n)) = (haystack.known_len(), needle.known_len()) {
        if h < n {
            return false;
        }
    }

    loop {
        if needle.is_empty() {
            return true;
        }
        if haystack.is_empty() || !pred(&haystack.back(), &needle.back()) {
            return false;
        }
        haystack.pop_back();
        needle.pop_back();
    }
}

/// Advances `haystack` past `needle` if it starts with it.
///
/// Returns whether the needle was skipped; on `false` the haystack is left
/// untouched.
pub fn skip_over<H, N>(haystack: &mut H, needle: N) -> bool
where
    H: ForwardRange,
    N: InputRange,
    H::Item: PartialEq<N::Item>,
{
    skip_over_by(haystack, needle, |a, b| a == b)
}

pub fn skip_over_by<H, N, P>(haystack: &mut H, mut needle: N, mut pred: P) -> bool
where
    H: ForwardRange,
    N: InputRange,
    P: FnMut(&H::Item, &N::Item) -> bool,
{
    let mut cursor = haystack.save();
    while !needle.is_empty() {
        if cursor.is_empty() || !pred(&cursor.front(), &needle.front()) {
            return false;
        }
        cursor.pop_front();
        needle.pop_front();
    }
    *haystack = cursor;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::input_only;

    #[test]
    fn test_starts_with() {
        assert!(starts_with("hello", "he"));
        assert!(starts_with("hello", ""));
        assert!(!starts_with("he", "hello"));
        assert!(!starts_with("hello", "ha"));

        let data = [1, 2, 3];
        assert!(starts_with(input_only(&data[..]), &[1, 2][..]));
    }

    #[test]
    fn test_starts_with_by() {
        assert!(starts_with_by("HELLO", "he", |a: &char, b: &char| {
            a.eq_ignore_ascii_case(b)
        }));
    }

    #[test]
    fn test_starts_with_any_prefers_first_argument() {
        assert_eq!(starts_with_any("abc", ("x", Elem('a'), "ab")), 2);
        assert_eq!(starts_with_any("abc", ("ab", Elem('a'))), 1);
        assert_eq!(starts_with_any("abc", (Elem('z'), "zz")), 0);
    }

    #[test]
    fn test_starts_with_any_by() {
        let ci = |a: &char, b: &char| a.eq_ignore_ascii_case(b);
        assert_eq!(starts_with_any_by("Hello", ("HEX", Elem('h')), ci), 2);
        assert_eq!(starts_with_any_by("Hello", ("HEL", Elem('h')), ci), 1);
        assert_eq!(starts_with_any("Hello", ("HEL", Elem('h'))), 0);
    }

    #[test]
    fn test_elem_needle_on_empty() {
        assert_eq!(Needle::<&str, char>::match_front(&Elem('a'), &""), None);
    }

    #[test]
    fn test_match_front_by() {
        let mut ci = |a: &char, b: &char| a.eq_ignore_ascii_case(b);
        assert_eq!("AB".match_front_by(&"abc", &mut ci), Some(2));
        assert_eq!(Elem('X').match_front_by(&"xyz", &mut ci), Some(1));
    }

    #[test]
    fn test_has_empty() {
        assert!(NeedleSet::<&str, char>::has_empty(&("ab", "")));
        assert!(!NeedleSet::<&str, char>::has_empty(&(Elem('a'), "b")));
    }

    #[test]
    fn test_ends_with() {
        assert!(ends_with("hello", "llo"));
        assert!(ends_with("hello", ""));
        assert!(!ends_with("lo", "hello"));
        assert!(!ends_with("hello", "lol"));
    }

    #[test]
    fn test_skip_over() {
        let mut h = "hello world";
        assert!(skip_over(&mut h, "hello "));
        assert_eq!(h, "world");
        assert!(!skip_over(&mut h, "wx"));
        assert_eq!(h, "world");
    }
}
