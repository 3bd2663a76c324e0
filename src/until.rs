//! Lazy prefixes that stop at a sentinel.

use crate::needle::starts_with_by;
use crate::range::{assert_nonempty, ForwardRange, InputRange};

/// Whether the element that triggers the stop is part of the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Stop just before the sentinel.
    #[default]
    Exclusive,
    /// Yield the first element of the sentinel, then stop.
    Inclusive,
}

/// Decides, given the rest of the source, whether the prefix ends here.
pub trait Stop<R> {
    /// Called only on a non-empty range.
    fn stops_at(&mut self, rest: &R) -> bool;
}

/// Stops at an element for which `pred(element, sentinel)` holds.
#[derive(Debug, Clone)]
pub struct StopAtElem<E, P> {
    sentinel: E,
    pred: P,
}

impl<R, E, P> Stop<R> for StopAtElem<E, P>
where
    R: InputRange,
    P: FnMut(&R::Item, &E) -> bool,
{
    fn stops_at(&mut self, rest: &R) -> bool {
        (self.pred)(&rest.front(), &self.sentinel)
    }
}

/// Stops where the rest of the source starts with a needle.
#[derive(Debug, Clone)]
pub struct StopAtSubrange<N, P> {
    needle: N,
    pred: P,
}

impl<R, N, P> Stop<R> for StopAtSubrange<N, P>
where
    R: ForwardRange,
    N: ForwardRange,
    P: FnMut(&R::Item, &N::Item) -> bool,
{
    fn stops_at(&mut self, rest: &R) -> bool {
        starts_with_by(rest.save(), self.needle.save(), &mut self.pred)
    }
}

/// Stops at the first element satisfying a unary predicate.
#[derive(Debug, Clone)]
pub struct StopIf<P> {
    pred: P,
}

impl<R, P> Stop<R> for StopIf<P>
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    fn stops_at(&mut self, rest: &R) -> bool {
        (self.pred)(&rest.front())
    }
}

/// Prefix of a range that ends where its [`Stop`] condition first holds.
///
/// ```
/// use searching_rs::{until, Boundary, InputRange};
///
/// let data = [1, 2, 4, 7, 7, 2, 4, 7, 3, 5];
/// let open: Vec<i32> = until(&data[..], &7, Boundary::Exclusive).elements().copied().collect();
/// assert_eq!(open, vec![1, 2, 4]);
/// let closed: Vec<i32> = until(&data[..], &7, Boundary::Inclusive).elements().copied().collect();
/// assert_eq!(closed, vec![1, 2, 4, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct Until<R, S> {
    source: R,
    stop: S,
    boundary: Boundary,
    done: bool,
}

impl<R, S> Until<R, S>
where
    R: InputRange,
    S: Stop<R>,
{
    fn new(source: R, mut stop: S, boundary: Boundary) -> Self {
        let done = source.is_empty()
            || (boundary == Boundary::Exclusive && stop.stops_at(&source));
        Self {
            source,
            stop,
            boundary,
            done,
        }
    }

    /// Returns the unconsumed part of the source.
    pub fn into_inner(self) -> R {
        self.source
    }
}

pub fn until<R, E>(
    source: R,
    sentinel: E,
    boundary: Boundary,
) -> Until<R, StopAtElem<E, fn(&R::Item, &E) -> bool>>
where
    R: InputRange,
    R::Item: PartialEq<E>,
{
    let eq: fn(&R::Item, &E) -> bool = |a, b| a == b;
    until_by(source, sentinel, eq, boundary)
}

pub fn until_by<R, E, P>(source: R, sentinel: E, pred: P, boundary: Boundary) -> Until<R, StopAtElem<E, P>>
where
    R: InputRange,
    P: FnMut(&R::Item, &E) -> bool,
{
    Until::new(source, StopAtElem { sentinel, pred }, boundary)
}

/// Prefix ending where `needle` begins. With [`Boundary::Inclusive`] only the
/// first element of the needle's occurrence is yielded.
pub fn until_subrange<R, N>(
    source: R,
    needle: N,
    boundary: Boundary,
) -> Until<R, StopAtSubrange<N, fn(&R::Item, &N::Item) -> bool>>
where
    R: ForwardRange,
    N: ForwardRange,
    R::Item: PartialEq<N::Item>,
{
    let eq: fn(&R::Item, &N::Item) -> bool = |a, b| a == b;
    until_subrange_by(source, needle, eq, boundary)
}

pub fn until_subrange_by<R, N, P>(
    source: R,
    needle: N,
    pred: P,
    boundary: Boundary,
) -> Until<R, StopAtSubrange<N, P>>
where
    R: ForwardRange,
    N: ForwardRange,
    P: FnMut(&R::Item, &N::Item) -> bool,
{
    Until::new(source, StopAtSubrange { needle, pred }, boundary)
}

pub fn until_if<R, P>(source: R, pred: P, boundary: Boundary) -> Until<R, StopIf<P>>
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    Until::new(source, StopIf { pred }, boundary)
}

impl<R, S> InputRange for Until<R, S>
where
    R: InputRange,
    S: Stop<R>,
{
    type Item = R::Item;

    fn is_empty(&self) -> bool {
        self.done
    }

    fn front(&self) -> R::Item {
        assert_nonempty(self, "fetch the front of");
        self.source.front()
    }

    fn pop_front(&mut self) {
        assert_nonempty(self, "pop the front of");
        match self.boundary {
            Boundary::Inclusive => {
                let hit = self.stop.stops_at(&self.source);
                self.source.pop_front();
                self.done = hit || self.source.is_empty();
            }
            Boundary::Exclusive => {
                self.source.pop_front();
                self.done = self.source.is_empty() || self.stop.stops_at(&self.source);
            }
        }
    }
}

impl<R, S> ForwardRange for Until<R, S>
where
    R: ForwardRange,
    S: Stop<R> + Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::input_only;

    static DATA: [i32; 10] = [1, 2, 4, 7, 7, 2, 4, 7, 3, 5];

    fn collect<R: InputRange<Item = &'static i32>>(range: R) -> Vec<i32> {
        range.elements().copied().collect()
    }

    #[test]
    fn test_until_element() {
        assert_eq!(collect(until(&DATA[..], &7, Boundary::default())), vec![1, 2, 4]);
        assert_eq!(collect(until(&DATA[..], &7, Boundary::Inclusive)), vec![1, 2, 4, 7]);
        assert_eq!(collect(until(&DATA[..], &9, Boundary::Exclusive)).len(), 10);
    }

    #[test]
    fn test_until_sentinel_at_start() {
        assert!(until(&DATA[..], &1, Boundary::Exclusive).is_empty());
        assert_eq!(collect(until(&DATA[..], &1, Boundary::Inclusive)), vec![1]);
        assert!(until("", 'x', Boundary::Inclusive).is_empty());
    }

    #[test]
    fn test_until_subrange() {
        let open: String = until_subrange("key: value", ": ", Boundary::Exclusive)
            .elements()
            .collect();
        assert_eq!(open, "key");
        let closed: String = until_subrange("key: value", ": ", Boundary::Inclusive)
            .elements()
            .collect();
        assert_eq!(closed, "key:");
    }

    #[test]
    fn test_until_if_and_by() {
        assert_eq!(
            collect(until_if(&DATA[..], |x| **x > 5, Boundary::Exclusive)),
            vec![1, 2, 4]
        );
        let prefix: String = until_by("abcDef", 'd', |a: &char, b: &char| a.eq_ignore_ascii_case(b), Boundary::Exclusive)
            .elements()
            .collect();
        assert_eq!(prefix, "abc");
    }

    #[test]
    fn test_until_save_and_into_inner() {
        let mut view = until("hello world", ' ', Boundary::Exclusive);
        let saved = view.save();
        view.pop_front();
        assert_eq!(saved.front(), 'h');
        assert_eq!(view.into_inner(), "ello world");
    }

    #[test]
    fn test_until_input_only_and_infinite() {
        let taken: Vec<u32> = until(input_only(0u32..), 4, Boundary::Exclusive)
            .elements()
            .collect();
        assert_eq!(taken, vec![0, 1, 2, 3]);
    }
}
