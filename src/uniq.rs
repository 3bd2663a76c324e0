use crate::range::{assert_nonempty, BidirectionalRange, ForwardRange, InputRange};

/// Collapses runs of equivalent adjacent elements to one element each.
///
/// From the front a run is represented by its first element, from the back by
/// its last. Two neighbours belong to the same run when `pred(run_start, next)`
/// holds.
#[derive(Debug, Clone)]
pub struct Uniq<R, P> {
    source: R,
    pred: P,
}

/// Removes adjacent duplicates.
///
/// ```
/// use searching_rs::{uniq, InputRange};
///
/// let data = [1, 2, 2, 2, 3, 1, 1];
/// let runs: Vec<i32> = uniq(&data[..]).elements().copied().collect();
/// assert_eq!(runs, vec![1, 2, 3, 1]);
/// ```
pub fn uniq<R>(source: R) -> Uniq<R, fn(&R::Item, &R::Item) -> bool>
where
    R: InputRange,
    R::Item: PartialEq,
{
    let eq: fn(&R::Item, &R::Item) -> bool = |a, b| a == b;
    uniq_by(source, eq)
}

pub fn uniq_by<R, P>(source: R, pred: P) -> Uniq<R, P>
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    Uniq { source, pred }
}

impl<R, P> InputRange for Uniq<R, P>
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    type Item = R::Item;
    const IS_INFINITE: bool = R::IS_INFINITE;

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn front(&self) -> R::Item {
        assert_nonempty(self, "fetch the front of");
        self.source.front()
    }

    fn pop_front(&mut self) {
        assert_nonempty(self, "pop the front of");
        let first = self.source.front();
        self.source.pop_front();
        while !self.source.is_empty() && (self.pred)(&first, &self.source.front()) {
            self.source.pop_front();
        }
    }
}

impl<R, P> ForwardRange for Uniq<R, P>
where
    R: ForwardRange,
    P: FnMut(&R::Item, &R::Item) -> bool + Clone,
{
}

impl<R, P> BidirectionalRange for Uniq<R, P>
where
    R: BidirectionalRange,
    P: FnMut(&R::Item, &R::Item) -> bool + Clone,
{
    fn back(&self) -> R::Item {
        assert_nonempty(self, "fetch the back of");
        self.source.back()
    }

    fn pop_back(&mut self) {
        assert_nonempty(self, "pop the back of");
        let last = self.source.back();
        self.source.pop_back();
        while !self.source.is_empty() && (self.pred)(&last, &self.source.back()) {
            self.source.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::input_only;

    #[test]
    fn test_uniq() {
        let data = [1, 2, 2, 2, 3, 1, 1];
        let runs: Vec<i32> = uniq(&data[..]).elements().copied().collect();
        assert_eq!(runs, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_uniq_empty_and_single() {
        let empty: &[i32] = &[];
        assert!(uniq(empty).is_empty());
        assert_eq!(uniq("a").elements().collect::<String>(), "a");
    }

    #[test]
    fn test_uniq_by() {
        let words = uniq_by("aAbBBc", |a: &char, b: &char| a.eq_ignore_ascii_case(b));
        assert_eq!(words.elements().collect::<String>(), "abc");
    }

    #[test]
    fn test_uniq_from_back_keeps_last_of_run() {
        let data = [(1, 'a'), (1, 'b'), (2, 'c')];
        let mut view = uniq_by(&data[..], |a, b| a.0 == b.0);
        assert_eq!(view.back(), &(2, 'c'));
        view.pop_back();
        assert_eq!(view.back(), &(1, 'b'));
        assert_eq!(view.front(), &(1, 'a'));
    }

    #[test]
    fn test_uniq_reversed() {
        let runs: String = uniq("aabbbca").elements().rev().collect();
        assert_eq!(runs, "acba");
    }

    #[test]
    fn test_uniq_input_only() {
        let runs: Vec<u32> = uniq(input_only(crate::adapters::iter_range(vec![5u32, 5, 6])))
            .elements()
            .collect();
        assert_eq!(runs, vec![5, 6]);
    }
}
