//! Lazy filtering views.

use crate::range::{assert_nonempty, BidirectionalRange, ForwardRange, InputRange};

/// Elements of a range that satisfy a predicate.
///
/// Failing elements are skipped when the view is built and after every
/// `pop_front`, so `front` never calls the predicate.
///
/// ```
/// use searching_rs::{filter, InputRange};
///
/// let evens: Vec<i32> = filter(&[1, 2, 3, 4][..], |x| **x % 2 == 0).elements().copied().collect();
/// assert_eq!(evens, vec![2, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<R, P> {
    source: R,
    pred: P,
}

pub fn filter<R, P>(source: R, pred: P) -> Filter<R, P>
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    let mut view = Filter { source, pred };
    view.skip_front();
    view
}

impl<R, P> Filter<R, P>
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
{
    fn skip_front(&mut self) {
        while !self.source.is_empty() && !(self.pred)(&self.source.front()) {
            self.source.pop_front();
        }
    }
}

impl<R, P> InputRange for Filter<R, P>
where
    R: InputRange,
    P: FnMut(&R::Item) -> bool,
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
        self.source.pop_front();
        self.skip_front();
    }
}

impl<R, P> ForwardRange for Filter<R, P>
where
    R: ForwardRange,
    P: FnMut(&R::Item) -> bool + Clone,
{
}

/// Like [`Filter`], but also consumable from the back.
#[derive(Debug, Clone)]
pub struct FilterBidirectional<R, P> {
    source: R,
    pred: P,
}

pub fn filter_bidirectional<R, P>(source: R, pred: P) -> FilterBidirectional<R, P>
where
    R: BidirectionalRange,
    P: FnMut(&R::Item) -> bool,
{
    let mut view = FilterBidirectional { source, pred };
    view.skip_front();
    view.skip_back();
    view
}

impl<R, P> FilterBidirectional<R, P>
where
    R: BidirectionalRange,
    P: FnMut(&R::Item) -> bool,
{
    fn skip_front(&mut self) {
        while !self.source.is_empty() && !(self.pred)(&self.source.front()) {
            self.source.pop_front();
        }
    }

    fn skip_back(&mut self) {
        while !self.source.is_empty() && !(self.pred)(&self.source.back()) {
            self.source.pop_back();
        }
    }
}

impl<R, P> InputRange for FilterBidirectional<R, P>
where
    R: BidirectionalRange,
    P: FnMut(&R::Item) -> bool,
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
        self.source.pop_front();
        self.skip_front();
    }
}

impl<R, P> ForwardRange for FilterBidirectional<R, P>
where
    R: BidirectionalRange,
    P: FnMut(&R::Item) -> bool + Clone,
{
}

impl<R, P> BidirectionalRange for FilterBidirectional<R, P>
where
    R: BidirectionalRange,
    P: FnMut(&R::Item) -> bool + Clone,
{
    fn back(&self) -> R::Item {
        assert_nonempty(self, "fetch the back of");
        self.source.back()
    }

    fn pop_back(&mut self) {
        assert_nonempty(self, "pop the back of");
        self.source.pop_back();
        self.skip_back();
    }
}
