use crate::range::{assert_nonempty, ForwardRange, InputRange};

/// Run-length view: one `(representative, run_length)` pair per run of
/// equivalent adjacent elements.
///
/// Each `pop_front` consumes a whole run of the source, so the run length of
/// the current front is always known.
///
/// ```
/// use searching_rs::{group, InputRange};
///
/// let data = [1, 2, 2, 2, 2, 3];
/// let runs: Vec<(i32, usize)> = group(&data[..]).elements().map(|(x, n)| (*x, n)).collect();
/// assert_eq!(runs, vec![(1, 1), (2, 4), (3, 1)]);
/// ```
pub struct Group<R: InputRange, P> {
    source: R,
    pred: P,
    current: Option<(R::Item, usize)>,
}

impl<R, P> Clone for Group<R, P>
where
    R: InputRange + Clone,
    R::Item: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            pred: self.pred.clone(),
            current: self.current.clone(),
        }
    }
}

impl<R, P> std::fmt::Debug for Group<R, P>
where
    R: InputRange + std::fmt::Debug,
    R::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("source", &self.source)
            .field("current", &self.current)
            .finish()
    }
}

pub fn group<R>(source: R) -> Group<R, fn(&R::Item, &R::Item) -> bool>
where
    R: InputRange,
    R::Item: PartialEq + Clone,
{
    let eq: fn(&R::Item, &R::Item) -> bool = |a, b| a == b;
    group_by(source, eq)
}

/// Groups runs whose elements satisfy `pred(first_of_run, element)`.
pub fn group_by<R, P>(source: R, pred: P) -> Group<R, P>
where
    R: InputRange,
    R::Item: Clone,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    let mut view = Group {
        source,
        pred,
        current: None,
    };
    view.next_run();
    view
}

impl<R, P> Group<R, P>
where
    R: InputRange,
    R::Item: Clone,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    fn next_run(&mut self) {
        if self.source.is_empty() {
            self.current = None;
            return;
        }
        let first = self.source.front();
        self.source.pop_front();
        let mut run = 1;
        while !self.source.is_empty() && (self.pred)(&first, &self.source.front()) {
            self.source.pop_front();
            run += 1;
        }
        self.current = Some((first, run));
    }
}

impl<R, P> InputRange for Group<R, P>
where
    R: InputRange,
    R::Item: Clone,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    type Item = (R::Item, usize);
    const IS_INFINITE: bool = R::IS_INFINITE;

    fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    fn front(&self) -> (R::Item, usize) {
        match &self.current {
            Some(run) => run.clone(),
            None => panic!("Attempting to fetch the front of an empty range"),
        }
    }

    fn pop_front(&mut self) {
        assert_nonempty(self, "pop the front of");
        self.next_run();
    }
}

impl<R, P> ForwardRange for Group<R, P>
where
    R: ForwardRange,
    R::Item: Clone,
    P: FnMut(&R::Item, &R::Item) -> bool + Clone,
{
}
