//! # searching-rs - Lazy Range Algorithms
//!
//! Generic searching, comparison and grouping algorithms over *ranges*: cursors
//! over a sequence that advertise what they can do.
//!
//! Ranges come in four capability tiers (see [`range`]):
//! 1. **Input**: single pass (`is_empty`, `front`, `pop_front`)
//! 2. **Forward**: can `save` an independent copy of the cursor
//! 3. **Bidirectional**: can also be consumed from the back
//! 4. **Random access**: O(1) length, indexing and slicing
//!
//! Every algorithm asks for the weakest tier it needs. Views such as
//! [`filter`], [`uniq`], [`group`] and [`until`] are lazy and compose freely.
//! Searches return the suffix of the haystack starting at the match, and an
//! empty suffix when there is none.
//!
//! ## Example
//!
//! ```
//! use searching_rs::{count_subrange, find_split, group, InputRange};
//!
//! let text = "one, two, three";
//! assert_eq!(count_subrange(text, ", "), Ok(2));
//!
//! let split = find_split(text, ", ");
//! let head: String = split.before.elements().collect();
//! assert_eq!(head, "one");
//! assert_eq!(split.after, "two, three");
//!
//! let runs: Vec<(char, usize)> = group("aaabcc").elements().collect();
//! assert_eq!(runs, vec![('a', 3), ('b', 1), ('c', 2)]);
//! ```
//!
//! ## Built-in ranges
//!
//! - `&[T]`: random access, yields `&T`
//! - `&str`: bidirectional, yields decoded `char`s
//! - `a..b` over primitive integers: random access
//! - `a..` over primitive integers: infinite forward
//!
//! Any `Iterator` can be lifted with [`iter_range`], and any range turned back
//! into an iterator with [`InputRange::elements`].

pub mod range;

mod adapters;
mod boyer_moore;
mod common_prefix;
mod comparison;
mod counting;
mod error;
mod filter;
mod group;
mod needle;
mod search;
mod uniq;
mod until;

#[cfg(test)]
mod tests;

pub use adapters::{input_only, iter_range, repeat, take, InputOnly, IterRange, RangeIter, Repeat, Take};
pub use boyer_moore::BoyerMooreFinder;
pub use common_prefix::{common_prefix, common_prefix_by, common_prefix_str, common_prefix_utf8};
pub use comparison::{
    compare, compare_by, equal, equal_by, max_element_with_count, max_element_with_count_by,
    max_subrange, max_subrange_by, min_element_with_count, min_element_with_count_by, min_subrange,
    min_subrange_by, mismatch, mismatch_by, Extremum,
};
pub use counting::{
    balanced_parens, balanced_parens_with_limit, count, count_by, count_if, count_subrange,
    count_subrange_by, count_until, count_until_any, count_until_any_by, count_until_by,
    count_until_if, count_until_subrange, count_until_subrange_by,
};
pub use error::{Error, Result};
pub use filter::{filter, filter_bidirectional, Filter, FilterBidirectional};
pub use group::{group, group_by, Group};
pub use needle::{
    ends_with, ends_with_by, skip_over, skip_over_by, starts_with, starts_with_any,
    starts_with_any_by, starts_with_by, Elem, Needle, NeedleSet, NeedleWidth,
};
pub use range::{BidirectionalRange, ForwardRange, InputRange, RandomAccessRange};
pub use search::{
    all, any, can_find, can_find_any, can_find_any_by, can_find_by, can_find_if,
    can_find_subrange, can_find_subrange_by, find, find_adjacent, find_adjacent_by, find_among,
    find_among_by, find_any, find_any_by, find_by, find_byte, find_bytes, find_if, find_skip,
    find_skip_by, find_split, find_split_after, find_split_after_by, find_split_before,
    find_split_before_by, find_split_by, find_str, find_subrange, find_subrange_by, find_subrange_indexed, find_subrange_indexed_by,
    FindSplit, FindSplitAfter, FindSplitBefore,
};
pub use uniq::{uniq, uniq_by, Uniq};
pub use until::{
    until, until_by, until_if, until_subrange, until_subrange_by, Boundary, Stop, StopAtElem,
    StopAtSubrange, StopIf, Until,
};
