use crate::adapters::{take, Take};
use crate::error::{Error, Result};
use crate::range::{ForwardRange, InputRange};

/// Returns the longest prefix of `r1` that `r2` also starts with.
///
/// Over `&str` ranges elements are decoded `char`s, so the prefix always ends
/// on a character boundary.
///
/// ```
/// use searching_rs::{common_prefix, InputRange};
///
/// let prefix: String = common_prefix("hello, world", "hello, there").elements().collect();
/// assert_eq!(prefix, "hello, ");
/// ```
pub fn common_prefix<R1, R2>(r1: R1, r2: R2) -> Take<R1>
where
    R1: ForwardRange,
    R2: InputRange,
    R1::Item: PartialEq<R2::Item>,
{
    common_prefix_by(r1, r2, |a, b| a == b)
}

pub fn common_prefix_by<R1, R2, P>(r1: R1, mut r2: R2, mut pred: P) -> Take<R1>
where
    R1: ForwardRange,
    R2: InputRange,
    P: FnMut(&R1::Item, &R2::Item) -> bool,
{
    let mut cursor = r1.save();
    let mut len = 0;
    while !cursor.is_empty() && !r2.is_empty() && pred(&cursor.front(), &r2.front()) {
        cursor.pop_front();
        r2.pop_front();
        len += 1;
    }
    take(r1, len)
}

/// String slice form of [`common_prefix`].
pub fn common_prefix_str<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map_or_else(
            || a.len().min(b.len()),
            |((index, _), _)| index,
        );
    &a[..end]
}

/// Common prefix of two UTF-8 byte strings, compared a code point at a time.
///
/// A difference inside a multi-byte sequence cuts the prefix back to the
/// start of that sequence, so the result is always whole code points.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] with the offset of the offending
/// sequence when `a` has an invalid lead byte, or a sequence that is cut off
/// where the shorter input ends.
pub fn common_prefix_utf8<'a>(a: &'a [u8], b: &[u8]) -> Result<&'a [u8]> {
    let limit = a.len().min(b.len());
    let mut start = 0;
    while start < limit {
        let width = utf8_width(a[start]).ok_or(Error::MalformedInput { offset: start })?;
        let end = start + width;
        if a[start..end.min(limit)] != b[start..end.min(limit)] {
            return Ok(&a[..start]);
        }
        if end > limit {
            return Err(Error::MalformedInput { offset: start });
        }
        start = end;
    }
    Ok(&a[..limit])
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}
