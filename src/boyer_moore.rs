use crate::range::RandomAccessRange;
use ahash::AHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Boyer–Moore search tables for a fixed needle.
///
/// Building the finder costs O(m) for the bad-character table and O(m²) in
/// the worst case for the good-suffix table. A finder can then be run over
/// any number of random-access haystacks.
///
/// ```
/// use searching_rs::BoyerMooreFinder;
///
/// let finder = BoyerMooreFinder::new(b"needle");
/// assert_eq!(finder.find_in(&b"haystack with a needle in it"[..]), b"needle in it");
/// assert!(finder.find_in(&b"no match"[..]).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BoyerMooreFinder<T> {
    needle: Vec<T>,
    /// Shift after a mismatch at each needle position (good-suffix rule).
    skip: Vec<usize>,
    /// Last index of each element in the needle, final element excluded.
    occ: AHashMap<T, usize>,
}

impl<T: Hash + Eq + Clone> BoyerMooreFinder<T> {
    pub fn new(needle: &[T]) -> Self {
        let mut occ = AHashMap::new();
        if let Some((_, init)) = needle.split_last() {
            for (i, element) in init.iter().enumerate() {
                occ.insert(element.clone(), i);
            }
        }

        let len = needle.len();
        let mut skip = vec![0; len];
        for portion in 0..len {
            let mut shift = 0;
            while shift < len && !suffix_matches(needle, portion, shift) {
                shift += 1;
            }
            skip[len - portion - 1] = shift;
        }

        log::trace!(
            "built Boyer-Moore tables: needle {}, {} distinct leading elements",
            len,
            occ.len()
        );

        Self {
            needle: needle.to_vec(),
            skip,
            occ,
        }
    }

    /// Returns the suffix of `haystack` starting at the first occurrence of
    /// the needle, or an empty suffix.
    ///
    /// An empty needle matches at the front.
    pub fn find_in<H>(&self, mut haystack: H) -> H
    where
        H: RandomAccessRange,
        H::Item: Borrow<T>,
    {
        let needle_len = self.needle.len();
        if needle_len == 0 {
            return haystack;
        }
        let haystack_len = haystack.len();
        if needle_len > haystack_len {
            haystack.advance_by(haystack_len);
            return haystack;
        }

        let mut hpos = 0;
        while hpos <= haystack_len - needle_len {
            let mut npos = needle_len - 1;
            loop {
                let item = haystack.at(hpos + npos);
                if *item.borrow() != self.needle[npos] {
                    let bad_char = match self.occ.get(item.borrow()) {
                        Some(&last) if last < npos => npos - last,
                        Some(_) => 0,
                        None => npos + 1,
                    };
                    hpos += self.skip[npos].max(bad_char).max(1);
                    break;
                }
                if npos == 0 {
                    haystack.advance_by(hpos);
                    return haystack;
                }
                npos -= 1;
            }
        }

        haystack.advance_by(haystack_len);
        haystack
    }

    pub fn len(&self) -> usize {
        self.needle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn needle(&self) -> &[T] {
        &self.needle
    }
}

/// True if the last `portion` elements of `needle`, moved `offset` places to
/// the left, agree with the needle there (cut off at its start) and are not
/// preceded by the element that failed.
fn suffix_matches<T: Eq>(needle: &[T], portion: usize, offset: usize) -> bool {
    let len = needle.len();
    let (virtual_begin, ignore) = if offset + portion <= len {
        (len - offset - portion, 0)
    } else {
        (0, offset + portion - len)
    };
    if virtual_begin > 0 && needle[virtual_begin - 1] == needle[len - portion - 1] {
        return false;
    }
    let delta = portion - ignore;
    needle[len - delta..] == needle[virtual_begin..virtual_begin + delta]
}
