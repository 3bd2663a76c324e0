use crate::{
    common_prefix, common_prefix_str, common_prefix_utf8, compare, equal, min_element_with_count,
    mismatch, Error, InputRange,
};
use proptest::prelude::*;

proptest! {
    /// Property 1: Equality is reflexive
    #[test]
    fn prop_equal_reflexive(input: Vec<u8>) {
        prop_assert!(equal(&input[..], &input[..]));
    }

    /// Property 2: A range never equals its own tail
    #[test]
    fn prop_equal_rejects_tail(input in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assert!(!equal(&input[..], &input[1..]));
    }

    /// Property 3: Comparison agrees with slice ordering and is antisymmetric
    #[test]
    fn prop_compare_lexicographic(a: Vec<u8>, b: Vec<u8>) {
        let forward = compare(&a[..], &b[..]);
        prop_assert_eq!(forward, a.cmp(&b));
        prop_assert_eq!(compare(&b[..], &a[..]), forward.reverse());
    }

    /// Property 4: The minimum and its count match a direct scan
    #[test]
    fn prop_min_element_with_count(input: Vec<i16>) {
        match input.iter().min() {
            None => prop_assert_eq!(min_element_with_count(&input[..]), Err(Error::EmptyRange)),
            Some(min) => {
                let expected = input.iter().filter(|x| *x == min).count();
                prop_assert_eq!(min_element_with_count(&input[..]), Ok((min, expected)));
            }
        }
    }

    /// Property 5: Mismatch stops at the first difference
    #[test]
    fn prop_mismatch_offset(a in prop::collection::vec(0u8..3, 0..16), b in prop::collection::vec(0u8..3, 0..16)) {
        let (rest_a, rest_b) = mismatch(&a[..], &b[..]);
        let offset = a.len() - rest_a.len();
        prop_assert_eq!(offset, b.len() - rest_b.len());
        prop_assert_eq!(&a[..offset], &b[..offset]);
        prop_assert!(rest_a.is_empty() || rest_b.is_empty() || rest_a[0] != rest_b[0]);
    }

    /// Property 6: Every common prefix form agrees on strings
    #[test]
    fn prop_common_prefix_forms_agree(a in "[aé€😀]{0,8}", b in "[aé€😀]{0,8}") {
        let by_char: String = common_prefix(a.as_str(), b.as_str()).elements().collect();
        let by_str = common_prefix_str(&a, &b);
        prop_assert_eq!(by_char.as_str(), by_str);
        prop_assert_eq!(common_prefix_utf8(a.as_bytes(), b.as_bytes()), Ok(by_str.as_bytes()));
    }
}

/// Bolero fuzz test: Byte-level common prefix never panics and stays on code
/// point boundaries of valid input
#[test]
fn fuzz_common_prefix_utf8() {
    bolero::check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(a, b)| {
            if let Ok(prefix) = common_prefix_utf8(a, b) {
                assert!(a.starts_with(prefix));
                assert!(b.starts_with(prefix));
                if std::str::from_utf8(a).is_ok() {
                    assert!(std::str::from_utf8(prefix).is_ok());
                }
            }
        });
}
