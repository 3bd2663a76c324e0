use crate::{
    balanced_parens_with_limit, filter, filter_bidirectional, group, uniq, until, Boundary,
    InputRange,
};
use proptest::prelude::*;

fn runs() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..3, 0..48)
}

proptest! {
    /// Property 1: Uniq matches Vec::dedup from both ends
    #[test]
    fn prop_uniq_is_dedup(input in runs()) {
        let mut expected = input.clone();
        expected.dedup();

        let forward: Vec<u8> = uniq(&input[..]).elements().copied().collect();
        prop_assert_eq!(&forward, &expected);

        let mut backward: Vec<u8> = uniq(&input[..]).elements().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(backward, expected);
    }

    /// Property 2: Expanding the groups reconstructs the input
    #[test]
    fn prop_group_reconstructs(input in runs()) {
        let groups: Vec<(u8, usize)> = group(&input[..]).elements().map(|(x, n)| (*x, n)).collect();

        let expanded: Vec<u8> = groups
            .iter()
            .flat_map(|&(x, n)| std::iter::repeat(x).take(n))
            .collect();
        prop_assert_eq!(expanded, input);

        for pair in groups.windows(2) {
            prop_assert_ne!(pair[0].0, pair[1].0);
        }
        prop_assert!(groups.iter().all(|&(_, n)| n > 0));
    }

    /// Property 3: Filtered views agree with Iterator::filter
    #[test]
    fn prop_filter_matches_iterator(input: Vec<u8>, modulus in 1u8..5) {
        let expected: Vec<u8> = input.iter().copied().filter(|x| x % modulus == 0).collect();

        let forward: Vec<u8> = filter(&input[..], |x| **x % modulus == 0).elements().copied().collect();
        prop_assert_eq!(&forward, &expected);

        let mut backward: Vec<u8> = filter_bidirectional(&input[..], |x| **x % modulus == 0)
            .elements()
            .rev()
            .copied()
            .collect();
        backward.reverse();
        prop_assert_eq!(backward, expected);
    }

    /// Property 4: An exclusive until is take_while, an inclusive one adds the sentinel
    #[test]
    fn prop_until_is_take_while(input in runs(), sentinel in 0u8..3) {
        let expected: Vec<u8> = input.iter().copied().take_while(|x| *x != sentinel).collect();
        let open: Vec<u8> = until(&input[..], &sentinel, Boundary::Exclusive).elements().copied().collect();
        prop_assert_eq!(&open, &expected);

        let closed: Vec<u8> = until(&input[..], &sentinel, Boundary::Inclusive).elements().copied().collect();
        let extra = usize::from(expected.len() < input.len());
        prop_assert_eq!(closed.len(), expected.len() + extra);
        prop_assert_eq!(&closed[..expected.len()], &expected[..]);
    }

    /// Property 5: Nested parentheses respect the depth limit
    #[test]
    fn prop_balanced_parens_depth(depth in 0usize..16, limit in 0usize..16) {
        let text = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
        prop_assert_eq!(
            balanced_parens_with_limit(text.as_str(), '(', ')', limit),
            depth <= limit
        );
    }
}

/// Bolero fuzz test: Grouping never panics and preserves the element count
#[test]
fn fuzz_group_counts() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let total: usize = group(&input[..]).elements().map(|(_, n)| n).sum();
        assert_eq!(total, input.len());
        assert!(uniq(&input[..]).elements().count() <= input.len());
    });
}
