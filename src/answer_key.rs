//! Canonical answer key.
//!
//! A plain recursive quicksort over the original input, independent of what
//! the user answers. It partitions three ways (less, equal, greater) around a
//! pivot chosen with the same [`PivotPolicy`] the game uses.

use rand::Rng;

use crate::engine::Segment;
use crate::pivot::PivotPolicy;

/// Sort `values` into the order a flawless player would reach.
pub fn answer_key<R: Rng + ?Sized>(values: &[i64], policy: PivotPolicy, rng: &mut R) -> Vec<i64> {
    if values.len() < 2 {
        return values.to_vec();
    }

    let pivot = policy
        .choose(values, Segment::new(0, values.len() - 1), rng)
        .value;

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for &v in values {
        match v.cmp(&pivot) {
            std::cmp::Ordering::Less => less.push(v),
            std::cmp::Ordering::Equal => equal.push(v),
            std::cmp::Ordering::Greater => greater.push(v),
        }
    }

    let mut sorted = answer_key(&less, policy, rng);
    sorted.extend(equal);
    sorted.extend(answer_key(&greater, policy, rng));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(values: &[i64], policy: PivotPolicy) -> Vec<i64> {
        answer_key(values, policy, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(key(&[], PivotPolicy::First), Vec::<i64>::new());
        assert_eq!(key(&[42], PivotPolicy::Middle), vec![42]);
    }

    #[test]
    fn test_example_list_under_each_policy() {
        let input = [3, 9, 2, 8, 5, 1];
        for policy in [PivotPolicy::First, PivotPolicy::Middle, PivotPolicy::Random] {
            assert_eq!(key(&input, policy), vec![1, 2, 3, 5, 8, 9]);
        }
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(
            key(&[3, 1, 2, 1, 3, 0], PivotPolicy::First),
            vec![0, 1, 1, 2, 3, 3]
        );
        assert_eq!(key(&[7, 7, 7, 7], PivotPolicy::Middle), vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_reverse_sorted_and_negatives() {
        assert_eq!(
            key(&[5, -1, 4, -3, 2], PivotPolicy::First),
            vec![-3, -1, 2, 4, 5]
        );
    }

    fn policy_strategy() -> impl Strategy<Value = PivotPolicy> {
        prop_oneof![
            Just(PivotPolicy::First),
            Just(PivotPolicy::Middle),
            Just(PivotPolicy::Random),
        ]
    }

    proptest! {
        #[test]
        fn prop_answer_key_is_sorted_permutation(
            values in proptest::collection::vec(-50i64..50, 0..40),
            policy in policy_strategy(),
            seed in any::<u64>(),
        ) {
            let sorted = answer_key(&values, policy, &mut StdRng::seed_from_u64(seed));
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(sorted, expected);
        }
    }
}
