use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use num_traits::PrimInt;

/// Positions of two elements whose values add up to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPair {
    pub first: usize,
    /// Always greater than `first`.
    pub second: usize,
}

impl IndexPair {
    pub fn new(first: usize, second: usize) -> Self {
        IndexPair { first, second }
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Finds the first pair of indices `(i, j)`, `i < j`, with `nums[i] + nums[j] == target`.
///
/// The scan runs once from left to right, so `j` is the smallest index that completes any pair
/// and `i` is the first index holding the needed complement. Returns `None` when no pair exists.
///
/// The sum is compared exactly: if `target - nums[j]` does not fit in `T`, nothing earlier can
/// complete the pair at `j` and the lookup is skipped.
pub fn solve<T>(nums: &[T], target: T) -> Option<IndexPair>
where
    T: PrimInt + Hash,
{
    let mut seen: HashMap<T, usize> = HashMap::with_capacity(nums.len());

    for (i, &num) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(&num) {
            if let Some(&j) = seen.get(&complement) {
                log::debug!("complement found for index {} at index {}", i, j);
                return Some(IndexPair::new(j, i));
            }
        }
        // First occurrence wins, later duplicates keep the earlier index.
        seen.entry(num).or_insert(i);
    }

    log::debug!("no pair among {} values", nums.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_known_cases() {
        assert_eq!(solve(&[2, 7, 11, 15], 9), Some(IndexPair::new(0, 1)));
        assert_eq!(solve(&[3, 2, 4], 6), Some(IndexPair::new(1, 2)));
        assert_eq!(solve(&[3, 3], 6), Some(IndexPair::new(0, 1)));
        assert_eq!(solve(&[1, 2, 3, 4, 5], 9), Some(IndexPair::new(3, 4)));
        assert_eq!(solve(&[-1, -2, -3, -4, -5], -8), Some(IndexPair::new(2, 4)));
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(solve(&[1, 2, 3], 100), None);
        assert_eq!(solve(&[5], 10), None);
    }

    #[test]
    fn test_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(solve(&empty, 0), None);
        assert_eq!(solve(&empty, i32::MIN), None);
    }

    #[test]
    fn test_element_is_not_its_own_complement() {
        // 3 + 3 == 6, but there's only one 3
        assert_eq!(solve(&[3, 1, 7], 6), None);
    }

    #[test]
    fn test_duplicates_keep_first_index() {
        assert_eq!(solve(&[4, 9, 4, 1, 5], 9), Some(IndexPair::new(0, 4)));
        assert_eq!(solve(&[1, 1, 1, 1], 2), Some(IndexPair::new(0, 1)));
    }

    #[test]
    fn test_minimal_second_index() {
        // (0, 3) and (1, 2) are both valid; (1, 2) completes first
        assert_eq!(solve(&[1, 2, 3, 4], 5), Some(IndexPair::new(1, 2)));
    }

    #[test]
    fn test_no_overflow_at_bounds() {
        assert_eq!(solve(&[i32::MAX, 1, -1], i32::MIN), None);
        assert_eq!(
            solve(&[i32::MIN, 5, i32::MAX], -1),
            Some(IndexPair::new(0, 2))
        );
        assert_eq!(solve(&[i32::MAX, i32::MAX], -2), None);
        assert_eq!(solve(&[u8::MAX, 0, 1], 1), Some(IndexPair::new(1, 2)));
        assert_eq!(solve(&[200u8, 100], 44), None);
    }

    #[test]
    fn test_idempotent() {
        let nums = [8, -3, 14, 5, 0, -3, 11];
        let first = solve(&nums, 11);
        for _ in 0..10 {
            assert_eq!(solve(&nums, 11), first);
        }
        assert_eq!(first, Some(IndexPair::new(1, 2)));
    }

    #[test]
    fn test_display() {
        assert_eq!(IndexPair::new(3, 17).to_string(), "3 17");
    }

    /// Brute force reference: smallest `j`, then the smallest `i` for that `j`.
    fn reference(nums: &[i32], target: i32) -> Option<IndexPair> {
        (1..nums.len()).find_map(|j| {
            (0..j)
                .find(|&i| nums[i] as i64 + nums[j] as i64 == target as i64)
                .map(|i| IndexPair::new(i, j))
        })
    }

    #[test]
    fn test_random_against_reference() {
        let mut rng = StdRng::seed_from_u64(0x2a);

        for _ in 0..2000 {
            let len = rng.random_range(0..24);
            let nums: Vec<i32> = (0..len).map(|_| rng.random_range(-20..20)).collect();
            let target = rng.random_range(-40..40);

            let found = solve(&nums, target);
            assert_eq!(found, reference(&nums, target), "{:?} {}", nums, target);

            if let Some(pair) = found {
                assert!(pair.first < pair.second);
                assert_eq!(nums[pair.first] + nums[pair.second], target);
            }
        }
    }

    #[test]
    fn test_random_extreme_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX];

        for _ in 0..500 {
            let len = rng.random_range(0..10);
            let nums: Vec<i32> = (0..len)
                .map(|_| pool[rng.random_range(0..pool.len())])
                .collect();
            let target = pool[rng.random_range(0..pool.len())];

            assert_eq!(solve(&nums, target), reference(&nums, target));
        }
    }
}
