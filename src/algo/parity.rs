//! Permutation parity by inversion counting.
//!
//! A sliding puzzle whose vacant cell starts in the last slot is solvable
//! exactly when its tile permutation is even.

/// Number of index pairs `(i, j)` with `i < j` and `values[i] > values[j]`.
///
/// Quadratic; puzzle permutations are short.
#[must_use]
pub fn inversions<T: PartialOrd>(values: &[T]) -> usize {
    values
        .iter()
        .enumerate()
        .map(|(i, a)| values[i + 1..].iter().filter(|b| a > *b).count())
        .sum()
}

/// True iff the permutation has an even number of inversions.
///
/// ```
/// use grid_puzzles::algo::is_even;
///
/// assert!(is_even(&[1, 2, 3, 4]));
/// assert!(!is_even(&[2, 1, 3, 4]));
/// ```
#[must_use]
pub fn is_even<T: PartialOrd>(values: &[T]) -> bool {
    inversions(values) % 2 == 0
}

/// Make an odd permutation even by swapping its first inverted pair.
///
/// Scans from the front for the first element that has a smaller element
/// somewhere after it, and swaps it with the first such element. Any single
/// swap flips parity. Returns whether a swap happened; even permutations
/// are left untouched.
pub fn make_even<T: PartialOrd>(values: &mut [T]) -> bool {
    if is_even(values) {
        return false;
    }

    for i in 0..values.len() {
        let smaller = values[i + 1..]
            .iter()
            .position(|b| *b < values[i])
            .map(|offset| i + 1 + offset);

        if let Some(j) = smaller {
            values.swap(i, j);
            return true;
        }
    }

    false
}
