//! Compaction with merging of adjacent equal values.
//!
//! The primitive is direction-agnostic: callers pick the traversal order of
//! a row or column so that its front is the edge values travel toward.

/// Compact a line toward its front, merging adjacent equal values.
///
/// Empty slots are dropped. When a value equals the last output value and
/// that output value was not itself produced by a merge, the two are
/// replaced by `merge(value)`. Each destination slot merges at most once,
/// so `[2, 2, 2, 2]` becomes `[4, 4]` rather than `[8]`.
///
/// The output is never longer than the input; see [`pad_line`] to restore
/// the original length.
///
/// ```
/// use grid_puzzles::algo::move_and_merge;
///
/// let line = [Some(2), Some(2), Some(4), None, Some(2)];
/// assert_eq!(move_and_merge(&line, |v| v * 2), vec![4, 4, 2]);
/// ```
pub fn move_and_merge<T, F>(line: &[Option<T>], merge: F) -> Vec<T>
where
    T: PartialEq + Clone,
    F: Fn(&T) -> T,
{
    let mut out: Vec<T> = Vec::with_capacity(line.len());
    let mut last_merged = false;

    for value in line.iter().flatten() {
        if !last_merged && out.last() == Some(value) {
            if let Some(last) = out.last_mut() {
                *last = merge(value);
            }
            last_merged = true;
        } else {
            out.push(value.clone());
            last_merged = false;
        }
    }

    out
}

/// Right-pad compacted values with empties up to `len`.
#[must_use]
pub fn pad_line<T>(values: Vec<T>, len: usize) -> Vec<Option<T>> {
    let mut padded: Vec<Option<T>> = values.into_iter().map(Some).collect();
    padded.resize_with(len.max(padded.len()), || None);
    padded
}
