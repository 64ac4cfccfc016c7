use std::cmp::Ordering;

use crate::{CodePoint, CodePointRange};

/// Searches a canonical range list for the range containing `cp`.
///
/// Returns:
/// - `Ok(index)` if `cp` lies within `ranges[index]`.
/// - `Err(index)` otherwise; `index` is the position where a range containing
///   `cp` would be inserted while keeping the list sorted.
///
/// Complexity: O(log n).
pub fn search_code_point(ranges: &[CodePointRange], cp: CodePoint) -> Result<usize, usize> {
    match (ranges.first(), ranges.last()) {
        (Some(first), _) if cp < first.start() => return Err(0),
        (_, Some(last)) if cp > last.end() => return Err(ranges.len()),
        (None, _) => return Err(0),
        _ => (),
    }

    ranges.binary_search_by(|range| {
        if cp < range.start() {
            Ordering::Greater
        } else if cp > range.end() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}
