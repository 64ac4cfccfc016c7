//! Canonicalization of arbitrary range lists.
//!
//! A range list is *canonical* when its ranges are sorted by `start`, pairwise
//! disjoint and non-adjacent (`ranges[i].end + 1 < ranges[i + 1].start`).
//! The canonical form of a set of code points is unique, so two canonical lists
//! describe the same set if and only if they are equal element by element.

use itertools::Itertools;

use crate::CodePointRange;

/// Converts an arbitrary list of ranges into its canonical form.
///
/// Input ranges may arrive in any order and may overlap or touch each other.
/// The result is sorted by `start`, and every group of overlapping or adjacent
/// input ranges is coalesced into a single output range.
///
/// Already canonical input is returned as is, without sorting.
///
/// Complexity: O(n) for canonical input, O(n log n) otherwise.
pub fn normalize_ranges(mut ranges: Vec<CodePointRange>) -> Vec<CodePointRange> {
    if is_normalized(&ranges) {
        return ranges;
    }

    let input_len = ranges.len();
    ranges.sort_unstable();
    let merged: Vec<CodePointRange> = ranges
        .into_iter()
        .coalesce(|prev, next| {
            if prev.touches(&next) {
                Ok(CodePointRange::new_unchecked(
                    prev.start(),
                    prev.end().max(next.end()),
                ))
            } else {
                Err((prev, next))
            }
        })
        .collect();

    log::trace!(
        "normalized {input_len} code point ranges into {} canonical ranges",
        merged.len()
    );
    merged
}

/// Returns `true` if `ranges` is already in canonical form.
pub fn is_normalized(ranges: &[CodePointRange]) -> bool {
    ranges
        .iter()
        .tuple_windows()
        .all(|(prev, next)| !prev.touches(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: u32, end: u32) -> CodePointRange {
        CodePointRange::try_new(start, end).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_ranges(vec![]).is_empty());
        assert!(is_normalized(&[]));
    }

    #[test]
    fn test_canonical_input_unchanged() {
        let input = vec![r(0, 5), r(7, 9), r(0x370, 0x3FF)];
        assert!(is_normalized(&input));
        assert_eq!(normalize_ranges(input.clone()), input);
    }

    #[test]
    fn test_unsorted_input_sorted() {
        let got = normalize_ranges(vec![r(20, 30), r(0, 5), r(10, 12)]);
        assert_eq!(got, vec![r(0, 5), r(10, 12), r(20, 30)]);
    }

    #[test]
    fn test_adjacent_ranges_coalesced() {
        let input = vec![r(0, 5), r(6, 9)];
        assert!(!is_normalized(&input));
        assert_eq!(normalize_ranges(input), vec![r(0, 9)]);
    }

    #[test]
    fn test_overlapping_and_nested_ranges_coalesced() {
        let got = normalize_ranges(vec![r(10, 20), r(0, 12), r(14, 15), r(30, 40), r(21, 21)]);
        assert_eq!(got, vec![r(0, 21), r(30, 40)]);
    }

    #[test]
    fn test_duplicates_coalesced() {
        let got = normalize_ranges(vec![r(0x41, 0x5A), r(0x41, 0x5A), r(0x61, 0x7A)]);
        assert_eq!(got, vec![r(0x41, 0x5A), r(0x61, 0x7A)]);
    }

    #[test]
    fn test_ranges_at_code_space_edges() {
        let got = normalize_ranges(vec![r(0x10FFFF, 0x10FFFF), r(0, 0), r(1, 0x10FFFE)]);
        assert_eq!(got, vec![CodePointRange::FULL]);
    }

    #[test]
    fn test_random_single_code_points() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..50 {
            let mut present = vec![false; 512];
            let mut input = Vec::new();
            for _ in 0..rng.random_range(0..200) {
                let cp = rng.random_range(0..512u32);
                present[cp as usize] = true;
                input.push(r(cp, cp));
            }

            let got = normalize_ranges(input);
            assert!(is_normalized(&got));
            for (cp, &expected) in present.iter().enumerate() {
                let covered = got.iter().any(|range| range.contains(cp as u32));
                assert_eq!(covered, expected, "code point {cp}");
            }
        }
    }
}
