use std::iter::Peekable;

use crate::{CodePoint, CodePointRange, MAX_CODE_POINT};

/// Yields the complement (gaps) within the code point space `[0, 0x10FFFF]`
/// of a stream of canonical ranges.
///
/// The output is a stream of canonical ranges covering every code point that is
/// NOT covered by the input:
/// - `[0, r1.start - 1]`, omitted when `r1.start == 0`;
/// - `[r_i.end + 1, r_{i+1}.start - 1]` for each consecutive pair;
/// - `[r_n.end + 1, 0x10FFFF]`, omitted when `r_n.end == 0x10FFFF`.
///
/// An empty input yields the single range `[0, 0x10FFFF]`; an input covering
/// the whole space yields nothing.
///
/// Assumptions on the input:
/// - Ranges are yielded in ascending order by `start`.
/// - Ranges do not overlap. Adjacent or overlapping input ranges are tolerated
///   and coalesced on the fly, so the output is canonical either way.
///
/// Complexity: O(n) over the input, constant extra memory.
pub fn complement_ranges<I>(ranges: I) -> ComplementRanges<I::IntoIter>
where
    I: IntoIterator<Item = CodePointRange>,
{
    ComplementRanges::new(ranges.into_iter())
}

/// Iterator adapter implementing [`complement_ranges`].
pub struct ComplementRanges<I>
where
    I: Iterator<Item = CodePointRange>,
{
    it: Peekable<I>,
    /// First code point not yet known to be covered or emitted.
    /// `MAX_CODE_POINT + 1` once the whole space has been walked.
    cursor: u32,
}

impl<I> ComplementRanges<I>
where
    I: Iterator<Item = CodePointRange>,
{
    pub fn new(it: I) -> Self {
        Self {
            it: it.peekable(),
            cursor: 0,
        }
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.cursor > MAX_CODE_POINT
    }
}

impl<I> Iterator for ComplementRanges<I>
where
    I: Iterator<Item = CodePointRange>,
{
    type Item = CodePointRange;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.is_done() {
            match self.it.peek() {
                None => {
                    // No more covered ranges: tail gap [cursor, MAX]
                    let start: CodePoint = self.cursor;
                    self.cursor = MAX_CODE_POINT + 1;
                    return Some(CodePointRange::new_unchecked(start, MAX_CODE_POINT));
                }
                Some(r) => {
                    // Range entirely before the cursor (overlap in the input): consume it.
                    if r.end() < self.cursor {
                        self.it.next();
                        continue;
                    }

                    if r.start() > self.cursor {
                        let gap = CodePointRange::new_unchecked(self.cursor, r.start() - 1);
                        self.cursor = r.start();
                        return Some(gap);
                    }

                    // r.start <= cursor <= r.end: skip past the covered range.
                    self.cursor = r.end() + 1;
                    self.it.next();
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_done() {
            return (0, Some(0));
        }
        let (_, upper) = self.it.size_hint();
        (0, upper.and_then(|n| n.checked_add(1)))
    }
}

impl<I> std::iter::FusedIterator for ComplementRanges<I> where I: Iterator<Item = CodePointRange> {}
