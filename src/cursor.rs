//! A sliding window over one LCS result, exposing one change region at a
//! time in both of the sequences that were aligned.

use crate::lcs::Match;

/// View over an LCS result plus the two sequence lengths it was computed
/// from. Never modifies the underlying match records; purely a cursor.
pub(crate) struct Cursor<'a> {
    lcs: &'a [Match],
    i_len: usize,
    j_len: usize,

    /// Number of `advance` calls made so far (including the implicit
    /// "no matches left" state once it exceeds `lcs.len()`).
    pub index: usize,
    pub i_begin: usize,
    pub i_end: usize,
    pub j_begin: usize,
    pub j_end: usize,
}

impl<'a> Cursor<'a> {
    /// Initializes a cursor over `lcs`, an alignment of two sequences of
    /// length `i_len` and `j_len`. The window starts at the sequence
    /// start and ends at the first match (or end-of-input if `lcs` is
    /// empty).
    pub(crate) fn new(lcs: &'a [Match], i_len: usize, j_len: usize) -> Self {
        let (i_end, j_end) = match lcs.first() {
            Some(m) => (m.i, m.j),
            None => (i_len, j_len),
        };
        Cursor { lcs, i_len, j_len, index: 0, i_begin: 0, i_end, j_begin: 0, j_end }
    }

    /// Advances to the next match. When `snap_begin` is set, the window
    /// start first snaps to the current window end before the end moves
    /// on — this is how the driver "consumes" one bracket at a time.
    pub(crate) fn advance(&mut self, snap_begin: bool) {
        self.index += 1;
        if snap_begin {
            self.i_begin = self.i_end;
            self.j_begin = self.j_end;
        }
        match self.lcs.get(self.index) {
            Some(m) => {
                self.i_end = m.i;
                self.j_end = m.j;
            }
            None => {
                self.i_end = self.i_len;
                self.j_end = self.j_len;
            }
        }
    }
}
