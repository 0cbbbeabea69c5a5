//! Longest Common Subsequence extraction with a grouping-preferring tie break.
//!
//! The core recurrence is the textbook LCS dynamic program (see Cormen,
//! Leiserson, Rivest & Stein), run from the end of both sequences toward
//! the beginning so that ties are biased toward matches earlier in the
//! input. A second table, `g`, tracks how well the chosen LCS "groups"
//! into contiguous runs; the traceback (`take_match`) prefers a match
//! whenever taking it does not cost anything in LCS length or grouping,
//! which in practice produces far fewer, longer runs of matched bytes
//! than an LCS that only optimizes for length.

use crate::table::{Cell, Table};

/// Hard cap on either input length to the extractor, chosen so every
/// table index and cell field fits in 16 bits.
pub const MAX_INPUT_LEN: usize = 65_535;

/// One matched byte: `x[i] == y[j] == byte`, part of a chosen LCS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match {
    pub i: usize,
    pub j: usize,
    pub byte: u8,
}

/// Computes the LCS of `x` and `y`, preferring the most contiguous
/// grouping among all length-optimal subsequences.
///
/// Returns an empty vector (not an error) when either input is empty,
/// when either exceeds [`MAX_INPUT_LEN`], or when the required table or
/// match buffer cannot be allocated — all three are the same degenerate
/// case from the caller's point of view: "no usable common subsequence".
pub(crate) fn lcs(x: &[u8], y: &[u8]) -> Vec<Match> {
    let m = x.len();
    let n = y.len();

    if m == 0 || n == 0 {
        return Vec::new();
    }
    if m > MAX_INPUT_LEN || n > MAX_INPUT_LEN {
        tracing::warn!(m, n, max = MAX_INPUT_LEN, "input exceeds LCS table bound, degrading");
        return Vec::new();
    }

    let Some(mut table) = Table::try_new(m, n) else {
        tracing::warn!(m, n, "alignment table allocation failed, degrading");
        return Vec::new();
    };

    fill(&mut table, x, y, m, n);

    let total = table.get(0, 0).c as usize;
    if total == 0 {
        return Vec::new();
    }

    let mut matches = Vec::new();
    if matches
        .try_reserve_exact(total)
        .is_err()
    {
        tracing::warn!(total, "match buffer allocation failed, degrading");
        return Vec::new();
    }
    matches.resize(total, Match { i: 0, j: 0, byte: 0 });

    trace_back(&table, x, y, total, &mut matches);
    matches
}

/// Fills the alignment table from `(m-1, n-1)` down to `(0, 0)`.
///
/// For the cell at `(i, j)`: `down = (i+1, j)`, `right = (i, j+1)`,
/// `diag = (i+1, j+1)` — all resolved via [`Table::get`], which returns
/// the zero cell once either coordinate runs past the grid.
fn fill(table: &mut Table, x: &[u8], y: &[u8], m: usize, n: usize) {
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            let down = table.get(i + 1, j);
            let right = table.get(i, j + 1);
            let diag = table.get(i + 1, j + 1);
            let is_match = x[i] == y[j];

            let c = if is_match { diag.c + 1 } else { down.c.max(right.c) };

            let mut g = 0u16;
            if down.c == c {
                g = g.max(down.g);
            }
            if right.c == c {
                g = g.max(right.g);
            }
            if is_match {
                g = g.max(diag.g);
                if i + 1 < m && j + 1 < n && x[i + 1] == y[j + 1] {
                    g = g.max(diag.g.saturating_add(1));
                }
            }

            table.set(i, j, Cell { c, g });
        }
    }
}

/// Walks the completed table forward from `(0, 0)`, deciding at each step
/// whether to take the match at the current position (see
/// [`take_match`]) or step toward whichever neighbour keeps the LCS
/// optimal.
fn trace_back(table: &Table, x: &[u8], y: &[u8], total: usize, out: &mut [Match]) {
    let (mut i, mut j) = (0usize, 0usize);
    loop {
        let cur = table.get(i, j);
        if cur.c == 0 {
            break;
        }

        let down = table.get(i + 1, j);
        let right = table.get(i, j + 1);

        if take_match(table, x, y, i, j) {
            let slot = total - cur.c as usize;
            out[slot] = Match { i, j, byte: x[i] };
            i += 1;
            j += 1;
        } else if down.c != right.c {
            if down.c > right.c {
                i += 1;
            } else {
                j += 1;
            }
        } else if down.g > right.g {
            i += 1;
        } else {
            j += 1;
        }
    }
}

/// Decides whether the match at `(i, j)` — if `x[i] == y[j]` — should be
/// included in the emitted LCS.
///
/// Takes the match when any of:
/// - it is required to reach the optimal LCS length;
/// - it is required to reach the best grouping score for that length;
/// - taking it costs nothing (grouping score is unchanged); or
/// - taking it extends a run already in progress (the previous position
///   also matched) rather than starting an isolated singleton.
fn take_match(table: &Table, x: &[u8], y: &[u8], i: usize, j: usize) -> bool {
    let current = table.get(i, j);
    let down = table.get(i + 1, j);
    let right = table.get(i, j + 1);

    if current.c > down.c && current.c > right.c {
        return true;
    }
    if current.g > down.g && current.g > right.g {
        return true;
    }
    if x[i] == y[j] {
        let diag = table.get(i + 1, j + 1);
        if current.g == diag.g {
            return true;
        }
        if current.g == diag.g.saturating_add(1) && i > 0 && j > 0 && x[i - 1] == y[j - 1] {
            return true;
        }
    }
    false
}
