//! The three-way reconciliation driver.
//!
//! Walks two LCS alignments — base↔ours and base↔theirs — in lockstep via
//! a pair of [`Cursor`]s, isolating one minimal change region at a time.
//! A region is bracketed by a position common to all three inputs (or,
//! for the very first region, the synthetic start of the sequence). Each
//! region is classified and reported through exactly one [`MergeSink`]
//! call per region (plus, for conflicts with a real bracket, one extra
//! call to emit the bracket byte itself).

use crate::cursor::Cursor;
use crate::lcs::lcs;
use crate::sink::{EventSink, MergeEvent, MergeSink};

/// Merges `ours` and `theirs`, both derived from `base`, reporting the
/// result through `sink`.
///
/// Returns `true` if at least one region could not be reconciled and was
/// reported via [`MergeSink::emit_conflict`].
pub fn merge(base: &[u8], ours: &[u8], theirs: &[u8], sink: &mut dyn MergeSink) -> bool {
    let _span = tracing::trace_span!(
        "merge",
        base_len = base.len(),
        ours_len = ours.len(),
        theirs_len = theirs.len()
    )
    .entered();

    // base<->theirs and base<->ours, aligned independently.
    let src_lcs = lcs(base, theirs);
    let dest_lcs = lcs(base, ours);

    let mut src = Cursor::new(&src_lcs, base.len(), theirs.len());
    let mut dest = Cursor::new(&dest_lcs, base.len(), ours.len());

    let mut conflicts_found = false;

    while src.index <= src_lcs.len() && dest.index <= dest_lcs.len() {
        // Zero on the very first region (the bracket is the synthetic
        // start of the sequence); one for every real single-byte anchor
        // thereafter.
        let match_length = usize::from(src.index != 0);

        let mut only_deletes =
            match_length == src.j_end - src.j_begin && match_length == dest.j_end - dest.j_begin;

        // Advance whichever cursor trails in base-index terms until both
        // land on the same position — the next bracket common to all
        // three inputs. End-of-input always eventually matches.
        while src.i_end != dest.i_end {
            if src.i_end < dest.i_end {
                let old_end = src.j_end;
                src.advance(false);
                only_deletes &= src.j_end - old_end == 1;
            } else {
                let old_end = dest.j_end;
                dest.advance(false);
                only_deletes &= dest.j_end - old_end == 1;
            }
        }
        debug_assert_eq!(src.i_begin, dest.i_begin);
        debug_assert_eq!(src.i_end, dest.i_end);

        // Fast path: the whole region is pure deletion on both sides, so
        // ours and theirs content here are both empty. Equivalent to
        // running the three rules below (ours == theirs == "" always
        // satisfies rule c) but skips the redundant comparisons.
        if only_deletes {
            if match_length != 0 {
                sink.emit_merged(&ours[dest.j_begin..dest.j_begin + 1]);
            }
            src.advance(true);
            dest.advance(true);
            continue;
        }

        let base_region = &base[dest.i_begin..dest.i_end];
        let ours_region = &ours[dest.j_begin..dest.j_end];
        let theirs_region = &theirs[src.j_begin..src.j_end];

        let mut conflict = true;
        let mut take_theirs = false;

        if base_region == theirs_region {
            // Theirs made no change relative to base: take ours.
            conflict = false;
        } else if base_region == ours_region {
            // Ours made no change relative to base: take theirs.
            take_theirs = true;
            conflict = false;
        } else if ours_region == theirs_region {
            // Both sides made the identical change: take either.
            conflict = false;
        }

        if !conflict {
            if take_theirs {
                sink.emit_merged(theirs_region);
            } else {
                sink.emit_merged(ours_region);
            }
        } else {
            conflicts_found = true;

            if match_length != 0 {
                // The bracket itself is uncontested; emit it once, then
                // shift all three begins past it before reporting the
                // conflict on the remainder.
                sink.emit_merged(&ours[dest.j_begin..dest.j_begin + 1]);
                dest.j_begin += 1;
                dest.i_begin += 1;
                src.j_begin += 1;
            }

            sink.emit_conflict(
                &base[dest.i_begin..dest.i_end],
                &ours[dest.j_begin..dest.j_end],
                &theirs[src.j_begin..src.j_end],
            );
        }

        src.advance(true);
        dest.advance(true);
    }

    conflicts_found
}

/// Convenience wrapper over [`merge`] that materializes the whole result
/// as a `Vec<MergeEvent>` instead of streaming through a caller-supplied
/// sink.
pub fn merge_to_events(base: &[u8], ours: &[u8], theirs: &[u8]) -> (Vec<MergeEvent>, bool) {
    let mut sink = EventSink::new();
    let conflicts_found = merge(base, ours, theirs, &mut sink);
    (sink.events, conflicts_found)
}
