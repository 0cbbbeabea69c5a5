//! A three-way, byte-level merge engine.
//!
//! Given a common ancestor (`base`) and two independently edited copies
//! (`ours` and `theirs`), [`merge`] reconciles them the way `diff3` does:
//! runs changed identically on both sides, or on only one side, are taken
//! automatically; runs changed differently on each side are reported as
//! conflicts instead of guessed at.
//!
//! The engine treats all three inputs as opaque byte slices — it has no
//! notion of lines, words, or encoding. Callers who want line-oriented
//! merges should split on their own delimiter first and stitch the
//! results back together.
//!
//! ```
//! use mergetext::{merge, EventSink, MergeEvent};
//!
//! let mut sink = EventSink::new();
//! let had_conflicts = merge(b"hello world", b"hello there", b"hello world", &mut sink);
//! assert!(!had_conflicts);
//!
//! let merged: Vec<u8> = sink.events.iter().flat_map(|e| match e {
//!     MergeEvent::Merged(bytes) => bytes.clone(),
//!     MergeEvent::Conflict { .. } => Vec::new(),
//! }).collect();
//! assert_eq!(merged, b"hello there");
//! ```

mod cursor;
mod lcs;
mod merge;
mod table;

pub mod sink;

pub use lcs::MAX_INPUT_LEN;
pub use merge::{merge, merge_to_events};
pub use sink::{EventSink, MergeEvent, MergeSink};
