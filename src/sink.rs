//! Output sink contract for the merge driver.
//!
//! The driver never builds the merged document itself; it reports runs
//! and conflicts to a caller-supplied [`MergeSink`] as it discovers them.
//! For callers who would rather get the whole result back as a value,
//! [`MergeEvent`] plus [`EventSink`] is a thin adapter over the same
//! trait.

/// Receives merged runs and conflict triples as the driver discovers
/// them, in document order.
///
/// Buffers passed to either method are only valid for the duration of
/// the call; implementations must copy anything they need to retain.
pub trait MergeSink {
    /// A contiguous run of bytes that belongs in the merged output
    /// as-is. May be called with an empty slice; callers should treat
    /// that as a no-op rather than a signal.
    fn emit_merged(&mut self, run: &[u8]);

    /// One unresolved region: the base, ours, and theirs content between
    /// the same pair of brackets, in that order.
    fn emit_conflict(&mut self, base: &[u8], ours: &[u8], theirs: &[u8]);
}

/// One event recorded by [`EventSink`] — either a merged run or a
/// conflicted region, preserving the call order the driver produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    Merged(Vec<u8>),
    Conflict { base: Vec<u8>, ours: Vec<u8>, theirs: Vec<u8> },
}

/// Adapts [`MergeSink`] into an owned `Vec<MergeEvent>`, for callers who
/// want the whole result materialized instead of streamed.
#[derive(Debug, Default)]
pub struct EventSink {
    pub events: Vec<MergeEvent>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MergeSink for EventSink {
    fn emit_merged(&mut self, run: &[u8]) {
        self.events.push(MergeEvent::Merged(run.to_vec()));
    }

    fn emit_conflict(&mut self, base: &[u8], ours: &[u8], theirs: &[u8]) {
        self.events.push(MergeEvent::Conflict {
            base: base.to_vec(),
            ours: ours.to_vec(),
            theirs: theirs.to_vec(),
        });
    }
}
