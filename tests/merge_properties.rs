// Property-based tests for merge() over arbitrary byte strings.

use mergetext::merge_to_events;
use quickcheck_macros::quickcheck;

fn merged_bytes(events: &[mergetext::MergeEvent]) -> Vec<u8> {
    events
        .iter()
        .flat_map(|e| match e {
            mergetext::MergeEvent::Merged(b) => b.clone(),
            _ => Vec::new(),
        })
        .collect()
}

#[quickcheck]
fn prop_identical_sides_return_that_side_unchanged(base: Vec<u8>, side: Vec<u8>) -> bool {
    let (events, conflicts) = merge_to_events(&base, &side, &side);
    !conflicts && merged_bytes(&events) == side
}

#[quickcheck]
fn prop_no_edits_returns_base_unchanged(base: Vec<u8>) -> bool {
    let (events, conflicts) = merge_to_events(&base, &base, &base);
    !conflicts && merged_bytes(&events) == base
}

#[quickcheck]
fn prop_one_sided_change_always_wins(base: Vec<u8>, edited: Vec<u8>) -> bool {
    let (events_ours, c1) = merge_to_events(&base, &edited, &base);
    let (events_theirs, c2) = merge_to_events(&base, &base, &edited);
    !c1 && !c2 && merged_bytes(&events_ours) == edited && merged_bytes(&events_theirs) == edited
}

#[quickcheck]
fn prop_conflict_flag_matches_presence_of_conflict_events(
    base: Vec<u8>,
    ours: Vec<u8>,
    theirs: Vec<u8>,
) -> bool {
    let (events, conflicts) = merge_to_events(&base, &ours, &theirs);
    let has_conflict_event =
        events.iter().any(|e| matches!(e, mergetext::MergeEvent::Conflict { .. }));
    conflicts == has_conflict_event
}

#[quickcheck]
fn prop_never_panics_on_arbitrary_inputs(base: Vec<u8>, ours: Vec<u8>, theirs: Vec<u8>) -> bool {
    // Any return, conflicted or not, is acceptable here; the only
    // requirement is that merging arbitrary byte strings never panics.
    let _ = merge_to_events(&base, &ours, &theirs);
    true
}
