// Integration tests for the drill drivers

use ptrdrills::driver::report;
use ptrdrills::{Drill, DrillError, Tracer};

#[test]
fn test_singly_linked_list_report() {
    let lines = report(Drill::LinkedList).expect("drill failed");
    assert_eq!(lines, vec!["49 12"]);
}

#[test]
fn test_integer_rotation_report() {
    let lines = report(Drill::Rotation).expect("drill failed");
    assert_eq!(
        lines,
        vec!["Before rotation:  10  -4  30", "After rotation:   -4  30  10"]
    );
}

#[test]
fn test_slice_view_report() {
    let lines = report(Drill::SliceView).expect("drill failed");
    assert_eq!(lines, vec!["Sum: 18", "Sum of full range: 27"]);
}

#[test]
fn test_drill_names_match_binaries() {
    let names: Vec<_> = Drill::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        vec!["singly_linked_list", "integer_rotation", "slice_view"]
    );
}

#[test]
fn test_out_of_memory_is_reported_not_corrupted() {
    let mut tracer = Tracer::with_limits(1, 1024 * 1024);
    let err = Drill::LinkedList.run(&mut tracer).unwrap_err();

    assert!(err.is_allocation_failure());
    assert_eq!(err.to_string(), "out of memory: 1 nodes live, limit is 1");
    // The one node that did get allocated is still the whole chain
    assert_eq!(tracer.heap.live_blocks(), 1);
    let head = tracer.stack.get("head").unwrap().value.as_link().unwrap();
    assert_eq!(ptrdrills::traverse(&tracer.heap, head).collect::<Vec<_>>(), vec![12]);
}

#[test]
fn test_history_replays_output_growth() {
    let mut tracer = Tracer::new();
    Drill::Rotation.run(&mut tracer).unwrap();

    let line_counts: Vec<usize> = tracer
        .history()
        .iter()
        .map(|s| s.terminal.get_output().len())
        .collect();
    assert_eq!(line_counts.first(), Some(&0));
    assert_eq!(line_counts.last(), Some(&2));
    assert!(line_counts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_invalid_view_error_message() {
    let buffer = [1, 2, 3];
    let err = ptrdrills::BoundedView::new(&buffer, 2, 4).unwrap_err();
    assert_eq!(
        err,
        DrillError::InvalidView {
            begin: 2,
            end: 4,
            len: 3
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid view: [2, 4) over a buffer of length 3"
    );
}
