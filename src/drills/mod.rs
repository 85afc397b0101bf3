//! The fixed pointer demonstrations
//!
//! Each drill runs one hard-coded scenario against a [`Tracer`]: locals are
//! mirrored into a [`Stack`] frame, chain nodes live on the [`Heap`], and
//! `printf` output goes to a [`MockTerminal`]. After every step the tracer
//! records a [`Snapshot`] so the run can be replayed in the walkthrough.
//!
//! | Drill | Demonstrates |
//! |-------|--------------|
//! | [`Drill::LinkedList`] | front insertion through `&mut Link`, traversal, teardown |
//! | [`Drill::Rotation`] | `rotate3` writing through three pointers |
//! | [`Drill::SliceView`] | endpoint and full-range sums over a bounded view |

pub mod linked_list;
pub mod rotation;
pub mod slice_view;

use crate::constants::{DEFAULT_MAX_NODES, DEFAULT_SNAPSHOT_LIMIT};
use crate::errors::DrillError;
use crate::memory::{heap::Heap, stack::Stack};
use crate::snapshot::{MockTerminal, Snapshot, SnapshotManager};

/// Live drill state plus the snapshots recorded so far
#[derive(Debug, Clone)]
pub struct Tracer {
    pub stack: Stack,
    pub heap: Heap,
    pub terminal: MockTerminal,
    history: SnapshotManager,
}

impl Tracer {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_NODES, DEFAULT_SNAPSHOT_LIMIT)
    }

    /// Create a tracer with explicit heap and history limits
    pub fn with_limits(max_nodes: usize, snapshot_limit: usize) -> Self {
        Tracer {
            stack: Stack::new(),
            heap: Heap::new(max_nodes),
            terminal: MockTerminal::new(),
            history: SnapshotManager::new(snapshot_limit),
        }
    }

    /// Record the current state under `label`
    pub fn step(&mut self, label: impl Into<String>) -> Result<(), DrillError> {
        let label = label.into();
        tracing::debug!(step = self.history.len(), label = %label, "drill step");
        self.history.push(Snapshot {
            label,
            stack: self.stack.clone(),
            heap: self.heap.clone(),
            terminal: self.terminal.clone(),
        })
    }

    pub fn history(&self) -> &SnapshotManager {
        &self.history
    }

    pub fn into_history(self) -> SnapshotManager {
        self.history
    }

    /// Lines printed so far
    pub fn output(&self) -> Vec<String> {
        self.terminal.get_output()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the three demonstrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drill {
    LinkedList,
    Rotation,
    SliceView,
}

impl Drill {
    pub const ALL: [Drill; 3] = [Drill::LinkedList, Drill::Rotation, Drill::SliceView];

    /// Name of the driver binary that runs this drill
    pub fn name(self) -> &'static str {
        match self {
            Drill::LinkedList => "singly_linked_list",
            Drill::Rotation => "integer_rotation",
            Drill::SliceView => "slice_view",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Drill::LinkedList => "Singly linked list",
            Drill::Rotation => "Integer rotation",
            Drill::SliceView => "Slice view",
        }
    }

    /// Run the drill, recording its steps into `tracer`
    pub fn run(self, tracer: &mut Tracer) -> Result<(), DrillError> {
        let span = tracing::debug_span!("drill", name = self.name());
        let _guard = span.enter();
        match self {
            Drill::LinkedList => linked_list::run(tracer),
            Drill::Rotation => rotation::run(tracer),
            Drill::SliceView => slice_view::run(tracer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_drill_records_steps() {
        for drill in Drill::ALL {
            let mut tracer = Tracer::new();
            drill.run(&mut tracer).unwrap();
            assert!(tracer.history().len() > 2, "{} recorded too few steps", drill.name());
            assert_eq!(tracer.stack.depth(), 0, "{} left a frame behind", drill.name());
            assert_eq!(tracer.heap.live_blocks(), 0, "{} leaked nodes", drill.name());
        }
    }

    #[test]
    fn test_final_snapshot_matches_output() {
        let mut tracer = Tracer::new();
        Drill::SliceView.run(&mut tracer).unwrap();
        let last = tracer.history().last().unwrap();
        assert_eq!(last.terminal.get_output(), tracer.output());
    }

    #[test]
    fn test_snapshot_budget_stops_drill() {
        let mut tracer = Tracer::with_limits(DEFAULT_MAX_NODES, 16);
        let err = Drill::Rotation.run(&mut tracer).unwrap_err();
        assert!(matches!(err, DrillError::SnapshotLimitExceeded { .. }));
    }
}
