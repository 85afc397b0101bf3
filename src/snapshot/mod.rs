// Snapshot management for step-by-step replay

use crate::errors::DrillError;
use crate::memory::{heap::Heap, stack::Stack};

/// Mock terminal for capturing printf output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockTerminal {
    text: String,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal {
            text: String::new(),
        }
    }

    /// Print without newline
    pub fn print(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Print followed by a newline
    pub fn println(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let mut result: Vec<String> = self.text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }

    /// Raw captured text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Snapshot of drill state after one step
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub label: String,
    pub stack: Stack,
    pub heap: Heap,
    pub terminal: MockTerminal,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough estimate: cells plus a fixed overhead per frame
        let stack_size = self.stack.total_size() + self.stack.depth() * 64;
        let heap_size = self.heap.block_count() * 32;
        let terminal_size = self.terminal.as_str().len();

        self.label.len() + stack_size + heap_size + terminal_size
    }
}

/// Recorded history of snapshots with a memory budget
#[derive(Debug, Clone)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), DrillError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(DrillError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(label: &str) -> Snapshot {
        Snapshot {
            label: label.to_string(),
            stack: Stack::new(),
            heap: Heap::new(4),
            terminal: MockTerminal::new(),
        }
    }

    #[test]
    fn test_terminal_lines() {
        let mut term = MockTerminal::new();
        term.print("49 ");
        term.print("12");
        term.println("");
        term.println("Sum: 18");
        assert_eq!(term.get_output(), vec!["49 12", "Sum: 18"]);
        assert!(MockTerminal::new().get_output().is_empty());
    }

    #[test]
    fn test_partial_line_is_kept() {
        let mut term = MockTerminal::new();
        term.println("a");
        term.print("b");
        assert_eq!(term.get_output(), vec!["a", "b"]);
    }

    #[test]
    fn test_manager_enforces_budget() {
        let mut history = SnapshotManager::new(10);
        history.push(snapshot("step")).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.memory_usage(), 4);

        let err = history.push(snapshot("a longer label")).unwrap_err();
        assert!(matches!(err, DrillError::SnapshotLimitExceeded { limit: 10, .. }));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|s| s.label.as_str()), Some("step"));
    }
}
