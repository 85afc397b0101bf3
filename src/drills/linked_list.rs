//! Front insertion into a node chain, then a full traversal and teardown.
//!
//! The walk reads each node's `next` link after printing that node, so the
//! whole post-insertion chain is visited: `49 12`.

use super::Tracer;
use crate::chain::{destroy, push_front, traverse, Link};
use crate::errors::DrillError;
use crate::memory::value::{Address, Value};

/// Values inserted at the front, in insertion order
pub const INSERTED: [i32; 2] = [12, 49];

pub fn run(tracer: &mut Tracer) -> Result<(), DrillError> {
    tracer.stack.push_frame("main");

    let mut head: Link = None;
    tracer.stack.declare("head", Value::Null)?;
    tracer.step("struct Node *head = NULL;")?;

    for value in INSERTED {
        push_front(&mut tracer.heap, &mut head, value)?;
        tracer.stack.set("head", Value::from_link(head))?;
        tracer.step(format!("push_front(&head, {});", value))?;
    }

    // Pair each value with the address it was read from, for the cursor cell
    let walk: Vec<(Address, i32)> = {
        let mut nodes = traverse(&tracer.heap, head);
        std::iter::from_fn(|| {
            let at = nodes.cursor();
            nodes.next().and_then(|value| at.map(|addr| (addr, value)))
        })
        .collect()
    };

    tracer.stack.declare("current", Value::from_link(head))?;
    tracer.step("struct Node *current = head;")?;

    let mut separator = "";
    for (at, value) in walk {
        tracer.terminal.print(&format!("{}{}", separator, value));
        separator = " ";
        let next = tracer.heap.get(at)?.next;
        tracer.stack.set("current", Value::from_link(next))?;
        tracer.step("printf(\"%d \", current->x); current = current->next;")?;
    }
    tracer.terminal.println("");

    let freed = destroy(&mut tracer.heap, &mut head)?;
    tracer.stack.set("head", Value::Null)?;
    tracer.step(format!("free_list(&head); /* {} nodes */", freed))?;

    tracer.stack.pop_frame()?;
    tracer.step("return 0;")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::heap::BlockState;

    #[test]
    fn test_prints_reverse_insertion_order() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();
        assert_eq!(tracer.output(), vec!["49 12"]);
    }

    #[test]
    fn test_head_tracks_newest_node() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        // Snapshot 2 is taken right after the second push_front
        let after_push = tracer.history().get(2).unwrap();
        let head = after_push.stack.get("head").unwrap().value.clone();
        let blocks = after_push.heap.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(head, Value::Pointer(blocks[1].0));
        assert_eq!(blocks[1].1.node.next, Some(blocks[0].0));
    }

    #[test]
    fn test_chain_is_released() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();
        assert_eq!(tracer.heap.live_blocks(), 0);
        assert!(tracer
            .heap
            .blocks()
            .iter()
            .all(|(_, b)| b.state == BlockState::Tombstone));
    }

    #[test]
    fn test_allocation_failure_surfaces() {
        let mut tracer = Tracer::with_limits(1, crate::constants::DEFAULT_SNAPSHOT_LIMIT);
        let err = run(&mut tracer).unwrap_err();
        assert_eq!(err, DrillError::AllocationFailure { live: 1, limit: 1 });
        assert!(tracer.output().is_empty());
    }
}
