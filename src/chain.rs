//! Node chain: a singly linked list of `int` nodes on the simulated heap
//!
//! The chain is a sequence of [`Node`]s joined by forward [`Link`]s. Its
//! first node is denoted by a head link owned by the caller. Because
//! inserting at the front must change which node is first, [`push_front`]
//! takes `&mut Link`, the Rust counterpart of passing `struct Node **`.
//!
//! ```
//! use ptrdrills::chain::{push_front, traverse, Link};
//! use ptrdrills::memory::heap::Heap;
//!
//! let mut heap = Heap::default();
//! let mut head: Link = None;
//! push_front(&mut heap, &mut head, 12).unwrap();
//! push_front(&mut heap, &mut head, 49).unwrap();
//! assert_eq!(traverse(&heap, head).collect::<Vec<_>>(), vec![49, 12]);
//! ```
//!
//! [`NodeChain`] bundles a heap and a head link into a single owning handle
//! for callers that do not need to see the memory layout.

use crate::errors::DrillError;
use crate::memory::heap::Heap;
use crate::memory::value::Address;

/// Forward link: the address of the next node, or `None` at the end
pub type Link = Option<Address>;

/// A single chain node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub value: i32,
    pub next: Link,
}

/// Insert `value` as the new first node of the chain denoted by `head`.
///
/// The node is fully built before it is linked in, so an allocation failure
/// leaves both `head` and the heap exactly as they were.
pub fn push_front(heap: &mut Heap, head: &mut Link, value: i32) -> Result<(), DrillError> {
    let addr = heap.allocate(Node { value, next: *head })?;
    *head = Some(addr);
    tracing::debug!(value, address = addr, "pushed node to front");
    Ok(())
}

/// Walk the chain starting at `start`, yielding each node's value in order
pub fn traverse(heap: &Heap, start: Link) -> Traverse<'_> {
    Traverse {
        heap,
        cursor: start,
    }
}

/// Free every node reachable from `head` and reset `head` to `None`.
///
/// Returns the number of nodes released. Each `next` link is read before
/// its node is freed. On error `head` is left at the first node that was
/// not released, so the remainder is still reachable.
pub fn destroy(heap: &mut Heap, head: &mut Link) -> Result<usize, DrillError> {
    let mut freed = 0;
    while let Some(addr) = *head {
        let next = heap.get(addr)?.next;
        heap.free(addr)?;
        *head = next;
        freed += 1;
    }
    tracing::debug!(freed, "chain destroyed");
    Ok(freed)
}

/// Lazy iterator over chain values, see [`traverse`]
#[derive(Debug, Clone)]
pub struct Traverse<'h> {
    heap: &'h Heap,
    cursor: Link,
}

impl Traverse<'_> {
    /// Address of the node the next call to `next` will read
    pub fn cursor(&self) -> Link {
        self.cursor
    }
}

impl Iterator for Traverse<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let addr = self.cursor?;
        match self.heap.get(addr) {
            Ok(node) => {
                self.cursor = node.next;
                Some(node.value)
            }
            Err(e) => {
                // A dangling link ends the walk; chains built by push_front never have one
                tracing::warn!(error = %e, "traversal stopped at dangling link");
                self.cursor = None;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Traverse<'_> {}

/// Owning handle for a chain and the heap its nodes live on
#[derive(Debug, Clone, Default)]
pub struct NodeChain {
    heap: Heap,
    head: Link,
    len: usize,
}

impl NodeChain {
    /// Create an empty chain whose heap holds at most `max_nodes` nodes
    pub fn with_capacity(max_nodes: usize) -> Self {
        NodeChain {
            heap: Heap::new(max_nodes),
            head: None,
            len: 0,
        }
    }

    /// Prepend `value`; see [`push_front`]
    pub fn push_front(&mut self, value: i32) -> Result<(), DrillError> {
        push_front(&mut self.heap, &mut self.head, value)?;
        self.len += 1;
        Ok(())
    }

    /// Iterate over the values front to back
    pub fn iter(&self) -> Traverse<'_> {
        traverse(&self.heap, self.head)
    }

    /// Release every node, leaving an empty chain.
    ///
    /// No address into this heap outlives the chain, so the tombstones are
    /// reclaimed too.
    pub fn clear(&mut self) -> Result<usize, DrillError> {
        let freed = destroy(&mut self.heap, &mut self.head)?;
        self.len = 0;
        self.heap.reclaim();
        Ok(freed)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Address of the first node
    pub fn head(&self) -> Link {
        self.head
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }
}

impl<'a> IntoIterator for &'a NodeChain {
    type Item = i32;
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
