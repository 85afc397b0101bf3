//! # Introduction
//!
//! Pointer drills: three small demonstrations of pointer mechanics, each
//! run against a simulated stack and heap whose state is captured before
//! and after every step. The recorded history can be replayed forward and
//! backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## The drills
//!
//! 1. [`chain`]: a singly linked list of `int` nodes with front insertion
//!    through a mutable head link, lazy traversal and explicit teardown.
//! 2. [`view`]: a non-owning `[begin, end)` window over an `int` buffer
//!    with endpoint and full-range sums.
//! 3. [`rotate`]: in-place rotation of three cells through `&mut`.
//!
//! ## Execution pipeline
//!
//! ```text
//! Drill → Tracer (Stack + Heap + MockTerminal) → Snapshots → TUI / stdout
//! ```
//!
//! - [`memory`]: tagged [`memory::value::Value`] cells in a virtual
//!   [`memory::stack::Stack`] and a bounded [`memory::heap::Heap`].
//! - [`drills`]: the fixed scenarios and the [`drills::Tracer`] recording them.
//! - [`snapshot`]: snapshot history with a memory limit and a
//!   [`snapshot::MockTerminal`] that records `printf` output.
//! - [`driver`]: the thin per-drill command-line entry points.
//! - [`ui`]: ratatui-based walkthrough; not part of the stable library API.

pub mod chain;
pub mod constants;
pub mod drills;
pub mod driver;
pub mod errors;
pub mod logging;
pub mod memory;
pub mod rotate;
pub mod snapshot;
pub mod ui;
pub mod view;

pub use chain::{destroy, push_front, traverse, Link, Node, NodeChain};
pub use drills::{Drill, Tracer};
pub use errors::DrillError;
pub use rotate::rotate3;
pub use view::BoundedView;
