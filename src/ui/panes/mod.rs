//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`steps`]: recorded statements with the current step highlighted
//! - [`stack`]: call frames and their locals
//! - [`heap`]: node blocks, live and freed
//! - [`terminal`]: captured `printf` output
//! - [`status`]: status bar with keybindings and playback state
//! - `utils`: shared block, scroll and value formatting helpers
//!
//! Each pane module exports a stateless `render_*` function; scroll offsets
//! live in the [`App`](crate::ui::App).

mod utils;

pub mod heap;
pub mod stack;
pub mod status;
pub mod steps;
pub mod terminal;

// Re-export render functions for convenience
pub use heap::render_heap_pane;
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use steps::render_steps_pane;
pub use terminal::render_terminal_pane;
