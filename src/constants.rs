// Constants for the pointer drills

/// Starting address for heap allocations
/// Heap addresses start at 0x10000000 to clearly distinguish them from stack addresses
pub const HEAP_ADDRESS_START: u64 = 0x1000_0000;

/// Starting address for stack variable addresses
/// Stack addresses start at 0x00000004
pub const STACK_ADDRESS_START: u64 = 0x0000_0004;

/// Size of an `int` cell in bytes
pub const INT_SIZE: usize = 4;

/// Size of a pointer cell in bytes
pub const POINTER_SIZE: usize = 8;

/// Size of one node block: `int` value followed by the `next` link, no padding
pub const NODE_SIZE: usize = INT_SIZE + POINTER_SIZE;

/// Default limit on simultaneously live nodes
pub const DEFAULT_MAX_NODES: usize = 1 << 20;

/// Default snapshot history budget (64 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// Delay between steps while the walkthrough is auto-playing
pub const PLAY_INTERVAL_MS: u64 = 800;
