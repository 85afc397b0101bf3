//! Simulated memory the drills run against
//!
//! This module provides the core memory abstractions:
//! - [`value`]: tagged cell values (Int, Pointer, Array, Struct) and [`value::Address`]
//! - [`stack`]: call stack with frames of named cells
//! - [`heap`]: bounded node heap with malloc/free and tombstone tracking
//!
//! # Type Sizes
//!
//! Sizes are fixed and platform-independent:
//! - `int`: 4 bytes
//! - `pointer`: 8 bytes (regardless of pointee type)
//! - node: 12 bytes (`int` value then `next` pointer, no padding)
//!
//! # Pointer Arithmetic
//!
//! Only `int` pointers are stepped, so arithmetic is scaled by 4:
//! ```text
//! ptr + n  →  ptr + (n * 4)
//! ```

pub mod heap;
pub mod stack;
pub mod value;

use crate::constants::INT_SIZE;
use value::Address;

/// Address of element `index` of an `int` array starting at `base`
pub fn int_pointer_add(base: Address, index: usize) -> Address {
    base + (index * INT_SIZE) as u64
}

/// Number of `int` elements between two addresses (`end - begin`)
pub fn int_pointer_diff(end: Address, begin: Address) -> i64 {
    (end as i64 - begin as i64) / INT_SIZE as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_pointer_arithmetic() {
        let base = 0x10;
        let end = int_pointer_add(base, 5);
        assert_eq!(end, 0x24);
        assert_eq!(int_pointer_diff(end, base), 5);
        assert_eq!(int_pointer_diff(base, end), -5);
    }
}
