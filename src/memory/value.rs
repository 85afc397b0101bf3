//! Cell value representation
//!
//! This module defines the [`Value`] enum, the tagged contents of a stack
//! cell as the drills mirror them for display.
//!
//! # Value Types
//!
//! - [`Value::Int`]: 32-bit signed integer
//! - [`Value::Pointer`]: address of a stack cell or heap block
//! - [`Value::Null`]: null pointer
//! - [`Value::Array`]: fixed-size `int` array
//! - [`Value::Struct`]: named fields, in declaration order
//! - [`Value::Uninitialized`]: declared but never written

use crate::constants::{INT_SIZE, POINTER_SIZE};

/// Memory address type (64-bit)
pub type Address = u64;

/// Runtime value of a stack cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    Int(i32),
    Pointer(Address),
    Null,
    Array(Vec<i32>),
    Struct(Vec<(String, Value)>),
    #[default]
    Uninitialized,
}

impl Value {
    /// Build a pointer value from an optional link
    pub fn from_link(link: Option<Address>) -> Self {
        match link {
            Some(addr) => Value::Pointer(addr),
            None => Value::Null,
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the pointer value, `Some(None)` for null, None if not a pointer
    pub fn as_link(&self) -> Option<Option<Address>> {
        match self {
            Value::Pointer(addr) => Some(Some(*addr)),
            Value::Null => Some(None),
            _ => None,
        }
    }

    /// Size of the value in bytes, using the fixed cell sizes
    pub fn size(&self) -> usize {
        match self {
            Value::Int(_) | Value::Uninitialized => INT_SIZE,
            Value::Pointer(_) | Value::Null => POINTER_SIZE,
            Value::Array(items) => items.len() * INT_SIZE,
            Value::Struct(fields) => fields.iter().map(|(_, v)| v.size()).sum(),
        }
    }
}
