//! Call stack of named cells
//!
//! This module provides the call stack the drills mirror their locals into:
//! - [`Stack`]: the call stack containing frames
//! - [`StackFrame`]: a single function's activation record
//! - [`LocalVar`]: a named cell with a virtual address
//!
//! Addresses grow upward from [`STACK_ADDRESS_START`]; popping a frame
//! releases its addresses for the next frame.

use super::value::{Address, Value};
use crate::constants::STACK_ADDRESS_START;
use crate::errors::DrillError;

/// Local variable on the stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVar {
    pub name: String,
    pub value: Value,
    pub address: Address,
}

/// Stack frame for a function call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function_name: String,
    pub locals: Vec<LocalVar>, // Declaration order
    base_address: Address,
}

impl StackFrame {
    fn new(function_name: String, base_address: Address) -> Self {
        StackFrame {
            function_name,
            locals: Vec::new(),
            base_address,
        }
    }

    /// Look up a local by name
    pub fn get(&self, name: &str) -> Option<&LocalVar> {
        self.locals.iter().find(|var| var.name == name)
    }
}

/// The call stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    frames: Vec<StackFrame>,
    next_address: Address,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            frames: Vec::new(),
            next_address: STACK_ADDRESS_START,
        }
    }

    /// Push a new frame
    pub fn push_frame(&mut self, function_name: impl Into<String>) {
        self.frames
            .push(StackFrame::new(function_name.into(), self.next_address));
    }

    /// Pop the current frame, releasing its addresses
    pub fn pop_frame(&mut self) -> Result<StackFrame, DrillError> {
        let frame = self.frames.pop().ok_or(DrillError::NoStackFrame)?;
        self.next_address = frame.base_address;
        Ok(frame)
    }

    /// Declare a local in the current frame and return its address
    pub fn declare(&mut self, name: impl Into<String>, value: Value) -> Result<Address, DrillError> {
        let address = self.next_address;
        let frame = self.frames.last_mut().ok_or(DrillError::NoStackFrame)?;
        // Zero-sized arrays still get a distinct address
        self.next_address += value.size().max(1) as u64;
        frame.locals.push(LocalVar {
            name: name.into(),
            value,
            address,
        });
        Ok(address)
    }

    /// Assign to a local of the current frame
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), DrillError> {
        let frame = self.frames.last_mut().ok_or(DrillError::NoStackFrame)?;
        let var = frame
            .locals
            .iter_mut()
            .find(|var| var.name == name)
            .ok_or_else(|| DrillError::UndefinedVariable {
                name: name.to_string(),
            })?;
        var.value = value;
        Ok(())
    }

    /// Store through a pointer: assign to whichever cell lives at `address`
    pub fn store(&mut self, address: Address, value: Value) -> Result<(), DrillError> {
        let var = self
            .frames
            .iter_mut()
            .flat_map(|frame| frame.locals.iter_mut())
            .find(|var| var.address == address)
            .ok_or(DrillError::InvalidPointer { address })?;
        var.value = value;
        Ok(())
    }

    /// Look up a local of the current frame
    pub fn get(&self, name: &str) -> Result<&LocalVar, DrillError> {
        let frame = self.frames.last().ok_or(DrillError::NoStackFrame)?;
        frame.get(name).ok_or_else(|| DrillError::UndefinedVariable {
            name: name.to_string(),
        })
    }

    /// All frames, outermost first
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Total bytes of all live cells
    pub fn total_size(&self) -> usize {
        self.frames
            .iter()
            .flat_map(|frame| frame.locals.iter())
            .map(|var| var.value.size())
            .sum()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_assigns_sequential_addresses() {
        let mut stack = Stack::new();
        stack.push_frame("main");
        let a = stack.declare("a", Value::Int(10)).unwrap();
        let b = stack.declare("b", Value::Int(-4)).unwrap();
        assert_eq!(a, STACK_ADDRESS_START);
        assert_eq!(b, a + 4);
        assert_eq!(stack.get("b").unwrap().address, b);
        assert_eq!(stack.total_size(), 8);
    }

    #[test]
    fn test_store_reaches_outer_frame() {
        let mut stack = Stack::new();
        stack.push_frame("main");
        let a = stack.declare("a", Value::Int(10)).unwrap();
        stack.push_frame("rotate3");
        stack.declare("a", Value::Pointer(a)).unwrap();

        stack.store(a, Value::Int(-4)).unwrap();
        stack.pop_frame().unwrap();
        assert_eq!(stack.get("a").unwrap().value, Value::Int(-4));
    }

    #[test]
    fn test_pop_frame_releases_addresses() {
        let mut stack = Stack::new();
        stack.push_frame("main");
        stack.declare("x", Value::Int(1)).unwrap();
        stack.push_frame("f");
        let inner = stack.declare("y", Value::Null).unwrap();
        stack.pop_frame().unwrap();
        stack.push_frame("g");
        assert_eq!(stack.declare("z", Value::Int(2)).unwrap(), inner);
    }

    #[test]
    fn test_errors() {
        let mut stack = Stack::new();
        assert_eq!(stack.declare("x", Value::Int(1)), Err(DrillError::NoStackFrame));
        assert!(stack.pop_frame().is_err());
        stack.push_frame("main");
        assert_eq!(
            stack.set("missing", Value::Null),
            Err(DrillError::UndefinedVariable {
                name: "missing".to_string()
            })
        );
        assert_eq!(
            stack.store(0x999, Value::Null),
            Err(DrillError::InvalidPointer { address: 0x999 })
        );
    }
}
