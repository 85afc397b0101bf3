//! Sums over a bounded view of `{1, 2, 3, 4, 17}`.

use super::Tracer;
use crate::errors::DrillError;
use crate::memory::{int_pointer_add, int_pointer_diff, value::Value};
use crate::view::BoundedView;

/// The buffer the view looks at
pub const BUFFER: [i32; 5] = [1, 2, 3, 4, 17];

pub fn run(tracer: &mut Tracer) -> Result<(), DrillError> {
    let arr = BUFFER;

    tracer.stack.push_frame("main");
    let arr_addr = tracer.stack.declare("arr", Value::Array(arr.to_vec()))?;
    tracer.step("int arr[] = {1, 2, 3, 4, 17};")?;

    let view = BoundedView::new(&arr, 0, arr.len())?;
    let begin = int_pointer_add(arr_addr, view.begin());
    let end = int_pointer_add(arr_addr, view.end());
    tracer.stack.declare(
        "v",
        Value::Struct(vec![
            ("begin".to_string(), Value::Pointer(begin)),
            ("end".to_string(), Value::Pointer(end)),
        ]),
    )?;
    tracer.step("struct view v = {arr + 0, arr + 5};")?;

    tracer
        .terminal
        .println(&format!("Sum: {}", view.endpoint_sum()));
    tracer.step("printf(\"Sum: %d\\n\", sum(v));")?;

    // Mirror the accumulation loop of sum_range one element at a time
    tracer.stack.push_frame("sum_range");
    tracer.stack.declare("sum", Value::Int(0))?;
    tracer.stack.declare("p", Value::Pointer(begin))?;
    let count = i32::try_from(int_pointer_diff(end, begin)).unwrap_or(i32::MAX);
    tracer.stack.declare("n", Value::Int(count))?;
    tracer.step("int sum = 0; int *p = v.begin; int n = v.end - v.begin;")?;

    let mut running: i64 = 0;
    for (offset, value) in view.as_slice().iter().enumerate() {
        running += i64::from(*value);
        tracer
            .stack
            .set("sum", Value::Int(i32::try_from(running).unwrap_or(i32::MAX)))?;
        tracer
            .stack
            .set("p", Value::Pointer(int_pointer_add(begin, offset + 1)))?;
        tracer.step("sum += *p; ++p;")?;
    }
    tracer.stack.pop_frame()?;

    tracer
        .terminal
        .println(&format!("Sum of full range: {}", view.range_sum()));
    tracer.step("printf(\"Sum of full range: %d\\n\", sum_range(v));")?;

    tracer.stack.pop_frame()?;
    tracer.step("return 0;")?;
    Ok(())
}
