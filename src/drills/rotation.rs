//! Three-way rotation through pointer parameters: `(10, -4, 30)` becomes `(-4, 30, 10)`.

use super::Tracer;
use crate::errors::DrillError;
use crate::memory::value::Value;
use crate::rotate::rotate3;

/// Initial contents of `a`, `b` and `c`
pub const INITIAL: (i32, i32, i32) = (10, -4, 30);

fn report(prefix: &str, a: i32, b: i32, c: i32) -> String {
    format!("{}{:3} {:3} {:3}", prefix, a, b, c)
}

pub fn run(tracer: &mut Tracer) -> Result<(), DrillError> {
    let (mut a, mut b, mut c) = INITIAL;

    tracer.stack.push_frame("main");
    let a_addr = tracer.stack.declare("a", Value::Int(a))?;
    let b_addr = tracer.stack.declare("b", Value::Int(b))?;
    let c_addr = tracer.stack.declare("c", Value::Int(c))?;
    tracer.step(format!("int a = {}; int b = {}; int c = {};", a, b, c))?;

    tracer.terminal.println(&report("Before rotation: ", a, b, c));
    tracer.step("printf(\"Before rotation: %3d %3d %3d\\n\", a, b, c);")?;

    tracer.stack.push_frame("rotate3");
    tracer.stack.declare("a", Value::Pointer(a_addr))?;
    tracer.stack.declare("b", Value::Pointer(b_addr))?;
    tracer.stack.declare("c", Value::Pointer(c_addr))?;
    tracer.step("rotate3(&a, &b, &c);")?;

    tracer.stack.declare("a_value", Value::Int(a))?;
    tracer.stack.declare("b_value", Value::Int(b))?;
    tracer.stack.declare("c_value", Value::Int(c))?;
    tracer.step("int a_value = *a; int b_value = *b; int c_value = *c;")?;

    rotate3(&mut a, &mut b, &mut c);

    tracer.stack.store(c_addr, Value::Int(c))?;
    tracer.step("*c = a_value;")?;
    tracer.stack.store(b_addr, Value::Int(b))?;
    tracer.step("*b = c_value;")?;
    tracer.stack.store(a_addr, Value::Int(a))?;
    tracer.step("*a = b_value;")?;

    tracer.stack.pop_frame()?;
    tracer.terminal.println(&report("After rotation:  ", a, b, c));
    tracer.step("printf(\"After rotation:  %3d %3d %3d\\n\", a, b, c);")?;

    tracer.stack.pop_frame()?;
    tracer.step("return 0;")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();
        assert_eq!(
            tracer.output(),
            vec!["Before rotation:  10  -4  30", "After rotation:   -4  30  10"]
        );
    }

    #[test]
    fn test_writes_land_in_callers_cells() {
        let mut tracer = Tracer::new();
        run(&mut tracer).unwrap();

        // Last snapshot inside rotate3, after all three stores
        let inside = tracer
            .history()
            .iter()
            .find(|s| s.label == "*a = b_value;")
            .unwrap();
        let main = &inside.stack.frames()[0];
        let cells: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|name| main.get(name).unwrap().value.as_int())
            .collect();
        assert_eq!(cells, vec![Some(-4), Some(30), Some(10)]);
    }
}
