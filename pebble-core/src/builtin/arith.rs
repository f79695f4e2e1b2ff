// This file is part of pebble, a minimalist embedded command-language interpreter.
// Copyright (C) 2026 the pebble authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The ten binary arithmetic/comparison built-ins, each arity 3: the
//! operator name and two operands, converted to `i64` (trailing garbage and
//! non-numeric text read as `0`, per [`Value::as_int`]). Comparisons return
//! `1`/`0`; overflow wraps the way machine integers do. Division by zero
//! returns `0` rather than trapping — the sentinel choice SPEC_FULL.md §4.5
//! leaves to the implementer, recorded in DESIGN.md.

use crate::{Error, Flow, Interp, Value};

fn binop(interp: &mut Interp, args: &[Value], f: impl Fn(i64, i64) -> i64) -> Result<Flow, Error> {
    let a = args[1].as_int();
    let b = args[2].as_int();
    interp.set_result(Value::from_int(f(a, b)));
    Ok(Flow::Normal)
}

fn cmp(interp: &mut Interp, args: &[Value], f: impl Fn(i64, i64) -> bool) -> Result<Flow, Error> {
    binop(interp, args, |a, b| i64::from(f(a, b)))
}

pub fn add(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    binop(i, a, |x, y| x.wrapping_add(y))
}
pub fn sub(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    binop(i, a, |x, y| x.wrapping_sub(y))
}
pub fn mul(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    binop(i, a, |x, y| x.wrapping_mul(y))
}
pub fn div(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    binop(i, a, |x, y| if y == 0 { 0 } else { x.wrapping_div(y) })
}
pub fn gt(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    cmp(i, a, |x, y| x > y)
}
pub fn ge(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    cmp(i, a, |x, y| x >= y)
}
pub fn lt(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    cmp(i, a, |x, y| x < y)
}
pub fn le(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    cmp(i, a, |x, y| x <= y)
}
pub fn eq(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    cmp(i, a, |x, y| x == y)
}
pub fn ne(i: &mut Interp, a: &[Value]) -> Result<Flow, Error> {
    cmp(i, a, |x, y| x != y)
}

pub(crate) fn register_all(interp: &mut Interp) {
    interp.register(b"+", 3, add);
    interp.register(b"-", 3, sub);
    interp.register(b"*", 3, mul);
    interp.register(b"/", 3, div);
    interp.register(b">", 3, gt);
    interp.register(b">=", 3, ge);
    interp.register(b"<", 3, lt);
    interp.register(b"<=", 3, le);
    interp.register(b"==", 3, eq);
    interp.register(b"!=", 3, ne);
}

#[cfg(test)]
mod tests {
    use crate::Interp;

    #[test]
    fn addition_and_precedence_free_nesting() {
        let mut interp = Interp::new();
        interp.eval(b"subst [+ [* 2 3] 4]").unwrap();
        assert_eq!(interp.result().as_bytes(), b"10");
    }

    #[test]
    fn comparisons_return_one_or_zero() {
        let mut interp = Interp::new();
        interp.eval(b"< 1 2").unwrap();
        assert_eq!(interp.result().as_bytes(), b"1");
        interp.eval(b"< 2 1").unwrap();
        assert_eq!(interp.result().as_bytes(), b"0");
    }

    #[test]
    fn division_by_zero_yields_zero() {
        let mut interp = Interp::new();
        interp.eval(b"/ 5 0").unwrap();
        assert_eq!(interp.result().as_bytes(), b"0");
    }
}
