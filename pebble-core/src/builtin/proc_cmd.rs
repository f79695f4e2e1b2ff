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

//! `proc name params body` built-in: defines a user procedure.
//!
//! The whole invocation (`proc`, name, params, body) is kept as the
//! registered command's payload — see [`Interp::define_proc`] and
//! SPEC_FULL.md §4.6 for why the name is deliberately duplicated there
//! rather than stored separately.

use crate::{Error, Flow, Interp, Value};

pub fn main(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    interp.define_proc(args);
    interp.set_result(Value::empty());
    Ok(Flow::Normal)
}

#[cfg(test)]
mod tests {
    use crate::Interp;

    #[test]
    fn defines_a_callable_command() {
        let mut interp = Interp::new();
        interp.eval(b"proc square {x} { * $x $x }").unwrap();
        interp.eval(b"square 7").unwrap();
        assert_eq!(interp.result().as_bytes(), b"49");
    }

    #[test]
    fn missing_actuals_bind_to_empty() {
        let mut interp = Interp::new();
        interp.eval(b"proc greet {who} { subst $who }").unwrap();
        interp.eval(b"greet").unwrap();
        assert_eq!(interp.result().as_bytes(), b"");
    }

    #[test]
    fn extra_actuals_are_ignored() {
        let mut interp = Interp::new();
        interp.eval(b"proc first {a} { subst $a }").unwrap();
        interp.eval(b"first one two three").unwrap();
        assert_eq!(interp.result().as_bytes(), b"one");
    }
}
