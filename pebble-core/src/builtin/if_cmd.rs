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

//! `if cond then [cond2 then2 ...] [else]` built-in (variadic).
//!
//! Conditions are evaluated in order, each as its own program; the first
//! whose integer result is nonzero runs its branch and its flow/result
//! become `if`'s own. A condition's own non-`Normal` flow (an embedded
//! `return`, say) short-circuits immediately, propagated rather than
//! swallowed. With no match and a trailing odd argument, that else branch
//! runs; with no match and no else, the result is `0`.

use crate::{Error, Flow, Interp, Value};

pub fn main(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    let rest = &args[1..];
    let mut i = 0;
    while i + 1 < rest.len() {
        let flow = interp.eval(rest[i].as_bytes())?;
        if flow != Flow::Normal {
            return Ok(flow);
        }
        if interp.result().as_int() != 0 {
            return interp.eval(rest[i + 1].as_bytes());
        }
        i += 2;
    }
    if i < rest.len() {
        return interp.eval(rest[i].as_bytes());
    }
    interp.set_result(Value::from_int(0));
    Ok(Flow::Normal)
}
