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

//! `while cond body` built-in.
//!
//! `break` inside `body` exits the loop with `Normal`, leaving whatever
//! result `break` itself produced as the loop's result. `continue` reruns
//! the condition. `return` and any host-level error propagate past the
//! loop untouched. When the condition first evaluates to zero, the loop
//! exits `Normal` with the condition's own last result — which is where the
//! "a `while` loop's value is `0`" idiom comes from.

use crate::{Error, Flow, Interp, Value};

pub fn main(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    let cond = &args[1];
    let body = &args[2];
    loop {
        let flow = interp.eval(cond.as_bytes())?;
        if flow != Flow::Normal {
            return Ok(flow);
        }
        if interp.result().as_int() == 0 {
            return Ok(Flow::Normal);
        }
        match interp.eval(body.as_bytes())? {
            Flow::Normal | Flow::Again => continue,
            Flow::Break => return Ok(Flow::Normal),
            Flow::Return => return Ok(Flow::Return),
        }
    }
}
