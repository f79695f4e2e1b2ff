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

//! `return [v]`, `break`, `continue`: the three commands that escape a
//! nested evaluation via a flow code rather than a value.
//!
//! `break` and `continue` take no operand; their result is their own
//! command name (`break`/`continue`), which is what a `while` loop that
//! exits via `break` is left holding as its final result.

use crate::{Error, Flow, Interp, Value};

pub fn return_(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    let value = args.get(1).cloned().unwrap_or_else(Value::empty);
    interp.set_result(value);
    Ok(Flow::Return)
}

pub fn break_(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    interp.set_result(args[0].clone());
    Ok(Flow::Break)
}

pub fn continue_(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    interp.set_result(args[0].clone());
    Ok(Flow::Again)
}

#[cfg(test)]
mod tests {
    use crate::{Flow, Interp};

    #[test]
    fn return_sets_result_and_flow() {
        let mut interp = Interp::new();
        let flow = interp.eval(b"return 42").unwrap();
        assert_eq!(flow, Flow::Return);
        assert_eq!(interp.result().as_bytes(), b"42");
    }

    #[test]
    fn return_with_no_operand_yields_empty() {
        let mut interp = Interp::new();
        interp.eval(b"return").unwrap();
        assert_eq!(interp.result().as_bytes(), b"");
    }
}
