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

//! `puts` built-in: the language's only I/O. Writes its argument followed
//! by a newline to the interpreter's [`crate::Sink`] and returns the
//! argument unchanged.

use crate::{Error, Flow, Interp, Value};

pub fn main(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    let text = args[1].clone();
    interp.write_line(text.as_bytes());
    interp.set_result(text);
    Ok(Flow::Normal)
}
