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

//! `set` built-in
//!
//! `set name [value]` reads or writes a variable in the current scope.
//! With no value, the variable is created with an empty value on first
//! reference (there is no error for reading an undefined name). With a
//! value, the variable is assigned and the stored copy is returned.
//! Variadic (arity 0): both the one- and two-argument forms are accepted.

use crate::{Error, Flow, Interp, Value};

pub fn main(interp: &mut Interp, args: &[Value]) -> Result<Flow, Error> {
    let name = args[1].as_bytes();
    let result = match args.get(2) {
        Some(value) => interp.set_var(name, value.clone()),
        None => interp.get_var(name),
    };
    interp.set_result(result);
    Ok(Flow::Normal)
}
