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

//! The built-in commands every fresh [`crate::Interp`] starts out with.
//!
//! One module per command (or small command family), following the same
//! split the CLI's `set`/`if`/`while` etc. are described under in
//! SPEC_FULL.md §4.5.

mod arith;
mod flow;
mod if_cmd;
mod proc_cmd;
mod puts;
mod set;
mod subst;
mod while_cmd;

use crate::Interp;

/// Registers every built-in command on a freshly constructed interpreter.
pub(crate) fn register_all(interp: &mut Interp) {
    interp.register(b"set", 0, set::main);
    interp.register(b"subst", 2, subst::main);
    interp.register(b"puts", 2, puts::main);
    interp.register(b"proc", 4, proc_cmd::main);
    interp.register(b"if", 0, if_cmd::main);
    interp.register(b"while", 3, while_cmd::main);
    interp.register(b"return", 0, flow::return_);
    interp.register(b"break", 1, flow::break_);
    interp.register(b"continue", 1, flow::continue_);
    arith::register_all(interp);
}
