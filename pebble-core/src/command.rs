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

//! The command table: name → (arity, handler, payload).

use crate::interp::{Flow, Interp};
use crate::value::Value;
use crate::Error;
use std::rc::Rc;

/// A native command's entry point. Receives the full invocation (the
/// command name is `args[0]`) and drives `interp` the same way a built-in
/// would.
pub type NativeFn = fn(&mut Interp, &[Value]) -> Result<Flow, Error>;

/// What a [`Command`] does when dispatched.
#[derive(Clone)]
pub enum Handler {
    /// A command implemented in Rust.
    Native(NativeFn),
    /// A user procedure: the entire argument list of the defining `proc`
    /// call (`proc`, name, params, body), shared by reference since a
    /// procedure command's payload never changes after registration.
    Proc(Rc<Vec<Value>>),
}

/// One entry in the command table.
#[derive(Clone)]
pub struct Command {
    pub name: Vec<u8>,
    /// `0` means variadic; otherwise the invocation's word count (including
    /// the command name) must equal this exactly to match.
    pub arity: usize,
    pub handler: Handler,
}

impl Command {
    #[must_use]
    pub fn matches(&self, name: &[u8], arity: usize) -> bool {
        self.name == name && (self.arity == 0 || self.arity == arity)
    }
}
