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

//! Host-level error conditions.
//!
//! The language itself has no error objects or `catch`; every failure inside
//! a program surfaces uniformly as the [`Error`](crate::Flow) flow code. This
//! type is the payload carried alongside that flow when an embedder wants to
//! know *why* evaluation failed.

use std::fmt;

/// Why an evaluation call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tokenizer ran off the end of the input without closing a brace,
    /// bracket, or quote, or rejected a malformed `$`/`"` sequence.
    #[error("incomplete or malformed input")]
    Lex,

    /// No registered command matches both the name and the argument count.
    #[error("no command named {0} matches arity {1}")]
    Dispatch(Name, usize),

    /// A `$name` substitution's synthesized `set` program would not fit the
    /// fixed-size substitution buffer.
    #[error("variable name too long for substitution")]
    NameTooLong,
}

/// A command name, kept as raw bytes but rendered lossily for diagnostics.
///
/// Command names are not required to be valid UTF-8 (the language treats all
/// input as bytes), so [`Error::Dispatch`] cannot simply carry a `String`
/// without either losing information or assuming an encoding. This wrapper
/// keeps the bytes and only lossily converts when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<u8>);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
