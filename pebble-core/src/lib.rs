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

//! A minimalist embedded command-language interpreter in the Tcl tradition.
//!
//! The language is a sequence of commands over whitespace-separated words,
//! with variable substitution (`$name`), command substitution (`[...]`), and
//! brace grouping (`{...}`). Every value is a byte string; there are no
//! separate integer, boolean, or list types.
//!
//! ```
//! use pebble_core::{Flow, Interp};
//!
//! let mut interp = Interp::new();
//! let flow = interp.eval(b"set a 5; set b 7; subst [- [* 4 [+ $a $b]] 6]").unwrap();
//! assert_eq!(flow, Flow::Normal);
//! assert_eq!(interp.result().as_bytes(), b"42");
//! ```

mod builtin;
mod command;
mod env;
mod error;
mod interp;
mod lexer;
mod value;

pub use command::{Command, Handler, NativeFn};
pub use error::Error;
pub use interp::{Flow, Interp, Sink};
pub use lexer::{next_token, Token, TokenKind};
pub use value::Value;
