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

//! Interactive shell front end for `pebble-core`.
//!
//! Reads bytes from standard input into a growing buffer. After each byte it
//! re-tokenizes the whole buffer, tolerantly skipping `ERROR` tokens to keep
//! probing for more input, until a `CMD` token appears at a non-empty
//! position — at that point the buffer holds one complete program, which is
//! evaluated and the buffer is cleared. Reaching EOF with a non-empty buffer
//! left over means the input was incomplete.

use pebble_core::{Interp, TokenKind};
use std::io::Read;

const HELP: &str = "\
Usage: pebble [OPTIONS]

Reads commands from standard input, one at a time, and prints each
result on its own line.

Options:
  -h, --help     print this help and exit
  -V, --version  print the version and exit";

fn print_version() {
    println!("pebble {}", env!("CARGO_PKG_VERSION"));
}

/// Scans `buf` from the front, skipping past `ERROR` tokens, to see whether
/// it already contains one complete program. Returns the length of that
/// program (not including the token that ended it) once a non-empty `CMD`
/// token is found.
fn complete_program_len(buf: &[u8]) -> Option<usize> {
    let mut quoted = false;
    let mut pos = 0usize;
    while pos <= buf.len() {
        let token = pebble_core::next_token(&buf[pos..], &mut quoted);
        let abs_from = pos + token.from;
        let abs_to = pos + token.to;
        if token.kind == TokenKind::Cmd && abs_from > 0 {
            return Some(abs_from);
        }
        if abs_to <= pos {
            // No forward progress; wait for more input.
            return None;
        }
        pos = abs_to;
    }
    None
}

fn run() -> i32 {
    let mut interp = Interp::new();
    let mut stdin = std::io::stdin();
    let mut buf: Vec<u8> = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        match stdin.read(&mut byte) {
            Ok(0) => {
                return if buf.is_empty() { 0 } else { 1 };
            }
            Ok(_) => {
                buf.push(byte[0]);
                if let Some(len) = complete_program_len(&buf) {
                    let program: Vec<u8> = buf.drain(..len).collect();
                    buf.clear();
                    match interp.eval(&program) {
                        Ok(_) => println!("result> {}", interp.result().as_str_lossy()),
                        Err(_) => println!("?!"),
                    }
                }
            }
            Err(_) => return 1,
        }
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{HELP}");
                return;
            }
            "-V" | "--version" => {
                print_version();
                return;
            }
            other => {
                eprintln!("pebble: unrecognized option '{other}'");
                std::process::exit(2);
            }
        }
    }
    std::process::exit(run());
}
