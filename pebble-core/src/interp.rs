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

//! The evaluator: drives the tokenizer over a source buffer, assembles
//! words from parts via substitution, accumulates a command's argument
//! list, and dispatches on each command terminator.

use crate::builtin;
use crate::command::{Command, Handler, NativeFn};
use crate::env::EnvStack;
use crate::error::{Error, Name};
use crate::lexer::{self, TokenKind};
use crate::value::Value;
use std::rc::Rc;

/// The out-of-band control-flow channel threaded through nested evaluations.
///
/// `Error` is deliberately not a `Flow` variant: the language's single error
/// condition is reported as `Result::Err(Error)` rather than as a flow,
/// since (unlike `Return`/`Break`/`Again`) it carries no result to continue
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Normal,
    Return,
    Break,
    Again,
}

/// Where `puts` sends its output.
pub trait Sink {
    fn write_line(&mut self, bytes: &[u8]);
}

/// Writes to the process's standard output, the default sink used by
/// [`Interp::new`].
struct Stdout;

impl Sink for Stdout {
    fn write_line(&mut self, bytes: &[u8]) {
        use std::io::Write;
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(bytes);
        let _ = out.write_all(b"\n");
    }
}

/// The variable-name length a `$`-substitution's synthesized `set` program
/// must fit within (the fixed small buffer SPEC_FULL.md §4.3 allows the
/// implementer to choose).
const MAX_SUBST_LEN: usize = 256;

/// A single interpreter: its scope stack, its command table, and its last
/// result. Construct with [`Interp::new`]; there is no separate `destroy` —
/// dropping the value releases every scope and command payload.
pub struct Interp {
    env: EnvStack,
    commands: Vec<Command>,
    result: Value,
    sink: Box<dyn Sink>,
}

impl Interp {
    /// A new interpreter with the global scope and all built-ins registered.
    #[must_use]
    pub fn new() -> Self {
        let mut interp = Interp {
            env: EnvStack::new(),
            commands: Vec::new(),
            result: Value::empty(),
            sink: Box::new(Stdout),
        };
        builtin::register_all(&mut interp);
        interp
    }

    /// Like [`Interp::new`], but `puts` output goes to `sink` instead of the
    /// process's standard output — useful for embedding and for tests that
    /// want to observe `puts` side effects.
    #[must_use]
    pub fn with_sink(sink: Box<dyn Sink>) -> Self {
        let mut interp = Interp {
            env: EnvStack::new(),
            commands: Vec::new(),
            result: Value::empty(),
            sink,
        };
        builtin::register_all(&mut interp);
        interp
    }

    /// The last result value, i.e. what `result(i)` reads in SPEC_FULL.md §6.
    #[must_use]
    pub fn result(&self) -> &Value {
        &self.result
    }

    pub(crate) fn set_result(&mut self, value: Value) {
        self.result = value;
    }

    pub(crate) fn write_line(&mut self, bytes: &[u8]) {
        self.sink.write_line(bytes);
    }

    /// Binds `name` to `value` in the current scope and returns the stored
    /// copy — the mechanics behind the `set` built-in, also usable directly
    /// by an embedder.
    pub fn set_var(&mut self, name: &[u8], value: Value) -> Value {
        self.env.set(name, value)
    }

    /// Reads `name` in the current scope, creating it with an empty value on
    /// first reference.
    pub fn get_var(&mut self, name: &[u8]) -> Value {
        self.env.get_or_create(name)
    }

    /// Registers a native command, shadowing any earlier command of the
    /// same name rather than replacing it (see SPEC_FULL.md §3).
    pub fn register(&mut self, name: &[u8], arity: usize, handler: NativeFn) {
        self.register_command(Command { name: name.to_vec(), arity, handler: Handler::Native(handler) });
    }

    pub(crate) fn register_command(&mut self, command: Command) {
        self.commands.insert(0, command);
    }

    /// Runs `src` as a program and returns the resulting flow, or the error
    /// that stopped it. On either path, [`Interp::result`] reflects the
    /// last value produced (empty on error).
    pub fn eval(&mut self, src: &[u8]) -> Result<Flow, Error> {
        let mut padded = Vec::with_capacity(src.len() + 1);
        padded.extend_from_slice(src);
        padded.push(0);

        let mut pos = 0usize;
        let mut quoted = false;
        let mut cur: Option<Value> = None;
        let mut list: Vec<Value> = Vec::new();

        loop {
            let token = lexer::next_token(&padded[pos..], &mut quoted);
            let tok_from = pos + token.from;
            let tok_to = pos + token.to;

            match token.kind {
                TokenKind::Error => {
                    self.result = Value::empty();
                    return Err(Error::Lex);
                }
                TokenKind::Word => {
                    // A WORD's own flow/error is not propagated here — only
                    // its result value feeds the command being assembled;
                    // the enclosing command still runs to completion.
                    let _ = self.subst(&padded[tok_from..tok_to]);
                    let part = self.result.clone();
                    let word = match cur.take() {
                        Some(mut c) => {
                            c.append(&part);
                            c
                        }
                        None => part,
                    };
                    list.push(word);
                }
                TokenKind::Part => {
                    let _ = self.subst(&padded[tok_from..tok_to]);
                    let part = self.result.clone();
                    cur = Some(match cur.take() {
                        Some(mut c) => {
                            c.append(&part);
                            c
                        }
                        None => part,
                    });
                }
                TokenKind::Cmd => {
                    if list.is_empty() {
                        self.result = Value::empty();
                    } else {
                        let flow = self.dispatch(&list)?;
                        if flow != Flow::Normal {
                            return Ok(flow);
                        }
                    }
                    list.clear();
                }
            }

            pos = tok_to;
            if pos >= padded.len() {
                break;
            }
        }

        Ok(Flow::Normal)
    }

    /// Substitutes one token's byte range, per SPEC_FULL.md §4.3, storing
    /// the result in [`Interp::result`] and returning its flow.
    pub(crate) fn subst(&mut self, s: &[u8]) -> Result<Flow, Error> {
        if s.is_empty() {
            self.result = Value::empty();
            return Ok(Flow::Normal);
        }
        match s[0] {
            b'{' => {
                self.result = Value::from(&s[1..s.len() - 1]);
                Ok(Flow::Normal)
            }
            b'$' => {
                let name = &s[1..];
                if name.len() + b"set ".len() >= MAX_SUBST_LEN {
                    return Err(Error::NameTooLong);
                }
                let mut program = Vec::with_capacity(4 + name.len());
                program.extend_from_slice(b"set ");
                program.extend_from_slice(name);
                self.eval(&program)
            }
            b'[' => self.eval(&s[1..s.len() - 1]),
            _ => {
                self.result = Value::from(s);
                Ok(Flow::Normal)
            }
        }
    }

    fn dispatch(&mut self, list: &[Value]) -> Result<Flow, Error> {
        let name = list[0].as_bytes();
        let arity = list.len();
        let index = self.commands.iter().position(|c| c.matches(name, arity));
        let Some(index) = index else {
            self.result = Value::empty();
            return Err(Error::Dispatch(Name(name.to_vec()), arity));
        };
        match self.commands[index].handler.clone() {
            Handler::Native(f) => f(self, list),
            Handler::Proc(payload) => self.call_proc(&payload, list),
        }
    }

    /// Invocation of a user procedure per SPEC_FULL.md §4.6: the body's own
    /// flow (including an internal error) is swallowed — the caller always
    /// sees `Normal` — but whatever result the body produced (or the empty
    /// value an error leaves behind) remains the last result.
    fn call_proc(&mut self, payload: &Rc<Vec<Value>>, args: &[Value]) -> Result<Flow, Error> {
        let params = &payload[2];
        let body = payload[3].clone();

        self.env.push();
        let formal_count = params.list_length();
        for i in 0..formal_count {
            let pname = params.list_at(i).expect("i < formal_count");
            let actual = args.get(i + 1).cloned().unwrap_or_else(Value::empty);
            self.env.set(pname.as_bytes(), actual);
        }
        let _ = self.eval(body.as_bytes());
        self.env.pop();

        Ok(Flow::Normal)
    }

    /// Registers a user procedure the way the `proc` built-in does: `args`
    /// is the entire defining invocation (`proc`, name, params, body).
    pub(crate) fn define_proc(&mut self, args: &[Value]) {
        let name = args[1].as_bytes().to_vec();
        self.register_command(Command {
            name,
            arity: 0,
            handler: Handler::Proc(Rc::new(args.to_vec())),
        });
    }
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn result_of(src: &str) -> String {
        let mut interp = Interp::new();
        interp.eval(src.as_bytes()).unwrap();
        interp.result().as_str_lossy().into_owned()
    }

    #[test]
    fn if_true_branch_runs_and_prints() {
        let mut interp = Interp::new();
        let flow = interp.eval(b"if {< 1 2} {puts A} {puts B}").unwrap();
        assert_eq!(flow, Flow::Normal);
        assert_eq!(interp.result().as_bytes(), b"A");
    }

    #[test]
    fn while_returns_condition_value() {
        assert_eq!(result_of("set x 0; while {< $x 5} {set x [+ $x 1]}"), "0");
    }

    #[test]
    fn fibonacci_via_recursive_proc() {
        assert_eq!(
            result_of(
                "proc fib {x} { if {<= $x 1} {return 1} \
                 {return [+ [fib [- $x 1]] [fib [- $x 2]]]}}; fib 20"
            ),
            "10946"
        );
    }

    #[test]
    fn dynamic_command_name_via_concatenation() {
        assert_eq!(result_of("set a su; set b bst; $a$b Hello"), "Hello");
    }

    #[test]
    fn quote_disambiguation_via_empty_command_substitution() {
        assert_eq!(result_of("set q {\"}; subst $q[]hello[]$q"), "\"hello\"");
    }

    #[test]
    fn arithmetic_expression_nesting() {
        assert_eq!(result_of("set a 5; set b 7; subst [- [* 4 [+ $a $b]] 6]"), "42");
    }

    #[test]
    fn proc_scope_is_local_to_the_call() {
        assert_eq!(result_of("set x 1; proc two {} { set x 2;}; two; subst $x"), "1");
    }

    #[test]
    fn if_with_no_match_and_no_else_yields_zero() {
        assert_eq!(result_of("if {> 1 2} {puts A}"), "0");
    }

    #[test]
    fn dispatch_miss_is_an_error() {
        let mut interp = Interp::new();
        assert_matches!(interp.eval(b"nope 1 2"), Err(Error::Dispatch(_, _)));
        assert_eq!(interp.result().as_bytes(), b"");
    }

    #[test]
    fn unterminated_brace_is_a_lex_error() {
        let mut interp = Interp::new();
        assert_matches!(interp.eval(b"set a {"), Err(Error::Lex));
    }

    #[test]
    fn a_failing_nested_command_substitution_does_not_abort_the_command() {
        let mut interp = Interp::new();
        let flow = interp.eval(b"set x [bogus]").unwrap();
        assert_eq!(flow, Flow::Normal);
        assert_eq!(interp.result().as_bytes(), b"");
        interp.eval(b"subst $x").unwrap();
        assert_eq!(interp.result().as_bytes(), b"");
    }

    #[test]
    fn redefining_a_proc_shadows_the_earlier_one() {
        assert_eq!(result_of("proc five {} { subst 5 }; proc five {} { subst 6 }; five"), "6");
    }

    #[test]
    fn break_exits_a_while_loop_normally() {
        assert_eq!(
            result_of("set x 0; while {== 1 1} {set x [+ $x 1]; if {== $x 5} {break}}"),
            "break"
        );
    }

    #[test]
    fn return_inside_while_propagates_past_the_loop() {
        assert_eq!(
            result_of(
                "set x 0; while {== 1 1} {set x [+ $x 1]; \
                 if {!= $x 5} {continue} ; return foo}"
            ),
            "foo"
        );
    }
}
