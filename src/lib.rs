pub mod cond;
pub mod diag;
pub mod dump;
pub mod expr;
pub mod interpreter;
pub mod statement;
pub mod store;

use crate::interpreter::{Interpreter, RunReport};

/// Interpret one program and collect its transcript and diagnostics.
///
/// Every call gets a fresh variable store, so repeated runs over the same
/// source text are independent and deterministic.
pub fn run(source: &str) -> RunReport {
    let mut interpreter = Interpreter::new();
    interpreter.interpret(source);
    interpreter.into_report()
}
