//! Driver that wires the pipeline together: scan, parse, resolve, interpret.
//!
//! Owns the two error flags the CLI reads for its exit code.  Compile errors
//! from any stage are reported to stderr and suppress execution at the
//! post-parse and post-resolve checkpoints; a runtime error aborts the
//! current program but leaves the driver usable for the next REPL line.

use std::io::Write;

use log::info;

use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::Scanner;
use crate::token::Token;

pub struct Lox {
    interpreter: Interpreter,
    pub had_compile_error: bool,
    pub had_runtime_error: bool,
}

impl Lox {
    pub fn new() -> Self {
        Lox {
            interpreter: Interpreter::new(),
            had_compile_error: false,
            had_runtime_error: false,
        }
    }

    /// Route program output to `writer` instead of stdout.
    pub fn with_output(writer: Box<dyn Write>) -> Self {
        Lox {
            interpreter: Interpreter::with_output(writer),
            had_compile_error: false,
            had_runtime_error: false,
        }
    }

    /// Run one source text through the full pipeline.  Interpreter state
    /// (globals, resolved bindings) persists across calls, which is what
    /// makes the REPL work.
    pub fn run(&mut self, source: &str) {
        info!("Running {} bytes of source", source.len());

        let mut tokens: Vec<Token> = Vec::new();

        for result in Scanner::new(source.as_bytes()) {
            match result {
                Ok(token) => tokens.push(token),

                Err(e) => {
                    eprintln!("{}", e);
                    self.had_compile_error = true;
                }
            }
        }

        let (statements, errors) = Parser::new(tokens).parse();

        for e in &errors {
            eprintln!("{}", e);
        }

        self.had_compile_error |= !errors.is_empty();

        if self.had_compile_error {
            return;
        }

        self.interpreter.reset_bindings();

        let errors = Resolver::new(&mut self.interpreter).resolve(&statements);

        for e in &errors {
            eprintln!("{}", e);
        }

        if !errors.is_empty() {
            self.had_compile_error = true;
            return;
        }

        if let Err(e) = self.interpreter.interpret(&statements) {
            eprintln!("{}", e);
            self.had_runtime_error = true;
        }
    }

    /// Reset both flags; the REPL calls this between lines.
    pub fn clear_errors(&mut self) {
        self.had_compile_error = false;
        self.had_runtime_error = false;
    }
}

impl Default for Lox {
    fn default() -> Self {
        Lox::new()
    }
}
