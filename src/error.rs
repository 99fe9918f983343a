//! Interpreter errors.
//!
//! The `Display` text of every variant is the exact diagnostic printed on stderr.

use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad command line.
    #[error("USAGE: {program} file")]
    Usage { program: String },

    #[error("Error: Can't open file {path}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// `push` without an argument, or with one that is not an integer.
    #[error("L{line}: usage: push integer")]
    PushUsage { line: usize },

    /// `name` holds the bytes of the source line, which need not be UTF-8.
    #[error("L{line}: unknown instruction {}", String::from_utf8_lossy(name))]
    UnknownInstruction { line: usize, name: Vec<u8> },

    /// `pint` and `pchar` on an empty stack.
    #[error("L{line}: can't {op}, stack empty")]
    StackEmpty { line: usize, op: &'static str },

    #[error("L{line}: can't pop an empty stack")]
    PopEmpty { line: usize },

    /// A two operand instruction with less than two elements on the stack.
    #[error("L{line}: can't {op}, stack too short")]
    StackTooShort { line: usize, op: &'static str },

    #[error("L{line}: division by zero")]
    DivisionByZero { line: usize },

    /// `pchar` on a value outside of the ASCII table.
    #[error("L{line}: can't pchar, value out of range")]
    OutOfRange { line: usize },

    #[error("Error: malloc failed")]
    Allocation,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Write the diagnostic line. Source text is echoed byte for byte.
    pub fn report<W: Write>(&self, mut w: W) -> io::Result<()> {
        match self {
            Error::UnknownInstruction { line, name } => {
                write!(w, "L{}: unknown instruction ", line)?;
                w.write_all(name)?;
                writeln!(w)
            }
            err => writeln!(w, "{}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
