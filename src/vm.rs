//! Virtual machine that runs the bytecode

use crate::{
    bytecode::{Instruction, Parser, Statement},
    config::Config,
    error::{Error, Result},
    stack::{Mode, Stack},
};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Virtual machine representation
///
/// `W` receives the program output, `D` the non-fatal diagnostics.
pub struct Vm<W: Write, D: Write> {
    parser: Parser,
    config: Config,
    stack: Stack,
    out: W,
    diag: D,
}

impl<W: Write, D: Write> Vm<W, D> {
    pub fn new(config: Config, out: W, diag: D) -> Self {
        Vm {
            parser: Parser::new(config.count_comment_lines),
            stack: Stack::new(config.mode),
            config,
            out,
            diag,
        }
    }

    /// Run every line of `source` until the end or the first error.
    ///
    /// Output written before an error is flushed all the same.
    pub fn run<R: BufRead>(&mut self, mut source: R) -> Result<()> {
        let result = self.run_lines(&mut source);
        self.out.flush()?;
        self.diag.flush()?;
        result?;

        debug!(
            lines = self.parser.line_number(),
            depth = self.stack.len(),
            "end of program"
        );
        Ok(())
    }

    fn run_lines<R: BufRead>(&mut self, source: &mut R) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if source.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }

            self.next_line(&buf)?;
        }
    }

    /// Parse and execute a single source line. The text need not be UTF-8.
    pub fn next_line(&mut self, text: &[u8]) -> Result<()> {
        match self.parser.parse_line(text)? {
            Some(statement) => self.execute(&statement),
            None => Ok(()),
        }
    }

    /// Execute one statement, then warn about the text it left over.
    pub fn execute(&mut self, statement: &Statement<'_>) -> Result<()> {
        let line = statement.line;
        let op = statement.instruction.op().mnemonic();
        debug!(
            line,
            instruction = ?statement.instruction,
            depth = self.stack.len(),
            "dispatch"
        );

        match statement.instruction {
            Instruction::Push(value) => self.stack.push(value)?,
            Instruction::Pall => self.ins_pall()?,
            Instruction::Pint => self.ins_pint(line, op)?,
            Instruction::Pop => self.ins_pop(line)?,
            Instruction::Swap => self.ins_swap(line, op)?,
            Instruction::Add => self.binary_op(line, op, |lhs, rhs| Ok(lhs.wrapping_add(rhs)))?,
            Instruction::Sub => self.binary_op(line, op, |lhs, rhs| Ok(lhs.wrapping_sub(rhs)))?,
            Instruction::Mul => self.binary_op(line, op, |lhs, rhs| Ok(lhs.wrapping_mul(rhs)))?,
            Instruction::Div => self.binary_op(line, op, |lhs, rhs| {
                if rhs == 0 {
                    return Err(Error::DivisionByZero { line });
                }
                Ok(lhs.wrapping_div(rhs))
            })?,
            Instruction::Mod => self.binary_op(line, op, |lhs, rhs| {
                if rhs == 0 {
                    return Err(Error::DivisionByZero { line });
                }
                Ok(lhs.wrapping_rem(rhs))
            })?,
            Instruction::Nop => {}
            Instruction::Pchar => self.ins_pchar(line, op)?,
            Instruction::Pstr => self.ins_pstr()?,
            Instruction::Rotl => self.stack.rotate_left(),
            Instruction::Rotr => self.stack.rotate_right(),
            Instruction::Stack => self.set_mode(Mode::Stack),
            Instruction::Queue => self.set_mode(Mode::Queue),
        };

        if let Some(text) = statement.ignored {
            if self.config.warn_ignored_text {
                write!(self.diag, "L{}: ignoring text: ", line)?;
                self.diag.write_all(text)?;
                self.diag.write_all(b"\n")?;
            }
        }

        Ok(())
    }

    /// Values from top to bottom
    pub fn stack(&self) -> impl Iterator<Item = i32> + '_ {
        self.stack.iter()
    }

    /// Give back the writers, e.g. to inspect captured output
    pub fn into_writers(self) -> (W, D) {
        (self.out, self.diag)
    }

    fn set_mode(&mut self, mode: Mode) {
        trace!(?mode, "switching mode");
        self.stack.set_mode(mode);
    }

    /// Print every value, top first
    fn ins_pall(&mut self) -> Result<()> {
        for value in self.stack.iter() {
            writeln!(self.out, "{}", value)?;
        }
        Ok(())
    }

    /// Print the top value
    fn ins_pint(&mut self, line: usize, op: &'static str) -> Result<()> {
        match self.stack.peek() {
            Some(value) => {
                writeln!(self.out, "{}", value)?;
                Ok(())
            }
            None => Err(Error::StackEmpty { line, op }),
        }
    }

    fn ins_pop(&mut self, line: usize) -> Result<()> {
        match self.stack.pop() {
            Some(_) => Ok(()),
            None => Err(Error::PopEmpty { line }),
        }
    }

    fn ins_swap(&mut self, line: usize, op: &'static str) -> Result<()> {
        if !self.stack.swap_top() {
            return Err(Error::StackTooShort { line, op });
        }
        Ok(())
    }

    /// Store `f(second, top)` in the second element and discard the top one.
    /// Nothing changes when `f` fails.
    fn binary_op<F>(&mut self, line: usize, op: &'static str, f: F) -> Result<()>
    where
        F: FnOnce(i32, i32) -> Result<i32>,
    {
        let rhs = match self.stack.peek() {
            Some(rhs) if self.stack.len() >= 2 => rhs,
            _ => return Err(Error::StackTooShort { line, op }),
        };

        let lhs = self
            .stack
            .second_mut()
            .ok_or(Error::StackTooShort { line, op })?;
        *lhs = f(*lhs, rhs)?;

        self.stack.pop();
        Ok(())
    }

    /// Print the top value as a character and discard it
    fn ins_pchar(&mut self, line: usize, op: &'static str) -> Result<()> {
        let value = self.stack.peek().ok_or(Error::StackEmpty { line, op })?;

        let ch = ascii(value).ok_or(Error::OutOfRange { line })?;
        self.out.write_all(&[ch, b'\n'])?;

        self.stack.pop();
        Ok(())
    }

    /// Print characters from the top down, stopping at the first 0 or non-ASCII value
    fn ins_pstr(&mut self) -> Result<()> {
        let bytes: Vec<u8> = self
            .stack
            .iter()
            .map_while(|value| ascii(value).filter(|&ch| ch != 0))
            .collect();

        self.out.write_all(&bytes)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// The byte of an ASCII value
fn ascii(value: i32) -> Option<u8> {
    u8::try_from(value).ok().filter(u8::is_ascii)
}
