//! Bytecode representation

use std::{collections::HashMap, str};
use tracing::trace;

use crate::{
    error::{Error, Result},
    lexer::Lexer,
    token::{Op, Token},
};

/// Supported instructions of the bytecode
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Instruction {
    /// Push a value on the stack
    Push(i32),
    /// Print every value, top first
    Pall,
    /// Print the top value
    Pint,
    /// Discard the top value
    Pop,
    /// Exchange the top two values
    Swap,
    /// Add the top value to the second one
    Add,
    /// Subtract the top value from the second one
    Sub,
    /// Multiply the second value by the top one
    Mul,
    /// Divide the second value by the top one
    Div,
    /// Remainder of the second value divided by the top one
    Mod,
    /// Pass
    Nop,
    /// Print the top value as an ASCII character and discard it
    Pchar,
    /// Print values as ASCII characters from the top down to the first 0 or non-ASCII value
    Pstr,
    /// Move the top value to the bottom
    Rotl,
    /// Move the bottom value to the top
    Rotr,
    /// Push on the top from now on
    Stack,
    /// Push at the bottom from now on
    Queue,
}

impl Instruction {
    pub fn op(&self) -> Op {
        match self {
            Instruction::Push(_) => Op::Push,
            Instruction::Pall => Op::Pall,
            Instruction::Pint => Op::Pint,
            Instruction::Pop => Op::Pop,
            Instruction::Swap => Op::Swap,
            Instruction::Add => Op::Add,
            Instruction::Sub => Op::Sub,
            Instruction::Mul => Op::Mul,
            Instruction::Div => Op::Div,
            Instruction::Mod => Op::Mod,
            Instruction::Nop => Op::Nop,
            Instruction::Pchar => Op::Pchar,
            Instruction::Pstr => Op::Pstr,
            Instruction::Rotl => Op::Rotl,
            Instruction::Rotr => Op::Rotr,
            Instruction::Stack => Op::Stack,
            Instruction::Queue => Op::Queue,
        }
    }
}

/// One executable line of the source
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Statement<'a> {
    /// Line number used in diagnostics
    pub line: usize,
    pub instruction: Instruction,
    /// Text after what the instruction consumed
    pub ignored: Option<&'a [u8]>,
}

macro_rules! impl_parse_fn {
    ($fn_name:ident;$instruction:ident) => {
        fn $fn_name(_: &mut Lexer<'_>, _: usize) -> ParseRes {
            Ok(Instruction::$instruction)
        }
    };
}

type ParseRes = Result<Instruction>;
type ParseFn = fn(&mut Lexer<'_>, usize) -> ParseRes;

/// Parser to turn source lines into statements, one line at a time
pub struct Parser {
    parse_fns: HashMap<Op, ParseFn>,
    line_ctr: usize,
    count_comment_lines: bool,
}

impl Parser {
    /// Initialize the parser and prepare the parser functions
    ///
    /// * `count_comment_lines` whether comment lines advance the line counter
    pub fn new(count_comment_lines: bool) -> Self {
        let mut parse_fns: HashMap<Op, ParseFn> = HashMap::new();
        parse_fns.insert(Op::Push, Self::parse_push);
        parse_fns.insert(Op::Pall, Self::parse_pall);
        parse_fns.insert(Op::Pint, Self::parse_pint);
        parse_fns.insert(Op::Pop, Self::parse_pop);
        parse_fns.insert(Op::Swap, Self::parse_swap);
        parse_fns.insert(Op::Add, Self::parse_add);
        parse_fns.insert(Op::Sub, Self::parse_sub);
        parse_fns.insert(Op::Mul, Self::parse_mul);
        parse_fns.insert(Op::Div, Self::parse_div);
        parse_fns.insert(Op::Mod, Self::parse_mod);
        parse_fns.insert(Op::Nop, Self::parse_nop);
        parse_fns.insert(Op::Pchar, Self::parse_pchar);
        parse_fns.insert(Op::Pstr, Self::parse_pstr);
        parse_fns.insert(Op::Rotl, Self::parse_rotl);
        parse_fns.insert(Op::Rotr, Self::parse_rotr);
        parse_fns.insert(Op::Stack, Self::parse_stack);
        parse_fns.insert(Op::Queue, Self::parse_queue);

        Parser {
            parse_fns,
            line_ctr: 0,
            count_comment_lines,
        }
    }

    /// Number of the last counted line
    pub fn line_number(&self) -> usize {
        self.line_ctr
    }

    /// Parse one raw line. Blank and comment lines give `None`.
    pub fn parse_line<'a>(&mut self, text: &'a [u8]) -> Result<Option<Statement<'a>>> {
        let mut lexer = Lexer::new(text);

        let op = match lexer.next_token() {
            None => {
                trace!("skipping blank line");
                return Ok(None);
            }
            Some(Token::Comment) => {
                if self.count_comment_lines {
                    self.line_ctr += 1;
                }
                trace!(line = self.line_ctr, "skipping comment");
                return Ok(None);
            }
            Some(Token::Instruction(op)) => {
                self.line_ctr += 1;
                op
            }
            Some(Token::Word(name)) => {
                self.line_ctr += 1;
                return Err(Error::UnknownInstruction {
                    line: self.line_ctr,
                    name: name.to_vec(),
                });
            }
        };

        let instruction = (self.parse_fns[&op])(&mut lexer, self.line_ctr)?;

        Ok(Some(Statement {
            line: self.line_ctr,
            instruction,
            ignored: lexer.remainder(),
        }))
    }

    /// `push` takes one integer in base 10. Anything else in its place is a usage error.
    fn parse_push(lexer: &mut Lexer<'_>, line: usize) -> ParseRes {
        match lexer.next_token() {
            Some(Token::Word(word)) => str::from_utf8(word)
                .ok()
                .and_then(|word| word.parse::<i32>().ok())
                .map(Instruction::Push)
                .ok_or(Error::PushUsage { line }),
            _ => Err(Error::PushUsage { line }),
        }
    }

    // Instructions without data just return the given Instruction and leave the rest of
    // the line to the caller.
    impl_parse_fn! {parse_pall; Pall}
    impl_parse_fn! {parse_pint; Pint}
    impl_parse_fn! {parse_pop; Pop}
    impl_parse_fn! {parse_swap; Swap}
    impl_parse_fn! {parse_add; Add}
    impl_parse_fn! {parse_sub; Sub}
    impl_parse_fn! {parse_mul; Mul}
    impl_parse_fn! {parse_div; Div}
    impl_parse_fn! {parse_mod; Mod}
    impl_parse_fn! {parse_nop; Nop}
    impl_parse_fn! {parse_pchar; Pchar}
    impl_parse_fn! {parse_pstr; Pstr}
    impl_parse_fn! {parse_rotl; Rotl}
    impl_parse_fn! {parse_rotr; Rotr}
    impl_parse_fn! {parse_stack; Stack}
    impl_parse_fn! {parse_queue; Queue}
}
