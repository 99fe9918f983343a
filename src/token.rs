/// Reserved mnemonics of the bytecode
/// ***Mnemonics are case sensitive: `PUSH` is not `push`***
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Op {
    Push,
    Pall,
    Pint,
    Pop,
    Swap,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Nop,
    Pchar,
    Pstr,
    Rotl,
    Rotr,
    Stack,
    Queue,
}

impl Op {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Push => "push",
            Op::Pall => "pall",
            Op::Pint => "pint",
            Op::Pop => "pop",
            Op::Swap => "swap",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Mod => "mod",
            Op::Nop => "nop",
            Op::Pchar => "pchar",
            Op::Pstr => "pstr",
            Op::Rotl => "rotl",
            Op::Rotr => "rotr",
            Op::Stack => "stack",
            Op::Queue => "queue",
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Token<'a> {
    Instruction(Op),

    /// `#` as the first non-blank character of a line
    Comment,

    /// Any other whitespace delimited word: arguments and unknown mnemonics
    Word(&'a [u8]),
}

impl<'a> Token<'a> {
    pub fn new(token: &'a [u8]) -> Self {
        match token {
            b"push" => Token::Instruction(Op::Push),
            b"pall" => Token::Instruction(Op::Pall),
            b"pint" => Token::Instruction(Op::Pint),
            b"pop" => Token::Instruction(Op::Pop),
            b"swap" => Token::Instruction(Op::Swap),
            b"add" => Token::Instruction(Op::Add),
            b"sub" => Token::Instruction(Op::Sub),
            b"mul" => Token::Instruction(Op::Mul),
            b"div" => Token::Instruction(Op::Div),
            b"mod" => Token::Instruction(Op::Mod),
            b"nop" => Token::Instruction(Op::Nop),
            b"pchar" => Token::Instruction(Op::Pchar),
            b"pstr" => Token::Instruction(Op::Pstr),
            b"rotl" => Token::Instruction(Op::Rotl),
            b"rotr" => Token::Instruction(Op::Rotr),
            b"stack" => Token::Instruction(Op::Stack),
            b"queue" => Token::Instruction(Op::Queue),
            _ => Token::Word(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics_round_trip_through_token() {
        let ops = [
            Op::Push,
            Op::Pall,
            Op::Pint,
            Op::Pop,
            Op::Swap,
            Op::Add,
            Op::Sub,
            Op::Mul,
            Op::Div,
            Op::Mod,
            Op::Nop,
            Op::Pchar,
            Op::Pstr,
            Op::Rotl,
            Op::Rotr,
            Op::Stack,
            Op::Queue,
        ];
        for op in ops {
            assert_eq!(Token::new(op.mnemonic().as_bytes()), Token::Instruction(op));
        }
    }

    #[test]
    fn unknown_words() {
        assert_eq!(Token::new(b"PUSH"), Token::Word(b"PUSH"));
        assert_eq!(Token::new(b"42"), Token::Word(b"42"));
        assert_eq!(Token::new(b"p\xffsh"), Token::Word(b"p\xffsh"));
    }
}
