use super::token::Token;

/// Splits one source line into whitespace delimited tokens.
pub struct Lexer<'a> {
    line: &'a [u8],
    cursor: usize,
    started: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Lexer {
            line,
            cursor: 0,
            started: false,
        }
    }

    /// Get the next token. This consumes the token.
    ///
    /// A `#` only opens a comment when it is the first non-blank character of the line,
    /// in which case the whole line is consumed.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        self.trim();

        let token = match self.peek_char() {
            Some(b'#') if !self.started => {
                self.cursor = self.line.len();
                Token::Comment
            }
            Some(_) => self.read_token(),
            None => return None,
        };

        self.started = true;
        Some(token)
    }

    /// Text left on the line after the consumed tokens, without surrounding blanks.
    pub fn remainder(&mut self) -> Option<&'a [u8]> {
        self.trim();

        let mut end = self.line.len();
        while end > self.cursor && is_blank(self.line[end - 1]) {
            end -= 1;
        }
        let rest = &self.line[self.cursor..end];
        self.cursor = self.line.len();

        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }

    /// Trim whitespaces, tabs, carriage returns, control chars
    fn trim(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !is_blank(ch) {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Read a word up to the next blank
    fn read_token(&mut self) -> Token<'a> {
        let start_pos = self.cursor;
        while let Some(ch) = self.peek_char() {
            if is_blank(ch) {
                break;
            }
            self.cursor += 1;
        }

        Token::new(&self.line[start_pos..self.cursor])
    }

    /// Get the char under the cursor without consuming it
    fn peek_char(&self) -> Option<u8> {
        self.line.get(self.cursor).copied()
    }
}

fn is_blank(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}
