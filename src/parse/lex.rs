use log::trace;

use super::error::LexError;
use crate::token::{Literal, Token, TokenKind, KEYWORDS};

/// Tokens produced by one scan together with every problem found on the way.
///
/// Scanning never stops at the first bad character, so both lists can be
/// non-empty at the same time. `tokens` always ends with exactly one `Eof`.
#[derive(Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

pub fn lex(input: &str) -> LexOutput {
    Lexer::new(input).run()
}

struct Lexer<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    // index into `chars`
    start: usize,
    curr: usize,
    line: usize,
    output: LexOutput,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().collect(),
            start: 0,
            curr: 0,
            line: 1,
            output: LexOutput::default(),
        }
    }

    fn run(mut self) -> LexOutput {
        while !self.is_at_end() {
            self.start = self.curr;
            self.lex_token();
        }
        self.output.tokens.push(Token::eof(self.line));
        self.output
    }

    fn is_at_end(&self) -> bool {
        self.curr >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.curr).map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.curr + 1).map(|(_, c)| *c)
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.curr].1;
        self.curr += 1;
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.curr += 1;
        true
    }

    fn byte_offset(&self, idx: usize) -> usize {
        self.chars
            .get(idx)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.input.len())
    }

    fn lexeme(&self) -> &'a str {
        let input = self.input;
        &input[self.byte_offset(self.start)..self.byte_offset(self.curr)]
    }

    fn lex_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            ';' => self.add_token(TokenKind::Semicolon),
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_char('/') {
                    // comment runs until the end of the line
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_identifier_start(c) => self.lex_keyword_or_identifier(),
            ch => self.output.errors.push(LexError::UnexpectedCharacter {
                ch,
                line: self.line,
            }),
        }
    }

    fn add_either(&mut self, next: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.match_char(next) { matched } else { single };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push(Token::new(kind, self.lexeme(), self.line));
    }

    fn push(&mut self, token: Token) {
        trace!("line {} - {:?}: {:?}", token.line, token.kind, token.lexeme);
        self.output.tokens.push(token);
    }

    fn lex_string(&mut self) {
        let start_line = self.line;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.output
                .errors
                .push(LexError::UnterminatedString { line: start_line });
            return;
        }

        // closing '"'
        self.advance();
        let lexeme = self.lexeme();
        // remove start '"' and end '"'
        let content = &lexeme[1..lexeme.len() - 1];
        self.push(Token::with_literal(
            TokenKind::String,
            lexeme,
            Literal::Str(content.to_string()),
            self.line,
        ));
    }

    fn lex_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            // consume '.'
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = self.lexeme();
        // digits with at most one inner '.' always parse
        let value = lexeme.parse::<f64>().unwrap_or(f64::NAN);
        self.push(Token::with_literal(
            TokenKind::Number,
            lexeme,
            Literal::Number(value),
            self.line,
        ));
    }

    fn lex_keyword_or_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }

        let kind = KEYWORDS
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
