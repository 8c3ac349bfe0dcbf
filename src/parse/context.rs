use super::error::ParseError;
use crate::token::{Token, TokenKind};

/// Deepest run of nested groups and prefix operators the parser accepts.
pub const MAX_DEPTH: usize = 64;

/// Cursor over a scanned token list.
///
/// The list must end with an `Eof` token; the cursor never moves past it.
pub struct Context<'a> {
    items: &'a [Token],
    curr_pos: usize,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [Token]) -> Self {
        Self {
            items,
            curr_pos: 0,
            depth: 0,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub fn peek(&self) -> &'a Token {
        let items = self.items;
        &items[self.curr_pos.min(items.len() - 1)]
    }

    pub fn previous(&self) -> &'a Token {
        let items = self.items;
        &items[self.curr_pos.saturating_sub(1)]
    }

    pub fn advance(&mut self) -> &'a Token {
        if self.is_at_end() {
            return self.peek();
        }
        self.curr_pos += 1;
        self.previous()
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token when it is one of `match_tokens`.
    pub fn match_tokens(&mut self, match_tokens: &'static [TokenKind]) -> bool {
        if match_tokens.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }
        false
    }

    pub fn consume_token(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            return Some(self.advance());
        }
        None
    }

    /// Opens one nesting level for the construct started by `opener`.
    pub fn enter(&mut self, opener: &Token) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep(opener.clone()));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
