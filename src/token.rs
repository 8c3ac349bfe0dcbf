use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // single character
    #[display(fmt = "(")]
    LeftParen,
    #[display(fmt = ")")]
    RightParen,
    #[display(fmt = "{{")]
    LeftBrace,
    #[display(fmt = "}}")]
    RightBrace,
    #[display(fmt = ",")]
    Comma,
    #[display(fmt = ".")]
    Dot,
    #[display(fmt = ";")]
    Semicolon,
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "*")]
    Star,
    #[display(fmt = "/")]
    Slash,

    // one or two characters
    #[display(fmt = "!")]
    Bang,
    #[display(fmt = "!=")]
    BangEqual,
    #[display(fmt = "=")]
    Equal,
    #[display(fmt = "==")]
    EqualEqual,
    #[display(fmt = ">")]
    Greater,
    #[display(fmt = ">=")]
    GreaterEqual,
    #[display(fmt = "<")]
    Less,
    #[display(fmt = "<=")]
    LessEqual,

    // literals
    #[display(fmt = "identifier")]
    Identifier,
    #[display(fmt = "string")]
    String,
    #[display(fmt = "number")]
    Number,

    // keywords, most of them are reserved only
    #[display(fmt = "and")]
    And,
    #[display(fmt = "class")]
    Class,
    #[display(fmt = "else")]
    Else,
    #[display(fmt = "false")]
    False,
    #[display(fmt = "for")]
    For,
    #[display(fmt = "fun")]
    Fun,
    #[display(fmt = "if")]
    If,
    #[display(fmt = "nil")]
    Nil,
    #[display(fmt = "or")]
    Or,
    #[display(fmt = "print")]
    Print,
    #[display(fmt = "return")]
    Return,
    #[display(fmt = "super")]
    Super,
    #[display(fmt = "this")]
    This,
    #[display(fmt = "true")]
    True,
    #[display(fmt = "var")]
    Var,
    #[display(fmt = "while")]
    While,

    #[display(fmt = "end of file")]
    Eof,
}

pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Payload carried by `NUMBER` and `STRING` tokens.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum Literal {
    #[display(fmt = "{}", _0)]
    Number(f64),
    #[display(fmt = "{}", _0)]
    Str(String),
}

/// One lexical unit. Immutable once the scanner hands it out.
#[derive(Debug, Display, Clone, PartialEq)]
#[display(fmt = "{}", lexeme)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: usize,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
