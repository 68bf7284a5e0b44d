use logos::Logos;
use std::fmt;
use std::ops::Range;

/// The kind of a lexical token. This enumeration is closed: the parser's
/// lookup tables are keyed on it and the AST is exhaustively matchable.
#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    #[regex("[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    Str,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // operators
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be unary
    #[token("!")]
    Bang, // NOTE: unary only
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,

    // punctuation
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // keywords
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[error]
    Illegal,

    /// Only generated when the underlying lexer is exhausted.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Int => "integer",
            TokenKind::Str => "string",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Ident => "identifier",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Illegal => "illegal token",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit: kind plus the literal text it was produced
/// from. The span is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Range<usize>,
}

impl Token {
    /// The `Eof` token handed out once the source is exhausted.
    fn eof(at: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
            span: at..at,
        }
    }
}

/// On-demand token source. Tokens are pulled one at a time; after the source
/// is exhausted every further pull yields `Eof`.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(kind) => Token {
                kind,
                literal: self.inner.slice().to_string(),
                span: self.inner.span(),
            },
            None => Token::eof(self.inner.source().len()),
        }
    }
}
