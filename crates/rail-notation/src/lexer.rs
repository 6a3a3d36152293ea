use crate::span::Span;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Rule and non-terminal names
    #[regex(r"[A-Za-z_][A-Za-z0-9_-]*")]
    Ident,

    // Terminals keep their quotes
    #[regex(r"'[^'\n]*'")]
    #[regex(r#""[^"\n]*""#)]
    Str,

    // [free text]
    #[regex(r"\[[^\]]*\]")]
    Annotation,

    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("|")]
    Pipe,
    #[token("+")]
    Plus,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Openers left without their closing counterpart
    #[token("[")]
    LBracket,
    #[token("'")]
    SingleQuote,
    #[token("\"")]
    Quote,

    #[regex(r"//[^\n]*")]
    Comment,

    Error,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Ident => write!(f, "identifier"),
            Token::Str => write!(f, "terminal"),
            Token::Annotation => write!(f, "annotation"),
            Token::Colon => write!(f, "':'"),
            Token::Semicolon => write!(f, "';'"),
            Token::Pipe => write!(f, "'|'"),
            Token::Plus => write!(f, "'+'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::LBracket => write!(f, "'['"),
            Token::SingleQuote => write!(f, "'''"),
            Token::Quote => write!(f, "'\"'"),
            Token::Comment => write!(f, "comment"),
            Token::Error => write!(f, "error"),
        }
    }
}

/// Lexer wrapper with position tracking and one token of lookahead
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
    peeked: Option<Option<(Token, Span)>>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            inner: Token::lexer(source),
            peeked: None,
        }
    }

    pub fn next_token(&mut self) -> Option<(Token, Span)> {
        if let Some(peeked) = self.peeked.take() {
            return peeked;
        }

        loop {
            let token = self.inner.next()?;
            let span = Span::from(self.inner.span());

            if matches!(token, Ok(Token::Comment)) {
                continue;
            }

            let token = token.unwrap_or(Token::Error);
            return Some((token, span));
        }
    }

    pub fn peek_token(&mut self) -> Option<(Token, Span)> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_token());
        }
        self.peeked.flatten()
    }

    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    pub fn slice(&self, span: Span) -> &'source str {
        &self.source()[span.to_range()]
    }
}
