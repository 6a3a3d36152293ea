use crate::span::Span;
use rail_core::NodeKind;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced while reading a rule
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input at {span}, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    #[error("unclosed delimiter '{delimiter}' opened at {open_span}")]
    UnclosedDelimiter { delimiter: char, open_span: Span },

    #[error("invalid token '{value}' at {span}")]
    InvalidToken { value: String, span: Span },

    #[error("empty alternative at {span}")]
    EmptyAlternative { span: Span },

    #[error("groups and loops nested deeper than {limit} at {span}")]
    TooDeep { limit: usize, span: Span },
}

impl ParseError {
    pub fn unexpected_token(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedEof {
            expected: expected.into(),
            span,
        }
    }

    pub fn unclosed_delimiter(delimiter: char, open_span: Span) -> Self {
        ParseError::UnclosedDelimiter { delimiter, open_span }
    }

    pub fn invalid_token(value: impl Into<String>, span: Span) -> Self {
        ParseError::InvalidToken {
            value: value.into(),
            span,
        }
    }

    pub fn empty_alternative(span: Span) -> Self {
        ParseError::EmptyAlternative { span }
    }

    pub fn too_deep(limit: usize, span: Span) -> Self {
        ParseError::TooDeep { limit, span }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => *span,
            ParseError::UnexpectedEof { span, .. } => *span,
            ParseError::UnclosedDelimiter { open_span, .. } => *open_span,
            ParseError::InvalidToken { span, .. } => *span,
            ParseError::EmptyAlternative { span } => *span,
            ParseError::TooDeep { span, .. } => *span,
        }
    }
}

/// Problems met while rendering a tree; rendering carries on past them
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unexpected node type {0}")]
    UnexpectedKind(NodeKind),
}
