use crate::error::{ParseError, Result};
use crate::lexer::{Lexer, Token};
use crate::span::Span;
use rail_core::{Expression, Node, NodeKind};

/// Deepest nesting of groups and loops a rule may use
pub const MAX_DEPTH: usize = 256;

/// Parser for a single rail rule: `name : body ;`
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    depth: usize,
}

impl<'source> Parser<'source> {
    pub fn new(source: &'source str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            depth: 0,
        }
    }

    /// Parse the rule making up the whole input
    ///
    /// Returns `Ok(None)` when the input holds nothing but whitespace and
    /// comments.
    pub fn parse_rule(&mut self) -> Result<Option<Expression>> {
        if self.peek().is_none() {
            return Ok(None);
        }

        let name_span = self.expect_token(Token::Ident, "rule name")?;
        let name = self.lexer.slice(name_span).to_string();
        self.expect_token(Token::Colon, "':'")?;

        let body = self.parse_alternatives()?;

        if let Some((Token::Semicolon, _)) = self.peek() {
            self.next();
        }

        if let Some((token, span)) = self.next() {
            return Err(ParseError::unexpected_token(
                "end of rule",
                token.to_string(),
                span,
            ));
        }

        Ok(Some(Expression::new(name, body)))
    }

    /// Parse `|`-separated branches
    ///
    /// An empty first branch makes the rest optional from the left
    /// (`| a`), an empty last branch from the right (`a |`).
    fn parse_alternatives(&mut self) -> Result<Node> {
        let mut branches = vec![self.parse_sequence()?];
        let mut pipes = Vec::new();

        while let Some((Token::Pipe, span)) = self.peek() {
            self.next();
            pipes.push(span);
            branches.push(self.parse_sequence()?);
        }

        if pipes.is_empty() {
            return Ok(branches
                .pop()
                .flatten()
                .unwrap_or_else(|| Node::container(NodeKind::Sequence)));
        }

        let last = branches.len() - 1;
        let open_left = branches[0].is_none();
        let open_right = branches[last].is_none();

        if let Some(i) = (1..last).find(|&i| branches[i].is_none()) {
            return Err(ParseError::empty_alternative(pipes[i - 1].merge(pipes[i])));
        }

        let mut filled: Vec<Node> = branches.into_iter().flatten().collect();
        let mut node = match filled.len() {
            0 => return Err(ParseError::empty_alternative(pipes[0])),
            1 => filled.remove(0),
            _ => filled
                .into_iter()
                .fold(Node::container(NodeKind::Choice), Node::with),
        };

        if open_right {
            node = Node::wrap(NodeKind::ChoiceRight, node);
        }
        if open_left {
            node = Node::wrap(NodeKind::ChoiceLeft, node);
        }
        Ok(node)
    }

    /// Parse juxtaposed elements; `None` when the branch is empty
    fn parse_sequence(&mut self) -> Result<Option<Node>> {
        let mut elements = Vec::new();

        while let Some((token, _)) = self.peek() {
            if matches!(token, Token::Pipe | Token::RParen | Token::Semicolon) {
                break;
            }
            elements.push(self.parse_postfix()?);
        }

        Ok(match elements.len() {
            0 => None,
            1 => elements.pop(),
            _ => Some(
                elements
                    .into_iter()
                    .fold(Node::container(NodeKind::Sequence), Node::with),
            ),
        })
    }

    /// Parse an element followed by any number of `+`
    fn parse_postfix(&mut self) -> Result<Node> {
        let mut node = self.parse_primary()?;
        let mut level = nesting(&node);
        while let Some((Token::Plus, span)) = self.peek() {
            self.next();
            level += 1;
            if level > MAX_DEPTH {
                return Err(ParseError::too_deep(MAX_DEPTH, span));
            }
            node = Node::wrap(NodeKind::Loop, node);
        }
        Ok(node)
    }

    fn parse_primary(&mut self) -> Result<Node> {
        let (token, span) = self
            .next()
            .ok_or_else(|| ParseError::unexpected_eof("element", self.eof_span()))?;
        let text = self.lexer.slice(span);

        match token {
            Token::Ident => Ok(Node::non_terminal(text)),
            Token::Str => Ok(Node::terminal(text)),
            Token::Annotation => {
                let inner = &text[1..text.len() - 1];
                Ok(Node::annotation(inner.trim()))
            }
            Token::LParen => self.parse_group(span),
            Token::LBracket | Token::SingleQuote | Token::Quote | Token::Error => {
                match text.chars().next() {
                    Some(delimiter @ ('[' | '\'' | '"')) => {
                        Err(ParseError::unclosed_delimiter(delimiter, span))
                    }
                    _ => Err(ParseError::invalid_token(text, span)),
                }
            }
            _ => Err(ParseError::unexpected_token("element", token.to_string(), span)),
        }
    }

    fn parse_group(&mut self, open_span: Span) -> Result<Node> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::too_deep(MAX_DEPTH, open_span));
        }
        self.depth += 1;
        let inner = self.parse_alternatives();
        self.depth -= 1;
        let inner = inner?;

        match self.next() {
            Some((Token::RParen, _)) => {}
            Some((token, span)) => {
                return Err(ParseError::unexpected_token("')'", token.to_string(), span))
            }
            None => return Err(ParseError::unclosed_delimiter('(', open_span)),
        }

        if inner.is_seq() && inner.size() == 0 {
            return Ok(Node::container(NodeKind::Group));
        }
        if nesting(&inner) >= MAX_DEPTH {
            return Err(ParseError::too_deep(MAX_DEPTH, open_span));
        }
        Ok(Node::wrap(NodeKind::Group, inner))
    }

    fn expect_token(&mut self, expected: Token, description: &str) -> Result<Span> {
        match self.next() {
            Some((token, span)) if token == expected => Ok(span),
            Some((token, span)) => Err(ParseError::unexpected_token(
                description,
                token.to_string(),
                span,
            )),
            None => Err(ParseError::unexpected_eof(description, self.eof_span())),
        }
    }

    fn eof_span(&self) -> Span {
        Span::eof(self.lexer.source())
    }

    fn peek(&mut self) -> Option<(Token, Span)> {
        self.lexer.peek_token()
    }

    fn next(&mut self) -> Option<(Token, Span)> {
        self.lexer.next_token()
    }
}

/// Largest number of groups and loops stacked on any path down from `node`
///
/// Only called on trees the parser has already bounded.
fn nesting(node: &Node) -> usize {
    let own = usize::from(matches!(node.kind, NodeKind::Group | NodeKind::Loop));
    own + node.children.iter().map(nesting).max().unwrap_or(0)
}

/// Parse a rail rule
///
/// ```
/// use rail_notation::parse;
///
/// let expr = parse("rule1 : A 'x' + ;").unwrap().unwrap();
/// assert_eq!(expr.name, "rule1");
/// assert!(expr.root.is_seq());
/// ```
pub fn parse(source: &str) -> Result<Option<Expression>> {
    Parser::new(source).parse_rule()
}
