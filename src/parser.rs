use std::fmt;

use thiserror::Error;

use crate::{
    ast::{Array, Forest, Generator, Object, Token, TokenKind},
    lexer::{LexError, Lexer},
    literal::{LiteralError, resolve_env, resolve_raw},
};

/// Deepest nesting of objects, arrays and dotted path segments accepted.
pub const MAX_DEPTH: usize = 128;

/// What went wrong, independent of where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected input: {found}")]
    UnexpectedInput { found: TokenKind },

    #[error("was expecting {expected}, found {found}")]
    Expected { expected: TokenKind, found: TokenKind },

    #[error("unclosed array")]
    UnclosedArray,

    #[error("unclosed object")]
    UnclosedObject,

    #[error(transparent)]
    InvalidLiteral(#[from] LiteralError),

    #[error("nesting deeper than {} levels", MAX_DEPTH)]
    TooDeep,
}

/// Returned when an expression cannot be parsed.
///
/// Carries the whole input so the error can be shown with a caret under the
/// offending position:
///
/// ```text
/// Parse error: unclosed array
/// a=[1 2
///       ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The expression as given
    pub input: String,
    /// Byte offset where parsing failed
    pub position: usize,
    pub kind: ErrorKind,
}

impl ParseError {
    /// Character column of [`ParseError::position`] within the input.
    pub fn column(&self) -> usize {
        let end = self.position.min(self.input.len());
        self.input
            .get(..end)
            .map_or(end, |prefix| prefix.chars().count())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error: {}\n{}\n{}^",
            self.kind,
            self.input,
            " ".repeat(self.column())
        )
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// A failure inside a production, before it is tied to the input.
struct Failure {
    position: usize,
    kind: ErrorKind,
}

impl Failure {
    fn new(position: usize, kind: impl Into<ErrorKind>) -> Self {
        Failure {
            position,
            kind: kind.into(),
        }
    }

    fn unexpected(token: &Token) -> Self {
        match token.kind {
            TokenKind::Eof => Failure::new(token.position, ErrorKind::UnexpectedEof),
            found => Failure::new(token.position, ErrorKind::UnexpectedInput { found }),
        }
    }
}

impl From<LexError> for Failure {
    fn from(e: LexError) -> Self {
        Failure::new(e.position(), e)
    }
}

/// Recursive-descent parser with one token of lookahead.
///
/// ```text
/// start     := (object | array)+ | field*
/// object    := '{' field* '}'
/// array     := '[' arrayElem* ']'
/// field     := LITERAL fieldRHS
/// fieldRHS  := '=' value | '.' LITERAL fieldRHS
/// value     := LITERAL | RAWLIT | ENVREF | object | array
/// arrayElem := RAWLIT | ENVREF | LITERAL fieldRHS? | object | array
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    next: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser {
            lexer,
            // replaced by the first real token when parsing starts
            next: Token::eof(0),
            depth: 0,
        }
    }

    /// Parse the whole input into a forest of root generators.
    pub fn parse(mut self) -> Result<Forest, ParseError> {
        let input = self.lexer.input();
        match self.parse_forest() {
            Ok(forest) => {
                tracing::debug!(roots = forest.len(), "parsed expression");
                Ok(forest)
            }
            Err(failure) => Err(ParseError {
                input: input.to_string(),
                position: failure.position,
                kind: failure.kind,
            }),
        }
    }

    fn parse_forest(&mut self) -> Result<Forest, Failure> {
        self.advance()?;
        let forest = self.start()?;

        let token = self.advance()?;
        if !token.is(TokenKind::Eof) {
            return Err(Failure::unexpected(&token));
        }
        Ok(forest)
    }

    fn advance(&mut self) -> Result<Token, Failure> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.next, next))
    }

    fn peek(&self, kind: TokenKind) -> bool {
        self.next.is(kind)
    }

    fn found(&mut self, kind: TokenKind) -> Result<Option<Token>, Failure> {
        if self.peek(kind) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, Failure> {
        match self.found(expected)? {
            Some(token) => Ok(token),
            None => Err(Failure::new(
                self.next.position,
                ErrorKind::Expected {
                    expected,
                    found: self.next.kind,
                },
            )),
        }
    }

    /// Run `production` one nesting level down. `position` is where the
    /// nested construct opens.
    fn nested<T>(
        &mut self,
        position: usize,
        production: impl FnOnce(&mut Self) -> Result<T, Failure>,
    ) -> Result<T, Failure> {
        if self.depth >= MAX_DEPTH {
            return Err(Failure::new(position, ErrorKind::TooDeep));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    fn start(&mut self) -> Result<Forest, Failure> {
        if self.peek(TokenKind::ObjectOpen) || self.peek(TokenKind::ArrayOpen) {
            let mut forest = Forest::new();
            loop {
                if let Some(open) = self.found(TokenKind::ObjectOpen)? {
                    forest.push(self.nested(open.position, Self::object)?);
                } else if let Some(open) = self.found(TokenKind::ArrayOpen)? {
                    forest.push(self.nested(open.position, Self::array)?);
                } else {
                    return Ok(forest);
                }
            }
        }

        // no brackets: the fields form one implicit root object
        Ok(vec![self.fields()?.into()])
    }

    fn fields(&mut self) -> Result<Object, Failure> {
        let mut object = Object::new();
        while let Some(name) = self.found(TokenKind::Literal)? {
            let child = self.field()?;
            object.insert(name.text, child);
        }
        Ok(object)
    }

    fn object(&mut self) -> Result<Generator, Failure> {
        let object = self.fields()?;
        if self.peek(TokenKind::Eof) {
            return Err(Failure::new(self.next.position, ErrorKind::UnclosedObject));
        }
        self.expect(TokenKind::ObjectClose)?;
        Ok(object.into())
    }

    fn array(&mut self) -> Result<Generator, Failure> {
        let mut array = Array::new();
        loop {
            let token = self.advance()?;
            let element = match token.kind {
                TokenKind::EnvRef => Generator::Scalar(resolve_env(&token.text)),
                TokenKind::RawLiteral => raw(&token)?,
                TokenKind::Literal => {
                    if self.peek(TokenKind::Assign) || self.peek(TokenKind::Dot) {
                        // `[x=1]` is sugar for `[{x=1}]`
                        let child = self.field()?;
                        Object::with_field(token.text, child).into()
                    } else {
                        Generator::scalar(token.text)
                    }
                }
                TokenKind::ObjectOpen => self.nested(token.position, Self::object)?,
                TokenKind::ArrayOpen => self.nested(token.position, Self::array)?,
                TokenKind::ArrayClose => return Ok(array.into()),
                TokenKind::Eof => {
                    return Err(Failure::new(token.position, ErrorKind::UnclosedArray));
                }
                _ => return Err(Failure::unexpected(&token)),
            };
            array.push(element);
        }
    }

    /// The right-hand side of a field, after its name.
    ///
    /// A dotted path nests one single-field object per segment, innermost
    /// first; the caller merges the result into its own object.
    fn field(&mut self) -> Result<Generator, Failure> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Assign => self.value(),
            TokenKind::Dot => self.nested(token.position, |parser| {
                let name = parser.expect(TokenKind::Literal)?;
                let child = parser.field()?;
                Ok(Generator::from(Object::with_field(name.text, child)))
            }),
            _ => Err(Failure::unexpected(&token)),
        }
    }

    fn value(&mut self) -> Result<Generator, Failure> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Literal => Ok(Generator::scalar(token.text)),
            TokenKind::EnvRef => Ok(Generator::Scalar(resolve_env(&token.text))),
            TokenKind::RawLiteral => raw(&token),
            TokenKind::ObjectOpen => self.nested(token.position, Self::object),
            TokenKind::ArrayOpen => self.nested(token.position, Self::array),
            _ => Err(Failure::unexpected(&token)),
        }
    }
}

fn raw(token: &Token) -> Result<Generator, Failure> {
    resolve_raw(&token.text)
        .map(Generator::Scalar)
        .map_err(|e| Failure::new(token.position, e))
}

/// Parse an expression string.
///
/// # Examples
///
/// ```
/// use clon::{Value, parse_str};
///
/// let forest = parse_str("a.b=1 a.c=:2").unwrap();
/// assert_eq!(forest.len(), 1);
///
/// let value = forest[0].produce();
/// let a = value.get("a").unwrap();
/// assert_eq!(a.get("b"), Some(&Value::String("1".into())));
/// assert_eq!(a.get("c"), Some(&Value::Integer(2)));
/// ```
pub fn parse_str(input: &str) -> Result<Forest, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}
