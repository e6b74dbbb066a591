use thiserror::Error;

use crate::ast::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated string: missing closing quote")]
    UnterminatedString { position: usize },
}

impl LexError {
    /// Byte offset the error refers to.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnterminatedString { position } => *position,
        }
    }
}

fn is_structural(ch: char) -> bool {
    matches!(ch, '=' | '.' | '{' | '}' | '[' | ']')
}

/// Pull-based tokenizer. Each call to [`Lexer::next_token`] consumes one
/// token; once the input is exhausted every call returns an end-of-input
/// token.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            finished: false,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consume characters until `stop` matches or input runs out.
    fn read_while<F>(&mut self, stop: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() || stop(ch) {
                break;
            }
            self.advance();
        }
        let input = self.input;
        &input[start..self.position]
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.advance(); // opening quote

        let content_start = self.position;
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                let token = Token::new(
                    TokenKind::Literal,
                    &self.input[content_start..self.position],
                    start,
                );
                self.advance();
                return Ok(token);
            }
            self.advance();
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_prefixed(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance(); // prefix

        let text = match kind {
            // raw literals carry floats, so '.' stays inside the token
            TokenKind::RawLiteral => self.read_while(|c| is_structural(c) && c != '.'),
            _ => self.read_while(is_structural),
        };
        Token::new(kind, text, start)
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let end = self.position + 1;
        let token = Token::new(kind, &self.input[self.position..end], self.position);
        self.advance();
        token
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => Token::eof(self.input.len()),
            Some('=') => self.single(TokenKind::Assign),
            Some('.') => self.single(TokenKind::Dot),
            Some('{') => self.single(TokenKind::ObjectOpen),
            Some('}') => self.single(TokenKind::ObjectClose),
            Some('[') => self.single(TokenKind::ArrayOpen),
            Some(']') => self.single(TokenKind::ArrayClose),
            Some('"') => self.read_string()?,
            Some(':') => self.read_prefixed(TokenKind::RawLiteral),
            Some('^') => self.read_prefixed(TokenKind::EnvRef),
            Some(_) => {
                let start = self.position;
                let text = self.read_while(is_structural);
                Token::new(TokenKind::Literal, text, start)
            }
        };

        tracing::trace!(kind = ?token.kind, position = token.position, text = %token.text, "token");
        Ok(token)
    }
}

/// Yields every token up to and including the end-of-input token, or the
/// first lexical error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if token.is(TokenKind::Eof) => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

#[test]
fn test_structural() {
    let mut lexer = Lexer::new("a.b={c=[]}");
    let kinds: Vec<_> = std::iter::from_fn(|| {
        let token = lexer.next_token().unwrap();
        (!token.is(TokenKind::Eof)).then_some(token.kind)
    })
    .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Literal,
            TokenKind::Dot,
            TokenKind::Literal,
            TokenKind::Assign,
            TokenKind::ObjectOpen,
            TokenKind::Literal,
            TokenKind::Assign,
            TokenKind::ArrayOpen,
            TokenKind::ArrayClose,
            TokenKind::ObjectClose,
        ]
    );
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("  ");
    assert_eq!(lexer.next_token().unwrap(), Token::eof(2));
    assert_eq!(lexer.next_token().unwrap(), Token::eof(2));
}
