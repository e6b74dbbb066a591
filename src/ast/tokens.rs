use std::fmt;

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word or double-quoted string
    ///
    /// Always taken as a string; never coerced.
    ///
    /// # Examples
    /// ```text
    /// name
    /// 42
    /// "a value with spaces"
    /// "dotted.key"
    /// ```
    Literal,

    /// Typed literal, prefixed with `:`
    ///
    /// The token text excludes the prefix and is resolved later to a
    /// boolean, null, integer or float.
    ///
    /// # Examples
    /// ```text
    /// :42
    /// :3.14
    /// :true
    /// :null
    /// ```
    RawLiteral,

    /// Environment variable reference, prefixed with `^`
    ///
    /// # Examples
    /// ```text
    /// ^HOME
    /// ^API_VERSION
    /// ```
    EnvRef,

    /// `=`
    Assign,

    /// `.` separating the segments of a field path
    Dot,

    /// `{`
    ObjectOpen,

    /// `}`
    ObjectClose,

    /// `[`
    ArrayOpen,

    /// `]`
    ArrayClose,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Literal => "literal",
            TokenKind::RawLiteral => "raw literal",
            TokenKind::EnvRef => "environment reference",
            TokenKind::Assign => "'='",
            TokenKind::Dot => "'.'",
            TokenKind::ObjectOpen => "'{'",
            TokenKind::ObjectClose => "'}'",
            TokenKind::ArrayOpen => "'['",
            TokenKind::ArrayClose => "']'",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// A classified slice of the input.
///
/// `position` is the byte offset at which the token was matched. For
/// prefixed and quoted tokens it points at the prefix or opening quote, while
/// `text` holds only the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn eof(position: usize) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
