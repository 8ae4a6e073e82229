//! Tokens of the concrete syntax.

use std::fmt;

use stak_ir::Span;

/// Token kinds. Words and variables carry no payload; their text is the
/// token's span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `|`, opening and closing a rule's left-hand side.
    Bar,
    /// `:`, delimiting a stack name.
    Colon,
    /// `?`, the keep marker after a left-hand-side item.
    Question,
    /// `$name`
    Variable,
    /// Stack name or literal.
    Word,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Bar => "`|`",
            TokenKind::Colon => "`:`",
            TokenKind::Question => "`?`",
            TokenKind::Variable => "a variable",
            TokenKind::Word => "a word",
            TokenKind::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// A token with its location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Source text covered by this token.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

stak_ir::static_assert_size!(Token, 12);
