//! Lexer for Stak source.
//!
//! Whitespace separates tokens and is otherwise dropped; `#` starts a
//! comment running to the end of the line. A word is a maximal run of
//! characters that are neither whitespace nor one of `| : ? $ #`. A
//! variable is `$` followed by a word.

use stak_ir::Span;

use crate::{ParseError, ParseErrorKind, Token, TokenKind};

/// Whether `c` may appear in a word or a variable name.
#[inline]
pub fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '|' | ':' | '?' | '$' | '#')
}

/// Lex `source` into tokens. The last token is always [`TokenKind::Eof`].
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::new(ParseErrorKind::SourceTooLarge, Span::DUMMY));
    }

    let mut lexer = Lexer { source, pos: 0 };
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            break;
        }
    }

    tracing::trace!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

struct Lexer<'src> {
    source: &'src str,
    /// Byte offset, always on a char boundary.
    pos: usize,
}

impl Lexer<'_> {
    #[inline]
    fn peek(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    fn eat_word(&mut self) {
        while self.peek().is_some_and(is_word_char) {
            self.bump();
        }
    }

    fn span_from(&self, start: usize) -> Result<Span, ParseError> {
        Span::try_from_range(start..self.pos)
            .map_err(|_| ParseError::new(ParseErrorKind::SourceTooLarge, Span::DUMMY))
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_trivia();
        let start = self.pos;

        let kind = match self.bump() {
            None => TokenKind::Eof,
            Some('|') => TokenKind::Bar,
            Some(':') => TokenKind::Colon,
            Some('?') => TokenKind::Question,
            Some('$') => {
                if !self.peek().is_some_and(is_word_char) {
                    let span = self.span_from(start)?;
                    return Err(ParseError::new(ParseErrorKind::UnnamedVariable, span));
                }
                self.eat_word();
                TokenKind::Variable
            }
            Some(_) => {
                self.eat_word();
                TokenKind::Word
            }
        };

        Ok(Token::new(kind, self.span_from(start)?))
    }
}
