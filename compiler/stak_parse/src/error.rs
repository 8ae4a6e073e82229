//! Loader error types.
//!
//! [`ParseError`] covers lexing and parsing; [`LoadError`] adds the
//! initial-state requirement checked after a successful parse.

use stak_diagnostic::{Diagnostic, ErrorCode};
use stak_ir::{InitialStateError, InternError, Span};

use crate::TokenKind;

/// What went wrong while lexing or parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("variable marker `$` is not followed by a name")]
    UnnamedVariable,
    #[error("source is too large to address with 32-bit offsets")]
    SourceTooLarge,
    #[error(transparent)]
    Intern(#[from] InternError),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    #[error("expected a stack name after `:`, found {found}")]
    ExpectedStackName { found: TokenKind },
    #[error("stack name is not closed by `:`, found {found}")]
    UnterminatedStackName { found: TokenKind },
    #[error("keep marker `?` on a right-hand-side item")]
    KeepOnRhs,
}

impl ParseErrorKind {
    /// Error code for diagnostics.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnnamedVariable => ErrorCode::E0001,
            ParseErrorKind::SourceTooLarge | ParseErrorKind::Intern(_) => ErrorCode::E0002,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedStackName { .. } => ErrorCode::E1002,
            ParseErrorKind::UnterminatedStackName { .. } => ErrorCode::E1003,
            ParseErrorKind::KeepOnRhs => ErrorCode::E1004,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParseErrorKind::UnnamedVariable => "variable needs a name",
            ParseErrorKind::SourceTooLarge | ParseErrorKind::Intern(_) => "limit reached here",
            ParseErrorKind::UnexpectedToken { .. } => "unexpected token",
            ParseErrorKind::ExpectedStackName { .. } => "expected a stack name",
            ParseErrorKind::UnterminatedStackName { .. } => "expected `:`",
            ParseErrorKind::KeepOnRhs => "not allowed here",
        }
    }
}

/// A lexing or parsing failure at a source location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.label());

        match self.kind {
            ParseErrorKind::UnnamedVariable => {
                diag.with_suggestion("name the variable, for example `$0`")
            }
            ParseErrorKind::UnterminatedStackName { .. } => {
                diag.with_note("a pattern item is written `:stack: items...`")
            }
            ParseErrorKind::KeepOnRhs => diag
                .with_note("right-hand-side items only push tuples")
                .with_suggestion("remove the `?`"),
            _ => diag,
        }
    }
}

/// Failure to load a program.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program does not have exactly one initial-state rule.
    #[error("{error}")]
    InitialState {
        error: InitialStateError,
        /// Spans of the offending rules; empty when none exist.
        spans: Vec<Span>,
    },
}
