//! Error codes for all Stak diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase. Used for `stak explain` lookups.

use std::fmt;

/// Error codes for all Stak diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Semantic errors (binding check, initial state)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// `$` not followed by a variable name
    E0001,
    /// Source exceeds the `u32` offset or handle space
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected a stack name
    E1002,
    /// Stack name not closed by `:`
    E1003,
    /// Keep marker `?` on a right-hand-side item
    E1004,

    // Semantic Errors (E2xxx)
    /// Right-hand side uses a variable the left-hand side does not bind
    E2001,
    /// No initial-state rule
    E2002,
    /// More than one initial-state rule
    E2003,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }

    /// One-line description, as listed by `stak explain` without a code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "variable marker `$` without a name",
            ErrorCode::E0002 => "source file too large",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected a stack name",
            ErrorCode::E1003 => "unterminated stack name",
            ErrorCode::E1004 => "keep marker on a right-hand-side item",
            ErrorCode::E2001 => "unbound variable",
            ErrorCode::E2002 => "missing initial-state rule",
            ErrorCode::E2003 => "duplicate initial-state rule",
        }
    }

    /// Long-form documentation, as printed by `stak explain`.
    pub fn explain(&self) -> Option<&'static str> {
        crate::ErrorDocs::get(*self)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
