//! Stak IR - static program representation for the Stak rewriting language
//!
//! A Stak program is a set of rewrite rules over named stacks. Each rule
//! reads patterned tuples from some stacks (its left-hand side) and pushes
//! newly built tuples onto stacks (its right-hand side). One distinguished
//! rule, `|:0:| ...`, declares the initial contents of every stack.
//!
//! This crate holds:
//! - Handles: `StackId`, `Symbol` (interned text) and `VarId` (rule-local slots)
//! - `SymbolTable`: the per-program interners
//! - `TupleItem`, `Tuple`, `LhsPattern`, `RhsPattern`, `Rule`, `Program`
//! - The binding check (`Program::check`) and the static queries
//!   (`stack_count`, `stack_arity`, `variable_count`)
//! - Initial-state extraction and the canonical text rendering
//!
//! Parsing lives in `stak_parse`; executing rules is out of scope.
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: stack names and literals become `u32` handles
//! - **Own Everything**: a `Program` owns its rules and tables outright;
//!   teardown is an ordinary drop
//! - **Consume to Extract**: pulling the initial state out of a rule moves
//!   the rule, so it cannot be used afterwards

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod check;
mod ids;
mod interner;
mod pattern;
mod program;
mod render;
mod rule;
mod span;
mod traits;
mod tuple;
mod verify;

#[cfg(test)]
mod testing;

pub use check::{CheckError, UnboundVariable};
pub use ids::{StackId, Symbol, VarId};
pub use interner::{InternError, InternKey, SymbolTable, INITIAL_STACK_NAME};
pub use pattern::{LhsPattern, RhsPattern};
pub use program::{InitialStateError, Program};
pub use render::Render;
pub use rule::Rule;
pub use span::{Span, SpanError};
pub use traits::StackPattern;
pub use tuple::{Tuple, TupleItem};
pub use verify::DanglingHandle;
