//! Referential integrity of a program's handles.
//!
//! Every stack and literal handle a program stores must have been issued by
//! that program's own tables. The loader guarantees this by construction;
//! this pass re-checks it so a hand-assembled program (or a loader bug) is
//! caught before rendering indexes a table out of bounds.

use crate::ids::{StackId, Symbol};
use crate::program::Program;
use crate::tuple::TupleItem;

/// A handle not issued by the owning program's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DanglingHandle {
    #[error("stack handle {0:?} was not issued by this program's stack table")]
    Stack(StackId),
    #[error("literal handle {0:?} was not issued by this program's literal table")]
    Symbol(Symbol),
}

impl Program {
    /// Check that every handle in the program resolves in its own tables.
    ///
    /// Reports the first dangling handle in program order (rules, then the
    /// initial state).
    pub fn verify_handles(&self) -> Result<(), DanglingHandle> {
        for (stack, tuple) in self.patterns() {
            if !self.stacks().contains(stack) {
                return Err(DanglingHandle::Stack(stack));
            }
            for item in tuple {
                if let TupleItem::Literal(sym) = *item {
                    if !self.symbols().contains(sym) {
                        return Err(DanglingHandle::Symbol(sym));
                    }
                }
            }
        }
        Ok(())
    }
}
