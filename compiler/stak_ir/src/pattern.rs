//! Pattern items: a tuple bound to the stack it reads from or writes to.

use crate::ids::StackId;
use crate::traits::StackPattern;
use crate::tuple::Tuple;

/// Left-hand-side pattern item.
///
/// When `keep` is set a successful match peeks at the tuple instead of
/// consuming it from its stack.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LhsPattern {
    pub stack: StackId,
    pub tuple: Tuple,
    pub keep: bool,
}

impl LhsPattern {
    pub fn new(stack: StackId, tuple: Tuple, keep: bool) -> Self {
        LhsPattern { stack, tuple, keep }
    }

    /// A consuming pattern (`keep` unset).
    pub fn consume(stack: StackId, tuple: Tuple) -> Self {
        Self::new(stack, tuple, false)
    }

    /// A non-destructive pattern (`keep` set).
    pub fn peek(stack: StackId, tuple: Tuple) -> Self {
        Self::new(stack, tuple, true)
    }
}

/// Right-hand-side pattern item: a tuple pushed onto `stack`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct RhsPattern {
    pub stack: StackId,
    pub tuple: Tuple,
}

impl RhsPattern {
    pub fn new(stack: StackId, tuple: Tuple) -> Self {
        RhsPattern { stack, tuple }
    }
}

impl StackPattern for LhsPattern {
    #[inline]
    fn stack(&self) -> StackId {
        self.stack
    }

    #[inline]
    fn tuple(&self) -> &Tuple {
        &self.tuple
    }
}

impl StackPattern for RhsPattern {
    #[inline]
    fn stack(&self) -> StackId {
        self.stack
    }

    #[inline]
    fn tuple(&self) -> &Tuple {
        &self.tuple
    }
}
