//! Shared traits for IR types.

use crate::ids::StackId;
use crate::tuple::Tuple;

/// Anything that pairs a stack with a tuple.
///
/// Lets whole-program scans treat left- and right-hand pattern items alike.
pub trait StackPattern {
    fn stack(&self) -> StackId;

    fn tuple(&self) -> &Tuple;
}
