//! Derived static queries over a whole program.
//!
//! Each query is a fresh scan; nothing is cached between calls.

use super::Program;
use crate::ids::StackId;
use crate::rule::Rule;
use crate::traits::StackPattern;
use crate::tuple::Tuple;

impl Program {
    /// Number of distinct stack names, the reserved initial stack included.
    #[inline]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Largest tuple length used with `stack` anywhere in the program.
    ///
    /// Scans every LHS and RHS item of every rule plus the initial state.
    /// Returns 0 for a stack that never occurs.
    pub fn stack_arity(&self, stack: StackId) -> usize {
        self.patterns()
            .filter(|(s, _)| *s == stack)
            .map(|(_, tuple)| tuple.len())
            .max()
            .unwrap_or(0)
    }

    /// Arity of every stack, indexed by [`StackId::index`], in one pass.
    pub fn stack_arities(&self) -> Vec<usize> {
        let mut arities = vec![0; self.stack_count()];
        for (stack, tuple) in self.patterns() {
            if let Some(slot) = arities.get_mut(stack.index()) {
                *slot = (*slot).max(tuple.len());
            }
        }
        arities
    }

    /// Number of variable slots a runtime must provide.
    ///
    /// One more than the largest LHS variable index of any rule, or 0 when
    /// no rule binds a variable. RHS variables are not scanned: after a
    /// successful [`check`](Self::check) they never exceed their rule's LHS
    /// maximum.
    pub fn variable_count(&self) -> usize {
        self.rules
            .iter()
            .filter_map(Rule::max_lhs_variable)
            .max()
            .map_or(0, |var| var.index() + 1)
    }

    /// Every `(stack, tuple)` in the program: rules in order, then the
    /// initial state.
    pub(crate) fn patterns(&self) -> impl Iterator<Item = (StackId, &Tuple)> + '_ {
        self.rules.iter().flat_map(Rule::patterns).chain(
            self.initial_state
                .iter()
                .map(|pattern| (pattern.stack(), pattern.tuple())),
        )
    }
}
