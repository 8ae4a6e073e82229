//! Rewrite rules.

use crate::ids::{StackId, VarId};
use crate::pattern::{LhsPattern, RhsPattern};
use crate::traits::StackPattern;
use crate::tuple::Tuple;

/// One rewrite rule: what must be present (LHS) and what is produced (RHS).
///
/// The binding discipline (every RHS variable is bound on the LHS) is not
/// enforced here; see [`Rule::check`].
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub lhs: Vec<LhsPattern>,
    pub rhs: Vec<RhsPattern>,
}

impl Rule {
    pub fn new(lhs: Vec<LhsPattern>, rhs: Vec<RhsPattern>) -> Self {
        Rule { lhs, rhs }
    }

    /// Whether this is the initial-state rule `|:0:| ...`.
    ///
    /// True iff the LHS is exactly one item on [`StackId::INITIAL`] with an
    /// empty tuple. Such a rule matches nothing; its RHS is the program's
    /// starting stack contents.
    pub fn is_initial(&self) -> bool {
        match self.lhs.as_slice() {
            [only] => only.stack.is_initial() && only.tuple.is_empty(),
            _ => false,
        }
    }

    /// Consume an initial-state rule, yielding its RHS in original order.
    ///
    /// The LHS is dropped. A rule that is not initial is handed back
    /// unchanged as the error value.
    pub fn into_initial_state(self) -> Result<Vec<RhsPattern>, Rule> {
        if self.is_initial() {
            Ok(self.rhs)
        } else {
            Err(self)
        }
    }

    /// Highest variable index bound by the LHS, `None` if it binds nothing.
    pub fn max_lhs_variable(&self) -> Option<VarId> {
        self.lhs
            .iter()
            .filter_map(|pattern| pattern.tuple.max_variable())
            .max()
    }

    /// Every RHS variable occurrence, in textual order.
    pub fn rhs_variables(&self) -> impl Iterator<Item = VarId> + '_ {
        self.rhs.iter().flat_map(|pattern| pattern.tuple.variables())
    }

    /// Every `(stack, tuple)` this rule mentions, LHS first.
    pub fn patterns(&self) -> impl Iterator<Item = (StackId, &Tuple)> + '_ {
        let lhs = self.lhs.iter().map(|p| (p.stack(), p.tuple()));
        let rhs = self.rhs.iter().map(|p| (p.stack(), p.tuple()));
        lhs.chain(rhs)
    }
}
