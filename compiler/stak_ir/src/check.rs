//! Well-formedness: every RHS variable must be bound by the same rule's LHS.
//!
//! Two entry points:
//! - [`Program::check`] fails fast on the first ill-formed rule and says
//!   nothing about which rule or variable failed. Callers that need a
//!   location re-scan with the collecting mode.
//! - [`Program::unbound_variables`] scans every rule and reports each
//!   offending variable with its rule index.
//!
//! The initial state came from a rule whose LHS binds nothing, so any
//! variable left in it is unbound. `check` rejects those too;
//! [`Program::unbound_initial_variables`] lists them.
//!
//! Variables are rule-local; no scoping crosses rule boundaries.

use crate::ids::VarId;
use crate::program::Program;
use crate::rule::Rule;

/// Error from the fail-fast check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// Some rule's RHS uses a variable its LHS does not bind.
    ///
    /// Carries no rule or variable identity.
    #[error("a rule's right-hand side uses a variable its left-hand side does not bind")]
    UnboundVariable,
}

/// One unbound variable found by [`Program::unbound_variables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnboundVariable {
    /// Index of the rule in [`Program::rules`].
    pub rule: usize,
    /// The offending RHS variable.
    pub variable: VarId,
    /// Highest variable the rule's LHS binds, `None` if it binds none.
    pub bound: Option<VarId>,
}

impl Rule {
    /// Fail-fast check of this rule's binding discipline.
    pub fn check(&self) -> Result<(), CheckError> {
        // `None` orders below every `Some`: an LHS without variables binds nothing.
        let bound = self.max_lhs_variable();
        if self.rhs_variables().any(|var| Some(var) > bound) {
            Err(CheckError::UnboundVariable)
        } else {
            Ok(())
        }
    }

    /// Distinct unbound RHS variables, in order of first occurrence.
    pub fn unbound_variables(&self) -> Vec<VarId> {
        let bound = self.max_lhs_variable();
        let mut unbound = Vec::new();
        for var in self.rhs_variables() {
            if Some(var) > bound && !unbound.contains(&var) {
                unbound.push(var);
            }
        }
        unbound
    }
}

impl Program {
    /// Fail-fast well-formedness check over every rule, then the initial
    /// state.
    pub fn check(&self) -> Result<(), CheckError> {
        self.rules().iter().try_for_each(Rule::check)?;
        if self.initial_variables().next().is_some() {
            return Err(CheckError::UnboundVariable);
        }
        Ok(())
    }

    /// Distinct variables in the initial state, in order of first occurrence.
    pub fn unbound_initial_variables(&self) -> Vec<VarId> {
        let mut unbound = Vec::new();
        for var in self.initial_variables() {
            if !unbound.contains(&var) {
                unbound.push(var);
            }
        }
        unbound
    }

    fn initial_variables(&self) -> impl Iterator<Item = VarId> + '_ {
        self.initial_state()
            .iter()
            .flat_map(|pattern| pattern.tuple.variables())
    }

    /// Every unbound variable of every rule, in rule order. The initial
    /// state is not a rule; see [`Program::unbound_initial_variables`].
    pub fn unbound_variables(&self) -> Vec<UnboundVariable> {
        self.rules()
            .iter()
            .enumerate()
            .flat_map(|(index, rule)| {
                let bound = rule.max_lhs_variable();
                rule.unbound_variables()
                    .into_iter()
                    .map(move |variable| UnboundVariable {
                        rule: index,
                        variable,
                        bound,
                    })
            })
            .collect()
    }
}
