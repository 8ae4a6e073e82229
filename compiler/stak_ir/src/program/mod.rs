//! Whole programs: rules, initial state and the two symbol tables.
//!
//! A `Program` exclusively owns everything reachable from it. Handles
//! stored in its rules are only meaningful against its own tables.

mod queries;

use crate::ids::{StackId, Symbol};
use crate::interner::SymbolTable;
use crate::pattern::RhsPattern;
use crate::rule::Rule;

/// Error from [`Program::extract_initial_state`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitialStateError {
    /// No rule has the shape `|:0:| ...`.
    #[error("program has no initial-state rule")]
    Missing,
    /// More than one rule has the shape `|:0:| ...`.
    #[error("program has {} initial-state rules, expected exactly one", .rules.len())]
    Duplicate {
        /// Indices of every initial-state rule, ascending.
        rules: Vec<usize>,
    },
}

/// A loaded rewriting program.
#[derive(Clone, Debug)]
pub struct Program {
    rules: Vec<Rule>,
    initial_state: Vec<RhsPattern>,
    stacks: SymbolTable<StackId>,
    symbols: SymbolTable<Symbol>,
}

impl Program {
    /// An empty program over the given tables.
    pub fn new(stacks: SymbolTable<StackId>, symbols: SymbolTable<Symbol>) -> Self {
        Program {
            rules: Vec::new(),
            initial_state: Vec::new(),
            stacks,
            symbols,
        }
    }

    /// Assemble a program from fully built parts.
    pub fn from_parts(
        rules: Vec<Rule>,
        initial_state: Vec<RhsPattern>,
        stacks: SymbolTable<StackId>,
        symbols: SymbolTable<Symbol>,
    ) -> Self {
        Program {
            rules,
            initial_state,
            stacks,
            symbols,
        }
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn intern_stack(&mut self, name: &str) -> StackId {
        self.stacks.intern(name)
    }

    pub fn intern_symbol(&mut self, text: &str) -> Symbol {
        self.symbols.intern(text)
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn initial_state(&self) -> &[RhsPattern] {
        &self.initial_state
    }

    #[inline]
    pub fn stacks(&self) -> &SymbolTable<StackId> {
        &self.stacks
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable<Symbol> {
        &self.symbols
    }

    /// Pull the single initial-state rule out of the rule list.
    ///
    /// On success the rule is removed from [`rules`](Self::rules), its RHS
    /// replaces the program's initial state, and the removed rule's former
    /// index is returned. Zero or several initial-state rules leave the
    /// program untouched.
    pub fn extract_initial_state(&mut self) -> Result<usize, InitialStateError> {
        let initial: Vec<usize> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.is_initial())
            .map(|(index, _)| index)
            .collect();

        let index = match initial.as_slice() {
            [] => return Err(InitialStateError::Missing),
            [index] => *index,
            _ => return Err(InitialStateError::Duplicate { rules: initial }),
        };

        match self.rules.remove(index).into_initial_state() {
            Ok(state) => {
                self.initial_state = state;
                Ok(index)
            }
            Err(rule) => {
                self.rules.insert(index, rule);
                Err(InitialStateError::Missing)
            }
        }
    }
}
