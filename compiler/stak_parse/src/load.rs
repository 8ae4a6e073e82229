//! Loading: parse, then extract the initial state.

use stak_ir::{InitialStateError, Program, Span, VarId};

use crate::{parse, LoadError};

/// Where a variable of a rule was first written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableSource {
    /// Name as written, without the `$`.
    pub name: String,
    /// Span of the first occurrence.
    pub span: Span,
}

/// Source location of one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSource {
    /// The whole rule.
    pub span: Span,
    /// From the opening `|` through the `|` closing the left-hand side.
    pub lhs_span: Span,
    /// Indexed by [`VarId`].
    pub variables: Vec<VariableSource>,
}

impl RuleSource {
    pub fn variable(&self, var: VarId) -> Option<&VariableSource> {
        self.variables.get(var.index())
    }
}

/// A parsed program; `rules[i]` locates `program.rules()[i]`.
#[derive(Clone, Debug)]
pub struct Parsed {
    pub program: Program,
    pub rules: Vec<RuleSource>,
}

/// A loaded program with its initial state extracted.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub program: Program,
    /// Parallel to `program.rules()`.
    pub rules: Vec<RuleSource>,
    /// The rule the initial state came from.
    pub initial: RuleSource,
}

/// Load a program: parse it, then require exactly one `|:0:| ...` rule and
/// move its right-hand side into the program's initial state.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn load(source: &str) -> Result<Loaded, LoadError> {
    let Parsed {
        mut program,
        mut rules,
    } = parse(source)?;

    let index = match program.extract_initial_state() {
        Ok(index) => index,
        Err(error) => {
            let spans = match &error {
                InitialStateError::Missing => Vec::new(),
                InitialStateError::Duplicate { rules: indices } => indices
                    .iter()
                    .filter_map(|&i| rules.get(i))
                    .map(|rule| rule.span)
                    .collect(),
            };
            tracing::debug!(%error, "initial state extraction failed");
            return Err(LoadError::InitialState { error, spans });
        }
    };
    let initial = rules.remove(index);

    debug_assert_eq!(program.verify_handles(), Ok(()));
    tracing::debug!(
        rules = program.rules().len(),
        initial_items = program.initial_state().len(),
        "extracted initial state"
    );

    Ok(Loaded {
        program,
        rules,
        initial,
    })
}

#[cfg(test)]
mod tests;
