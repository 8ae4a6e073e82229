//! Test-only program builder.
//!
//! Items are written as whitespace-separated words; `$N` is variable `N`,
//! anything else is a literal interned in the program's literal table.

use crate::{LhsPattern, Program, RhsPattern, Rule, SymbolTable, Tuple, TupleItem, VarId};

pub(crate) struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    pub(crate) fn new() -> Self {
        ProgramBuilder {
            program: Program::new(SymbolTable::for_stacks(), SymbolTable::new()),
        }
    }

    pub(crate) fn tuple(&mut self, text: &str) -> Tuple {
        let mut tuple = Tuple::new();
        for word in text.split_whitespace() {
            let item = match word.strip_prefix('$') {
                Some(index) => match index.parse::<u32>() {
                    Ok(index) => TupleItem::Variable(VarId::new(index)),
                    Err(e) => panic!("bad variable `{word}` in test program: {e}"),
                },
                None => TupleItem::Literal(self.program.intern_symbol(word)),
            };
            tuple.push(item);
        }
        tuple
    }

    pub(crate) fn lhs(&mut self, stack: &str, tuple: &str) -> LhsPattern {
        let stack = self.program.intern_stack(stack);
        LhsPattern::consume(stack, self.tuple(tuple))
    }

    pub(crate) fn keep(&mut self, stack: &str, tuple: &str) -> LhsPattern {
        let stack = self.program.intern_stack(stack);
        LhsPattern::peek(stack, self.tuple(tuple))
    }

    pub(crate) fn rhs(&mut self, stack: &str, tuple: &str) -> RhsPattern {
        let stack = self.program.intern_stack(stack);
        RhsPattern::new(stack, self.tuple(tuple))
    }

    pub(crate) fn rule(&mut self, lhs: Vec<LhsPattern>, rhs: Vec<RhsPattern>) -> &mut Self {
        self.program.push_rule(Rule::new(lhs, rhs));
        self
    }

    pub(crate) fn program(&self) -> &Program {
        &self.program
    }

    pub(crate) fn finish(self) -> Program {
        self.program
    }
}
