//! Canonical text rendering.
//!
//! The rendering is the language's concrete syntax, so it must stay
//! byte-stable:
//!
//! ```text
//! |:1: $0 a?| :2: $0 $0
//! |:0:| :1: a :2: b c
//! ```
//!
//! - a tuple item is its literal text or `$N`;
//! - a pattern item is `:stack:` followed by ` item` per tuple item, then
//!   `?` when an LHS item keeps its match;
//! - a rule is `|` LHS items `| ` RHS items, items space-joined;
//! - a program is one rule per line, then the initial state as a final
//!   `|:0:| ...` line. Every line ends with a newline.

use std::fmt;

use crate::ids::{StackId, Symbol};
use crate::interner::{SymbolTable, INITIAL_STACK_NAME};
use crate::pattern::{LhsPattern, RhsPattern};
use crate::program::Program;
use crate::rule::Rule;
use crate::tuple::{Tuple, TupleItem};

/// An IR value paired with the tables needed to spell its handles.
///
/// Created by [`Program::render`].
pub struct Render<'a, T: ?Sized> {
    item: &'a T,
    stacks: &'a SymbolTable<StackId>,
    symbols: &'a SymbolTable<Symbol>,
}

impl<T: ?Sized> Clone for Render<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Render<'_, T> {}

impl<'a, T: ?Sized> Render<'a, T> {
    fn with<U: ?Sized>(self, item: &'a U) -> Render<'a, U> {
        Render {
            item,
            stacks: self.stacks,
            symbols: self.symbols,
        }
    }
}

impl Program {
    /// Render any IR value of this program using the program's tables.
    pub fn render<'a, T: ?Sized>(&'a self, item: &'a T) -> Render<'a, T> {
        Render {
            item,
            stacks: self.stacks(),
            symbols: self.symbols(),
        }
    }
}

/// Write `items` separated by single spaces.
fn join<'a, T: 'a>(
    f: &mut fmt::Formatter<'_>,
    ctx: Render<'a, ()>,
    items: impl IntoIterator<Item = &'a T>,
) -> fmt::Result
where
    Render<'a, T>: fmt::Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", ctx.with(item))?;
    }
    Ok(())
}

impl fmt::Display for Render<'_, TupleItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.item {
            TupleItem::Literal(sym) => f.write_str(self.symbols.lookup(sym)),
            TupleItem::Variable(var) => write!(f, "{var}"),
        }
    }
}

impl fmt::Display for Render<'_, Tuple> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(f, self.with(&()), self.item.iter())
    }
}

/// `:stack:` then ` item` for each tuple item.
fn write_stack_tuple<'a>(
    f: &mut fmt::Formatter<'_>,
    ctx: Render<'a, ()>,
    stack: StackId,
    tuple: &'a Tuple,
) -> fmt::Result {
    write!(f, ":{}:", ctx.stacks.lookup(stack))?;
    for item in tuple {
        write!(f, " {}", ctx.with(item))?;
    }
    Ok(())
}

impl fmt::Display for Render<'_, LhsPattern> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stack_tuple(f, self.with(&()), self.item.stack, &self.item.tuple)?;
        if self.item.keep {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl fmt::Display for Render<'_, RhsPattern> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stack_tuple(f, self.with(&()), self.item.stack, &self.item.tuple)
    }
}

impl fmt::Display for Render<'_, Rule> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.with(&());
        f.write_str("|")?;
        join(f, ctx, &self.item.lhs)?;
        f.write_str("| ")?;
        join(f, ctx, &self.item.rhs)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.render(&());
        for rule in self.rules() {
            writeln!(f, "{}", ctx.with(rule))?;
        }
        write!(f, "|:{INITIAL_STACK_NAME}:| ")?;
        join(f, ctx, self.initial_state())?;
        writeln!(f)
    }
}
