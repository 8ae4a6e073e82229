//! Tuple items and tuples.
//!
//! A tuple is the unit matched against, or written to, one stack. Its shape
//! is positional: `a b` and `a b c` never match each other.

use smallvec::SmallVec;

use crate::ids::{Symbol, VarId};

/// One position of a tuple.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TupleItem {
    /// An interned literal token.
    Literal(Symbol),
    /// A rule-local pattern variable.
    Variable(VarId),
}

impl TupleItem {
    #[inline]
    pub fn as_variable(self) -> Option<VarId> {
        match self {
            TupleItem::Variable(var) => Some(var),
            TupleItem::Literal(_) => None,
        }
    }
}

/// Ordered sequence of tuple items.
///
/// Most tuples in practice hold a handful of items, so storage is inline
/// up to four before spilling to the heap.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple {
    items: SmallVec<[TupleItem; 4]>,
}

impl Tuple {
    /// The empty tuple.
    pub fn new() -> Self {
        Tuple {
            items: SmallVec::new(),
        }
    }

    pub fn push(&mut self, item: TupleItem) {
        self.items.push(item);
    }

    /// Number of positions (the tuple's arity).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[TupleItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TupleItem> {
        self.items.iter()
    }

    /// Variables in positional order, repeats included.
    pub fn variables(&self) -> impl Iterator<Item = VarId> + '_ {
        self.items.iter().filter_map(|item| item.as_variable())
    }

    /// Highest variable index in this tuple, if it has any variable.
    pub fn max_variable(&self) -> Option<VarId> {
        self.variables().max()
    }
}

impl FromIterator<TupleItem> for Tuple {
    fn from_iter<I: IntoIterator<Item = TupleItem>>(iter: I) -> Self {
        Tuple {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a TupleItem;
    type IntoIter = std::slice::Iter<'a, TupleItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TupleItem;
    crate::static_assert_size!(TupleItem, 8);
}
