//! Per-program string interner.
//!
//! A [`Program`](crate::Program) owns two independent tables: one for stack
//! names, one for literal tokens. Handles are dense indices in issue order,
//! so `len()` is also the number of distinct handles issued.

use rustc_hash::FxHashMap;

use crate::ids::{StackId, Symbol};

/// Text of the reserved initial-state stack.
pub const INITIAL_STACK_NAME: &str = "0";

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Table exceeded the `u32` handle space.
    #[error("symbol table exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow { count: usize },
}

/// Handle types a [`SymbolTable`] can issue.
pub trait InternKey: Copy {
    fn from_raw(raw: u32) -> Self;
    fn index(self) -> usize;
}

impl InternKey for StackId {
    #[inline]
    fn from_raw(raw: u32) -> Self {
        StackId::new(raw)
    }

    #[inline]
    fn index(self) -> usize {
        StackId::index(self)
    }
}

impl InternKey for Symbol {
    #[inline]
    fn from_raw(raw: u32) -> Self {
        Symbol::new(raw)
    }

    #[inline]
    fn index(self) -> usize {
        Symbol::index(self)
    }
}

/// String interner issuing handles of type `K`.
///
/// Interning is idempotent: the same text always yields the same handle
/// within one table. Storage is released when the table is dropped.
#[derive(Clone, Debug)]
pub struct SymbolTable<K> {
    /// Map from string content to its handle.
    map: FxHashMap<Box<str>, K>,
    /// Strings in issue order; a handle's index points here.
    strings: Vec<Box<str>>,
}

impl<K: InternKey> SymbolTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        SymbolTable {
            map: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    /// Try to intern a string, returning its handle or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<K, InternError> {
        if let Some(&key) = self.map.get(s) {
            return Ok(key);
        }

        let raw = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let key = K::from_raw(raw);
        let owned: Box<str> = s.into();
        self.strings.push(owned.clone());
        self.map.insert(owned, key);
        Ok(key)
    }

    /// Intern a string, returning its handle.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` entries.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&mut self, s: &str) -> K {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the handle of already-interned text without interning it.
    pub fn get(&self, s: &str) -> Option<K> {
        self.map.get(s).copied()
    }

    /// Look up the string for a handle.
    ///
    /// # Panics
    /// Panics if the handle was not issued by this table.
    pub fn lookup(&self, key: K) -> &str {
        &self.strings[key.index()]
    }

    /// Whether `key` was issued by this table.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        key.index() < self.strings.len()
    }

    /// Number of distinct handles issued so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate `(handle, text)` pairs in issue order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.strings.iter().enumerate().map(|(i, s)| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "try_intern never issues more than u32::MAX handles"
            )]
            let raw = i as u32;
            (K::from_raw(raw), s.as_ref())
        })
    }
}

impl SymbolTable<StackId> {
    /// Create a stack table with the reserved initial-state stack pre-interned
    /// at [`StackId::INITIAL`].
    pub fn for_stacks() -> Self {
        let mut table = Self::new();
        let initial = table.intern(INITIAL_STACK_NAME);
        debug_assert_eq!(initial, StackId::INITIAL);
        table
    }
}

impl<K: InternKey> Default for SymbolTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
