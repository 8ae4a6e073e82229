//! Compact 32-bit handles for stacks, literal symbols and rule variables.
//!
//! Stack names and literal tokens are interned in two separate
//! [`SymbolTable`](crate::SymbolTable)s; giving each table its own handle type
//! keeps a stack handle from ever being resolved against the literal table.

use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create from a raw index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Get the index as `usize`.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_handle!(
    /// Handle of an interned stack name.
    StackId
);

define_handle!(
    /// Handle of an interned literal token.
    Symbol
);

define_handle!(
    /// Rule-local binding slot.
    ///
    /// Indices are assigned by the loader in order of first occurrence,
    /// scanning a rule's left-hand side before its right-hand side.
    VarId
);

impl StackId {
    /// The reserved initial-state stack, spelled `0` in source.
    pub const INITIAL: StackId = StackId(0);

    #[inline]
    pub const fn is_initial(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{StackId, Symbol, VarId};
    crate::static_assert_size!(StackId, 4);
    crate::static_assert_size!(Symbol, 4);
    crate::static_assert_size!(VarId, 4);
}
