//! Lightweight handles into the registries.
//!
//! Every handle is an index into an arena owned by one registry instance;
//! ids are minted in increasing order and never reused.

use std::fmt;

macro_rules! define_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub fn as_u32(self) -> u32 {
                self.0
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl crate::store::StoreId for $name {
            fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_id!(
    /// Handle to a symbol (canonical or stub) in a `SymbolRegistry`.
    SymbolId
);
define_id!(
    /// Handle to an output file in a `FileRegistry`.
    FileId
);
define_id!(
    /// Handle to a syntax node in a `NodeRegistry`.
    NodeId
);
define_id!(
    /// Handle to a lexical scope inside one `ScopeTree`.
    ScopeId
);
