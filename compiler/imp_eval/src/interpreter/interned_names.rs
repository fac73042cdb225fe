//! Names interned once at construction for hot-path comparisons.

use imp_ir::{Name, StringInterner};

/// Operators evaluated lazily instead of through the operator table.
#[derive(Clone, Copy)]
pub(crate) struct ShortCircuitNames {
    pub(crate) and: Name,
    pub(crate) or: Name,
}

impl ShortCircuitNames {
    pub(crate) fn new(interner: &StringInterner) -> Self {
        Self {
            and: interner.intern("and"),
            or: interner.intern("or"),
        }
    }

    #[inline]
    pub(crate) fn contains(self, name: Name) -> bool {
        name == self.and || name == self.or
    }
}
