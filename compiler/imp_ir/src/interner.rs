//! String interner for identifiers and operator symbols.
//!
//! Interning happens once per identifier occurrence in the lexer; everything
//! downstream (parser, environment, evaluator) works on `Name` values.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct Inner {
    /// Map from string content to its index in `strings`.
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Interner mapping strings to compact `Name` handles.
///
/// Interned strings are leaked, so lookups hand out `&'static str` without
/// holding the lock. An interner lives as long as the session that owns it,
/// and the set of distinct identifiers in a program is small.
pub struct StringInterner {
    inner: RwLock<Inner>,
}

impl StringInterner {
    /// Create a new interner with the builtin operator symbols pre-interned.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        let interner = StringInterner {
            inner: RwLock::new(Inner {
                map,
                strings: vec![empty],
            }),
        };
        interner.pre_intern_symbols();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&index) = self.inner.read().map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let mut guard = self.inner.write();
        // Double-check after acquiring the write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// Names are only produced by `intern`, so the index is always in range
    /// for the interner that produced it.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.inner.read();
        guard.strings.get(name.index()).copied().unwrap_or("<unknown>")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// True if only the empty string has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    fn pre_intern_symbols(&self) {
        const SYMBOLS: &[&str] = &[
            "+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "and", "or", "not",
        ];
        for symbol in SYMBOLS {
            self.intern(symbol);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

/// Reference-counted interner shared between a session and its tools.
#[derive(Clone, Default, Debug)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
