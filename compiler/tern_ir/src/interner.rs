//! String interner for identifier storage.
//!
//! Identifiers are interned once by the lexer and carried as [`Name`]
//! handles everywhere else, so comparing two names is a `u32` compare.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;

/// Interned identifier handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Name(u32);

impl Name {
    /// The pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Raw index into the interner.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

struct InternTable {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// String interner.
///
/// Interior mutability lets the lexer and the parser share one interner
/// through `&StringInterner`.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Name(index);
            }
        }

        let mut guard = self.table.write();
        if let Some(&index) = guard.map.get(s) {
            return Name(index);
        }

        // Interned strings live for the rest of the process.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let index = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded u32::MAX strings"));
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Name(index)
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.table.read();
        guard.strings.get(name.index()).copied().unwrap_or("")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
