//! Lexical declaration contexts.
//!
//! Every scope that can own bindings or closures gets a [`DeclContextId`]
//! in a [`DeclContextArena`]. Default-argument initializers are parsed
//! under a provisional context before their function exists; the parser
//! later reparents the provisional contexts that must survive.

use std::fmt;

/// Index of a context in a [`DeclContextArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DeclContextId(u32);

impl DeclContextId {
    /// The module context every arena starts with.
    pub const MODULE: DeclContextId = DeclContextId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for DeclContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclContextId({})", self.0)
    }
}

/// What kind of scope a context is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclContextKind {
    Module,
    Function,
    Closure,
    /// Initializer of the parameter at position `index`.
    DefaultArgument { index: u32 },
}

impl DeclContextKind {
    /// Contexts that can hold local bindings.
    pub const fn is_local(self) -> bool {
        !matches!(self, DeclContextKind::Module)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct DeclContextData {
    kind: DeclContextKind,
    parent: Option<DeclContextId>,
    live: bool,
}

/// Arena owning all declaration contexts of one parse session.
///
/// Destroying a context tombstones its slot; ids stay stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclContextArena {
    contexts: Vec<DeclContextData>,
}

impl DeclContextArena {
    /// Create an arena holding only the module context.
    pub fn new() -> Self {
        DeclContextArena {
            contexts: vec![DeclContextData {
                kind: DeclContextKind::Module,
                parent: None,
                live: true,
            }],
        }
    }

    /// Allocate a new context under `parent`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` contexts are allocated.
    pub fn alloc(&mut self, kind: DeclContextKind, parent: DeclContextId) -> DeclContextId {
        let id = u32::try_from(self.contexts.len())
            .unwrap_or_else(|_| panic!("declaration context arena exceeded u32::MAX entries"));
        self.contexts.push(DeclContextData {
            kind,
            parent: Some(parent),
            live: true,
        });
        DeclContextId(id)
    }

    /// Discard a context that nothing references any more.
    pub fn destroy(&mut self, id: DeclContextId) {
        if let Some(data) = self.contexts.get_mut(id.index()) {
            data.live = false;
        }
    }

    /// Move a context under a new parent.
    pub fn set_parent(&mut self, id: DeclContextId, parent: DeclContextId) {
        if let Some(data) = self.contexts.get_mut(id.index()) {
            data.parent = Some(parent);
        }
    }

    pub fn parent(&self, id: DeclContextId) -> Option<DeclContextId> {
        self.contexts.get(id.index()).and_then(|data| data.parent)
    }

    pub fn kind(&self, id: DeclContextId) -> Option<DeclContextKind> {
        self.contexts.get(id.index()).map(|data| data.kind)
    }

    pub fn is_live(&self, id: DeclContextId) -> bool {
        self.contexts.get(id.index()).is_some_and(|data| data.live)
    }

    /// Number of allocated slots, live or not.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Always false: the module context is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of contexts that have not been destroyed.
    pub fn live_count(&self) -> usize {
        self.contexts.iter().filter(|data| data.live).count()
    }
}

impl Default for DeclContextArena {
    fn default() -> Self {
        Self::new()
    }
}
