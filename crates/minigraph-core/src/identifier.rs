//! Node identifiers backed by a global string interner.
//!
//! Every occurrence of a node name anywhere in a document refers to the same
//! graph node, so names are interned once and compared as symbols afterwards.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for node names.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> std::sync::MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned node name.
///
/// Two `Id`s are equal exactly when the names they were created from are
/// equal, which makes `Id` a cheap `Copy` key for node and edge maps.
///
/// # Examples
///
/// ```
/// use minigraph_core::identifier::Id;
///
/// let parent = Id::new("parent");
/// assert_eq!(parent, Id::new("parent"));
/// assert_eq!(parent, "parent");
/// assert_eq!(parent.to_string(), "parent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a node name, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the node name as an owned string.
    ///
    /// Symbols are never removed from the interner, so resolution always
    /// succeeds for an `Id` produced by [`Id::new`].
    pub fn name(&self) -> String {
        interner()
            .resolve(self.0)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let name = interner.resolve(self.0).unwrap_or_default();
        f.write_str(name)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "name"`
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
