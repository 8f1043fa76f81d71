//! Interned labels for named subdiagrams.
//!
//! A [`Name`] identifies a subdiagram for geometric lookup only. It carries
//! no ownership and no back-reference to the node it labels; comparing two
//! names is a symbol comparison rather than a string comparison.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner shared by every [`Name`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    // The interner is append-only, so a poisoned lock still holds consistent data.
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// A user-supplied subdiagram label.
///
/// # Examples
///
/// ```
/// use tessera_core::name::Name;
///
/// let a = Name::new("A");
/// let again: Name = "A".into();
/// assert_eq!(a, again);
/// assert_eq!(a, "A");
/// assert_eq!(a.to_string(), "A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(DefaultSymbol);

impl Name {
    /// Interns `label` and returns its name.
    pub fn new(label: &str) -> Self {
        Self(interner().get_or_intern(label))
    }

    /// Looks up `label` without interning it.
    ///
    /// Returns `None` when no name with this label was ever created, which
    /// means no diagram can contain it.
    pub fn lookup(label: &str) -> Option<Self> {
        interner().get(label).map(Self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        f.write_str(interner.resolve(self.0).unwrap_or_default())
    }
}

impl From<&str> for Name {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Name {
    fn from(label: String) -> Self {
        Self::new(&label)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Anything a named subdiagram can be looked up by.
///
/// Resolving a label never interns it, so querying labels that no diagram
/// uses does not grow the interner.
pub trait Label: fmt::Display {
    /// The interned name for this label, if one was ever created.
    fn resolve(&self) -> Option<Name>;
}

impl Label for Name {
    fn resolve(&self) -> Option<Name> {
        Some(*self)
    }
}

impl Label for str {
    fn resolve(&self) -> Option<Name> {
        Name::lookup(self)
    }
}

impl Label for String {
    fn resolve(&self) -> Option<Name> {
        Name::lookup(self)
    }
}

impl<T: Label + ?Sized> Label for &T {
    fn resolve(&self) -> Option<Name> {
        (**self).resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_label_same_name() {
        assert_eq!(Name::new("node"), Name::new("node"));
        assert_ne!(Name::new("node"), Name::new("other"));
    }

    #[test]
    fn test_display_roundtrip() {
        let name = Name::new("circle::left");
        assert_eq!(name.to_string(), "circle::left");
    }

    #[test]
    fn test_compare_with_str() {
        let name = Name::new("A");
        assert!(name == "A");
        assert!(name != "B");
    }

    #[test]
    fn test_lookup_does_not_intern() {
        assert!(Name::lookup("name-lookup-never-created").is_none());
        let created = Name::new("name-lookup-created");
        assert_eq!(Name::lookup("name-lookup-created"), Some(created));
    }

    #[test]
    fn test_label_resolves_without_interning() {
        assert!("label-resolve-never-created".resolve().is_none());
        assert!(Name::lookup("label-resolve-never-created").is_none());

        let created = Name::new("label-resolve-created");
        assert_eq!("label-resolve-created".resolve(), Some(created));
        assert_eq!(String::from("label-resolve-created").resolve(), Some(created));
        assert_eq!(created.resolve(), Some(created));
    }

    #[test]
    fn test_from_string() {
        let name: Name = String::from("owned").into();
        assert_eq!(name, "owned");
    }
}
