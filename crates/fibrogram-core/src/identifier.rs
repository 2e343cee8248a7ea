//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.
//! Node labels double as identifiers in pathway diagrams, so the same handful
//! of strings is compared and hashed constantly during validation and rendering.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// This type provides efficient storage and comparison of string identifiers
/// through string interning.
///
/// # Examples
///
/// ```
/// use fibrogram_core::identifier::Id;
///
/// let a = Id::new("Inflammation");
/// let b = Id::new("Inflammation");
/// assert_eq!(a, b);
/// assert_eq!(a, "Inflammation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Resolves the identifier back to its string representation.
    pub fn resolve(&self) -> String {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Id should exist in interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.resolve() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_interning() {
        let a = Id::new("QPCTL");
        let b = Id::new("QPCTL");
        let c = Id::new("SIRPa");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_id_display_roundtrip() {
        let id = Id::new("Macrophages (M1)");
        assert_eq!(id.to_string(), "Macrophages (M1)");
        assert_eq!(id, "Macrophages (M1)");
    }

    #[test]
    fn test_id_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Id::new("ECM"), 1);
        map.insert(Id::new("Fibrosis"), 2);

        assert_eq!(map.get(&Id::new("ECM")), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
