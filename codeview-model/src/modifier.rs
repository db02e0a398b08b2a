//! Declaration modifiers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A declaration modifier.
///
/// Variants are declared in canonical order, so sorting a set of modifiers
/// yields the conventional source order (`public static final`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// Get the keyword for this modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }

    /// Check if this is an access modifier.
    pub fn is_access(&self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Protected | Modifier::Private
        )
    }
}

/// An ordered set of modifiers.
///
/// At most one access modifier is kept: inserting `private` replaces a
/// previous `public`. Deserialization goes through the same rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Modifier>", into = "Vec<Modifier>")]
pub struct Modifiers(BTreeSet<Modifier>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a modifier.
    pub fn insert(&mut self, modifier: Modifier) {
        if modifier.is_access() {
            self.0.retain(|m| !m.is_access());
        }
        self.0.insert(modifier);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.insert(modifier);
        self
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut modifiers = Self::new();
        for modifier in iter {
            modifiers.insert(modifier);
        }
        modifiers
    }
}

impl From<Vec<Modifier>> for Modifiers {
    fn from(modifiers: Vec<Modifier>) -> Self {
        modifiers.into_iter().collect()
    }
}

impl From<Modifiers> for Vec<Modifier> {
    fn from(modifiers: Modifiers) -> Self {
        modifiers.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let modifiers: Modifiers = [Modifier::Final, Modifier::Static, Modifier::Public]
            .into_iter()
            .collect();
        let words: Vec<_> = modifiers.iter().map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["public", "static", "final"]);
    }

    #[test]
    fn test_single_access_modifier() {
        let modifiers = Modifiers::new()
            .with(Modifier::Public)
            .with(Modifier::Static)
            .with(Modifier::Private);
        assert!(modifiers.contains(Modifier::Private));
        assert!(!modifiers.contains(Modifier::Public));
        assert!(modifiers.contains(Modifier::Static));
    }

    #[test]
    fn test_deserialize_keeps_single_access_modifier() {
        #[derive(Deserialize)]
        struct Decl {
            modifiers: Modifiers,
        }

        let decl: Decl =
            toml::from_str(r#"modifiers = ["public", "static", "private"]"#).unwrap();
        let words: Vec<_> = decl.modifiers.iter().map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["private", "static"]);
    }
}
