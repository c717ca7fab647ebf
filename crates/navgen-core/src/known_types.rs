/// Well-known type table
///
/// Built once per compilation pass and shared read-only by every declaration
/// classified in that pass.

use std::collections::HashMap;

/// The four type families the classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    NavigationHandle,
    String,
    Int,
    Bool,
}

#[derive(Debug, Clone, Default)]
pub struct KnownTypes {
    entries: HashMap<String, TypeClass>,
}

impl KnownTypes {
    /// Empty table; populate with [`KnownTypes::with`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers spellings that resolve to `class`.
    pub fn with<I, S>(mut self, class: TypeClass, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.entries.insert(normalize(name.as_ref()), class);
        }
        self
    }

    /// Types of the Rust `navgen` runtime as written in function signatures.
    pub fn rust() -> Self {
        Self::new()
            .with(
                TypeClass::NavigationHandle,
                ["NavController", "navgen::NavController"],
            )
            .with(
                TypeClass::String,
                ["String", "std::string::String", "alloc::string::String"],
            )
            .with(TypeClass::Int, ["i32", "std::primitive::i32", "core::primitive::i32"])
            .with(
                TypeClass::Bool,
                ["bool", "std::primitive::bool", "core::primitive::bool"],
            )
    }

    /// Types of a Compose Navigation application, simple or fully qualified.
    pub fn kotlin() -> Self {
        Self::new()
            .with(
                TypeClass::NavigationHandle,
                ["NavController", "androidx.navigation.NavController"],
            )
            .with(TypeClass::String, ["String", "kotlin.String"])
            .with(TypeClass::Int, ["Int", "kotlin.Int"])
            .with(TypeClass::Bool, ["Boolean", "kotlin.Boolean"])
    }

    /// Resolves an underlying (non-nullable) type path.
    pub fn resolve(&self, path: &str) -> Option<TypeClass> {
        self.entries.get(&normalize(path)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drops whitespace and a leading `::` so `:: std :: string :: String` and
/// `std::string::String` compare equal.
fn normalize(path: &str) -> String {
    let compact: String = path.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(rest) = compact.strip_prefix("::") {
        return rest.to_string();
    }
    compact
}
