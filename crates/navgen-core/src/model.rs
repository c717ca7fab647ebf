/// Classified parameter model
///
/// A screen parameter is either a navigation handle (passed through, never
/// part of the route) or one of three routable primitives.

use std::fmt;

/// Wire representation of a routable argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavType {
    StringType,
    IntType,
    BoolType,
}

impl NavType {
    /// Variant name as spelled by the navigation framework (`NavType.IntType`).
    pub fn as_str(&self) -> &'static str {
        match self {
            NavType::StringType => "StringType",
            NavType::IntType => "IntType",
            NavType::BoolType => "BoolType",
        }
    }
}

impl fmt::Display for NavType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavType::StringType => "String",
            NavType::IntType => "Int",
            NavType::BoolType => "Boolean",
        };
        f.write_str(name)
    }
}

/// A static default value taken from a default annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    String(String),
    Int(i32),
    Bool(bool),
}

impl Literal {
    pub fn nav_type(&self) -> NavType {
        match self {
            Literal::String(_) => NavType::StringType,
            Literal::Int(_) => NavType::IntType,
            Literal::Bool(_) => NavType::BoolType,
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

/// Semantic role of a parameter.
///
/// The set is closed: every consumer matches it exhaustively. Only
/// [`ArgumentKind::StringArg`] can be nullable; integers and booleans have no
/// "absent" encoding in a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentKind {
    NavigationHandle,
    StringArg {
        nullable: bool,
        default: Option<String>,
    },
    IntArg {
        default: Option<i32>,
    },
    BoolArg {
        default: Option<bool>,
    },
}

impl ArgumentKind {
    /// `None` for navigation handles.
    pub fn nav_type(&self) -> Option<NavType> {
        match self {
            ArgumentKind::NavigationHandle => None,
            ArgumentKind::StringArg { .. } => Some(NavType::StringType),
            ArgumentKind::IntArg { .. } => Some(NavType::IntType),
            ArgumentKind::BoolArg { .. } => Some(NavType::BoolType),
        }
    }

    pub fn is_routable(&self) -> bool {
        !matches!(self, ArgumentKind::NavigationHandle)
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, ArgumentKind::StringArg { nullable: true, .. })
    }

    pub fn default_literal(&self) -> Option<Literal> {
        match self {
            ArgumentKind::NavigationHandle => None,
            ArgumentKind::StringArg { default, .. } => default.clone().map(Literal::String),
            ArgumentKind::IntArg { default } => default.map(Literal::Int),
            ArgumentKind::BoolArg { default } => default.map(Literal::Bool),
        }
    }

    /// Routable and either nullable or defaulted: encoded as a query parameter.
    pub fn is_optional(&self) -> bool {
        self.is_routable() && (self.is_nullable() || self.default_literal().is_some())
    }

    /// Routable with no absent state and no default: encoded as a path segment.
    pub fn is_required(&self) -> bool {
        self.is_routable() && !self.is_optional()
    }
}

/// One classified function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ArgumentKind,
    /// Declared type text, only used to spell trigger parameter types
    pub source_type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ArgumentKind, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            source_type: source_type.into(),
        }
    }

    pub fn nullable(&self) -> bool {
        self.kind.is_nullable()
    }

    pub fn default_literal(&self) -> Option<Literal> {
        self.kind.default_literal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_partitions() {
        let required = ArgumentKind::StringArg { nullable: false, default: None };
        let nullable = ArgumentKind::StringArg { nullable: true, default: None };
        let defaulted = ArgumentKind::StringArg { nullable: false, default: Some("yes".into()) };

        assert!(required.is_required());
        assert!(nullable.is_optional());
        assert!(defaulted.is_optional());
        assert_eq!(defaulted.default_literal(), Some(Literal::String("yes".into())));
    }

    #[test]
    fn test_handle_is_neither_required_nor_optional() {
        let handle = ArgumentKind::NavigationHandle;
        assert!(!handle.is_routable());
        assert!(!handle.is_required());
        assert!(!handle.is_optional());
        assert_eq!(handle.nav_type(), None);
    }

    #[test]
    fn test_int_and_bool_defaults() {
        let int = ArgumentKind::IntArg { default: Some(3) };
        let flag = ArgumentKind::BoolArg { default: None };

        assert_eq!(int.default_literal(), Some(Literal::Int(3)));
        assert!(int.is_optional());
        assert!(flag.is_required());
        assert!(!flag.is_nullable());
    }
}
