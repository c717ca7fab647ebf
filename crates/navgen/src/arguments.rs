/// Route argument descriptors and the decoded argument bundle
///
/// A destination declares one [`NavArgument`] per routable parameter. When a
/// concrete route is resolved, raw text values are parsed against those
/// descriptors into a [`RouteArguments`] bundle handed to the screen.

use std::collections::HashMap;
use std::fmt;

/// Wire type of a route argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavType {
    StringType,
    IntType,
    BoolType,
}

impl NavType {
    /// Parses raw route text, `None` when it does not fit the type.
    ///
    /// ```
    /// use navgen::{ArgValue, NavType};
    ///
    /// assert_eq!(NavType::IntType.parse("42"), Some(ArgValue::Int(42)));
    /// assert_eq!(NavType::BoolType.parse("yes"), None);
    /// ```
    pub fn parse(&self, raw: &str) -> Option<ArgValue> {
        match self {
            NavType::StringType => Some(ArgValue::String(raw.to_string())),
            NavType::IntType => raw.parse().ok().map(ArgValue::Int),
            NavType::BoolType => match raw {
                "true" => Some(ArgValue::Bool(true)),
                "false" => Some(ArgValue::Bool(false)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for NavType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavType::StringType => "string",
            NavType::IntType => "integer",
            NavType::BoolType => "boolean",
        };
        f.write_str(name)
    }
}

/// A decoded argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    String(String),
    Int(i32),
    Bool(bool),
}

impl ArgValue {
    pub fn nav_type(&self) -> NavType {
        match self {
            ArgValue::String(_) => NavType::StringType,
            ArgValue::Int(_) => NavType::IntType,
            ArgValue::Bool(_) => NavType::BoolType,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(value) => f.write_str(value),
            ArgValue::Int(value) => write!(f, "{value}"),
            ArgValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

/// Describes one argument of a destination.
///
/// ```
/// use navgen::{NavArgument, NavType};
///
/// let arg = NavArgument::new("query", NavType::StringType)
///     .nullable(true)
///     .default_value("all");
///
/// assert!(arg.is_nullable());
/// assert_eq!(arg.default().map(|v| v.to_string()), Some("all".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavArgument {
    name: String,
    nav_type: NavType,
    nullable: bool,
    default: Option<ArgValue>,
}

impl NavArgument {
    pub fn new(name: impl Into<String>, nav_type: NavType) -> Self {
        Self {
            name: name.into(),
            nav_type,
            nullable: false,
            default: None,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn default_value(mut self, value: impl Into<ArgValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nav_type(&self) -> NavType {
        self.nav_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default(&self) -> Option<&ArgValue> {
        self.default.as_ref()
    }
}

/// Decoded arguments of one back stack entry.
///
/// Typed getters return `None` both for absent arguments and for arguments
/// stored under a different type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteArguments {
    values: HashMap<String, ArgValue>,
}

impl RouteArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            Some(ArgValue::String(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(ArgValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(ArgValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(NavType::StringType.parse(""), Some(ArgValue::String(String::new())));
        assert_eq!(NavType::IntType.parse("-7"), Some(ArgValue::Int(-7)));
        assert_eq!(NavType::IntType.parse("7.5"), None);
        assert_eq!(NavType::IntType.parse("99999999999"), None);
        assert_eq!(NavType::BoolType.parse("false"), Some(ArgValue::Bool(false)));
        assert_eq!(NavType::BoolType.parse("True"), None);
    }

    #[test]
    fn test_typed_getters() {
        let mut args = RouteArguments::new();
        args.insert("name", "ada");
        args.insert("age", 36);
        args.insert("admin", true);

        assert_eq!(args.get_string("name"), Some("ada".to_string()));
        assert_eq!(args.get_int("age"), Some(36));
        assert_eq!(args.get_bool("admin"), Some(true));
        assert_eq!(args.get_string("age"), None);
        assert_eq!(args.get_int("missing"), None);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_argument_builder() {
        let arg = NavArgument::new("page", NavType::IntType).default_value(1);
        assert_eq!(arg.name(), "page");
        assert_eq!(arg.nav_type(), NavType::IntType);
        assert!(!arg.is_nullable());
        assert_eq!(arg.default(), Some(&ArgValue::Int(1)));
    }
}
