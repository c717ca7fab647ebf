/// Host-neutral screen declarations
///
/// Hosts (the attribute macro, the manifest CLI) translate whatever their
/// compiler front end resolved into these plain values before classification.

use crate::model::Literal;

/// A resolved parameter type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Underlying type with nullability stripped, e.g. `String` for `String?`
    pub path: String,
    pub nullable: bool,
    /// The type exactly as declared
    pub source: String,
}

impl TypeRef {
    pub fn new(path: impl Into<String>, nullable: bool, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            nullable,
            source: source.into(),
        }
    }

    /// Parses Kotlin-style type text: a trailing `?` marks nullability.
    ///
    /// ```
    /// use navgen_core::TypeRef;
    ///
    /// let ty = TypeRef::parse("kotlin.String?");
    /// assert_eq!(ty.path, "kotlin.String");
    /// assert!(ty.nullable);
    /// assert_eq!(ty.source, "kotlin.String?");
    /// ```
    pub fn parse(text: &str) -> Self {
        let source = text.trim();
        match source.strip_suffix('?') {
            Some(path) => Self::new(path.trim_end(), true, source),
            None => Self::new(source, false, source),
        }
    }
}

/// One declared parameter with any default annotations attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredParameter {
    pub name: String,
    pub ty: TypeRef,
    pub defaults: Vec<Literal>,
}

impl DeclaredParameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            defaults: Vec::new(),
        }
    }

    /// Attaches a default annotation (`DefaultString`, `DefaultInt`, `DefaultBool`).
    pub fn with_default(mut self, literal: impl Into<Literal>) -> Self {
        self.defaults.push(literal.into());
        self
    }
}

/// A function carrying the navigation annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub package: String,
    pub function_name: String,
    /// Route name taken from the annotation
    pub route_name: String,
    /// Originating file, the only incremental dependency of the generated unit
    pub containing_file: Option<String>,
    pub parameters: Vec<DeclaredParameter>,
}

impl Declaration {
    pub fn new(
        package: impl Into<String>,
        function_name: impl Into<String>,
        route_name: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            function_name: function_name.into(),
            route_name: route_name.into(),
            containing_file: None,
            parameters: Vec::new(),
        }
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.containing_file = Some(file.into());
        self
    }

    pub fn param(mut self, parameter: DeclaredParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_null() {
        let ty = TypeRef::parse("Int");
        assert_eq!(ty, TypeRef::new("Int", false, "Int"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let ty = TypeRef::parse("  String ? ");
        assert_eq!(ty.path, "String");
        assert!(ty.nullable);
    }

    #[test]
    fn test_declaration_builder_keeps_order() {
        let decl = Declaration::new("app", "Screen", "screen")
            .in_file("Screen.kt")
            .param(DeclaredParameter::new("b", TypeRef::parse("Int")))
            .param(DeclaredParameter::new("a", TypeRef::parse("String")).with_default("x"));

        let names: Vec<_> = decl.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(decl.containing_file.as_deref(), Some("Screen.kt"));
        assert_eq!(decl.parameters[1].defaults, vec![Literal::String("x".into())]);
    }
}
