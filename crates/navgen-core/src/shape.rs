/// Code shape generator
///
/// Turns a [`RouteSpec`] into abstract descriptions of the three generated
/// members. Backends own the concrete syntax; the shapes own ordering,
/// defaults and null handling.

use crate::model::{ArgumentKind, Literal, NavType, Parameter};
use crate::route::{RouteSpec, RouteWriter};

/// Naming of generated units: a fixed prefix plus the route name with its
/// first letter upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitNaming {
    pub prefix: String,
}

impl UnitNaming {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// ```
    /// use navgen_core::UnitNaming;
    ///
    /// assert_eq!(UnitNaming::default().unit_name("detail"), "NavGenDetail");
    /// ```
    pub fn unit_name(&self, route_name: &str) -> String {
        let mut chars = route_name.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{}{}", self.prefix, capitalized)
    }
}

impl Default for UnitNaming {
    fn default() -> Self {
        Self::new("NavGen")
    }
}

/// One generated source unit, members in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub name: String,
    pub package: String,
    /// Incremental dependency: the originating declaration's file only
    pub source_file: Option<String>,
    pub registration: RegistrationShape,
    pub trigger: TriggerShape,
    pub route_constant: RouteConstantShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalParam {
    pub name: String,
    pub source_type: String,
}

/// Registers the route with the navigation graph and invokes the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationShape {
    pub name: String,
    /// Navigation handles, in their relative declaration order
    pub handle_params: Vec<FormalParam>,
    pub route_pattern: String,
    /// One per routable parameter
    pub arguments: Vec<ArgumentDescriptor>,
    pub screen: ScreenCall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub nav_type: NavType,
    pub nullable: bool,
    pub default: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCall {
    pub package: String,
    pub function: String,
    /// Original declaration order
    pub arguments: Vec<CallArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArgument {
    /// Passed through unchanged
    Handle { name: String },
    /// Read from the route arguments. Non-nullable reads assert presence.
    Extract {
        name: String,
        nav_type: NavType,
        nullable: bool,
    },
}

/// Type-safe navigation to the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerShape {
    pub name: String,
    pub params: Vec<TriggerParam>,
    /// Route with live values in place of `{name}` placeholders
    pub path: Vec<PathPiece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerParam {
    pub name: String,
    pub source_type: String,
    pub nav_type: NavType,
    pub nullable: bool,
    pub default: ParamDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamDefault {
    /// Caller must supply a value
    Required,
    /// Defaults to the absent value
    Absent,
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPiece {
    Text(String),
    /// Interpolated argument; a nullable value renders as "" when absent
    Value {
        name: String,
        nav_type: NavType,
        nullable: bool,
    },
}

/// Read-only accessor on the routes registry exposing the route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConstantShape {
    pub name: String,
    pub value: String,
}

/// Derives the generated unit for `spec`. Never fails for a classified spec.
pub fn generate(spec: &RouteSpec, naming: &UnitNaming) -> GeneratedUnit {
    let unit = GeneratedUnit {
        name: naming.unit_name(spec.route_name()),
        package: spec.package().to_string(),
        source_file: spec.containing_file().map(str::to_string),
        registration: registration_shape(spec),
        trigger: trigger_shape(spec),
        route_constant: RouteConstantShape {
            name: spec.route_name().to_string(),
            value: spec.route_pattern().to_string(),
        },
    };

    tracing::debug!(
        unit = %unit.name,
        route = %spec.route_pattern(),
        "generated code shapes"
    );

    unit
}

fn registration_shape(spec: &RouteSpec) -> RegistrationShape {
    let handle_params = spec
        .navigation_handle_params()
        .map(|p| FormalParam {
            name: p.name.clone(),
            source_type: p.source_type.clone(),
        })
        .collect();

    let arguments = spec
        .routable_params()
        .filter_map(|p| {
            p.kind.nav_type().map(|nav_type| ArgumentDescriptor {
                name: p.name.clone(),
                nav_type,
                nullable: p.nullable(),
                default: p.default_literal(),
            })
        })
        .collect();

    let call_arguments = spec
        .parameters()
        .iter()
        .map(|p| match p.kind.nav_type() {
            None => CallArgument::Handle {
                name: p.name.clone(),
            },
            Some(nav_type) => CallArgument::Extract {
                name: p.name.clone(),
                nav_type,
                nullable: p.nullable(),
            },
        })
        .collect();

    RegistrationShape {
        name: spec.route_name().to_string(),
        handle_params,
        route_pattern: spec.route_pattern().to_string(),
        arguments,
        screen: ScreenCall {
            package: spec.package().to_string(),
            function: spec.function_name().to_string(),
            arguments: call_arguments,
        },
    }
}

fn trigger_shape(spec: &RouteSpec) -> TriggerShape {
    let params = spec
        .routable_params()
        .filter_map(|p| {
            p.kind.nav_type().map(|nav_type| TriggerParam {
                name: p.name.clone(),
                source_type: p.source_type.clone(),
                nav_type,
                nullable: p.nullable(),
                default: param_default(&p.kind),
            })
        })
        .collect();

    let mut builder = PathBuilder::default();
    spec.write_route(&mut builder);

    TriggerShape {
        name: spec.route_name().to_string(),
        params,
        path: builder.pieces,
    }
}

/// A declared literal wins over the absent default of a nullable string.
fn param_default(kind: &ArgumentKind) -> ParamDefault {
    match (kind.default_literal(), kind.is_nullable()) {
        (Some(literal), _) => ParamDefault::Literal(literal),
        (None, true) => ParamDefault::Absent,
        (None, false) => ParamDefault::Required,
    }
}

#[derive(Default)]
struct PathBuilder {
    pieces: Vec<PathPiece>,
}

impl PathBuilder {
    fn value(&mut self, parameter: &Parameter) {
        if let Some(nav_type) = parameter.kind.nav_type() {
            self.pieces.push(PathPiece::Value {
                name: parameter.name.clone(),
                nav_type,
                nullable: parameter.nullable(),
            });
        }
    }
}

impl RouteWriter for PathBuilder {
    fn static_text(&mut self, text: &str) {
        // Adjacent static text collapses into one piece
        match self.pieces.last_mut() {
            Some(PathPiece::Text(existing)) => existing.push_str(text),
            _ => self.pieces.push(PathPiece::Text(text.to_string())),
        }
    }

    fn path_argument(&mut self, parameter: &Parameter) {
        self.value(parameter);
    }

    fn query_argument(&mut self, parameter: &Parameter) {
        self.value(parameter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(parameters: Vec<Parameter>) -> RouteSpec {
        RouteSpec::new("detail", "DetailScreen", "app.ui", Some("Detail.kt".into()), parameters)
    }

    fn string(name: &str, nullable: bool, default: Option<&str>) -> Parameter {
        Parameter::new(
            name,
            ArgumentKind::StringArg {
                nullable,
                default: default.map(str::to_string),
            },
            "String",
        )
    }

    #[test]
    fn test_unit_name() {
        let naming = UnitNaming::default();
        assert_eq!(naming.unit_name("detail"), "NavGenDetail");
        assert_eq!(naming.unit_name("Detail"), "NavGenDetail");
        assert_eq!(naming.unit_name("userList"), "NavGenUserList");
        assert_eq!(UnitNaming::new("Routes").unit_name("x"), "RoutesX");
    }

    #[test]
    fn test_no_argument_shapes() {
        let unit = generate(&spec(vec![]), &UnitNaming::default());

        assert_eq!(unit.registration.route_pattern, "detail");
        assert!(unit.registration.arguments.is_empty());
        assert!(unit.registration.handle_params.is_empty());
        assert!(unit.trigger.params.is_empty());
        assert_eq!(unit.trigger.path, vec![PathPiece::Text("detail".into())]);
        assert_eq!(unit.route_constant.value, "detail");
        assert_eq!(unit.source_file.as_deref(), Some("Detail.kt"));
    }

    #[test]
    fn test_handles_pass_through() {
        let unit = generate(
            &spec(vec![
                Parameter::new("nav", ArgumentKind::NavigationHandle, "NavController"),
                Parameter::new("id", ArgumentKind::IntArg { default: None }, "Int"),
            ]),
            &UnitNaming::default(),
        );

        assert_eq!(
            unit.registration.handle_params,
            vec![FormalParam { name: "nav".into(), source_type: "NavController".into() }]
        );
        assert_eq!(
            unit.registration.screen.arguments,
            vec![
                CallArgument::Handle { name: "nav".into() },
                CallArgument::Extract { name: "id".into(), nav_type: NavType::IntType, nullable: false },
            ]
        );
        let trigger_names: Vec<_> = unit.trigger.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(trigger_names, vec!["id"]);
        assert!(!unit.route_constant.value.contains("nav"));
    }

    #[test]
    fn test_trigger_defaults() {
        let unit = generate(
            &spec(vec![
                string("lang", false, None),
                string("ja", true, None),
                string("defaultTest", false, Some("yes")),
                string("both", true, Some("fallback")),
            ]),
            &UnitNaming::default(),
        );

        let defaults: Vec<_> = unit.trigger.params.iter().map(|p| p.default.clone()).collect();
        assert_eq!(
            defaults,
            vec![
                ParamDefault::Required,
                ParamDefault::Absent,
                ParamDefault::Literal(Literal::String("yes".into())),
                ParamDefault::Literal(Literal::String("fallback".into())),
            ]
        );
    }

    #[test]
    fn test_trigger_path_mirrors_pattern() {
        let unit = generate(
            &spec(vec![
                Parameter::new("id", ArgumentKind::IntArg { default: None }, "Int"),
                string("q", true, None),
            ]),
            &UnitNaming::default(),
        );

        assert_eq!(unit.route_constant.value, "detail/{id}?q={q}");
        assert_eq!(
            unit.trigger.path,
            vec![
                PathPiece::Text("detail/".into()),
                PathPiece::Value { name: "id".into(), nav_type: NavType::IntType, nullable: false },
                PathPiece::Text("?q=".into()),
                PathPiece::Value { name: "q".into(), nav_type: NavType::StringType, nullable: true },
            ]
        );
    }

    #[test]
    fn test_descriptors_carry_defaults() {
        let unit = generate(
            &spec(vec![
                Parameter::new("count", ArgumentKind::IntArg { default: Some(3) }, "Int"),
                Parameter::new("flag", ArgumentKind::BoolArg { default: Some(true) }, "Boolean"),
            ]),
            &UnitNaming::default(),
        );

        assert_eq!(
            unit.registration.arguments,
            vec![
                ArgumentDescriptor {
                    name: "count".into(),
                    nav_type: NavType::IntType,
                    nullable: false,
                    default: Some(Literal::Int(3)),
                },
                ArgumentDescriptor {
                    name: "flag".into(),
                    nav_type: NavType::BoolType,
                    nullable: false,
                    default: Some(Literal::Bool(true)),
                },
            ]
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let spec = spec(vec![string("a", false, None), string("b", true, None)]);
        assert_eq!(
            generate(&spec, &UnitNaming::default()),
            generate(&spec, &UnitNaming::default())
        );
    }
}
