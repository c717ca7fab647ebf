/// Signature classifier
///
/// Maps each declared parameter to an [`ArgumentKind`]. Classification is
/// driven by the underlying type; nullability is read separately.

use std::collections::HashSet;

use crate::declaration::{Declaration, DeclaredParameter};
use crate::error::ClassificationError;
use crate::known_types::{KnownTypes, TypeClass};
use crate::model::{ArgumentKind, Literal, NavType, Parameter};
use crate::route::RouteSpec;

/// Classifies `declaration` against the pass-wide `known` table.
///
/// The first disqualifying parameter aborts the whole declaration; nothing
/// partial is returned.
pub fn classify(
    declaration: &Declaration,
    known: &KnownTypes,
) -> Result<RouteSpec, ClassificationError> {
    let function = declaration.function_name.as_str();

    if declaration.route_name.is_empty() {
        return Err(ClassificationError::EmptyRouteName {
            function: function.to_string(),
        });
    }

    let mut seen = HashSet::new();
    let parameters = declaration
        .parameters
        .iter()
        .map(|declared| {
            if !seen.insert(declared.name.as_str()) {
                return Err(ClassificationError::DuplicateParameter {
                    function: function.to_string(),
                    parameter: declared.name.clone(),
                });
            }
            classify_parameter(function, declared, known)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RouteSpec::new(
        declaration.route_name.as_str(),
        function,
        declaration.package.as_str(),
        declaration.containing_file.clone(),
        parameters,
    ))
}

fn classify_parameter(
    function: &str,
    declared: &DeclaredParameter,
    known: &KnownTypes,
) -> Result<Parameter, ClassificationError> {
    let class = known.resolve(&declared.ty.path).ok_or_else(|| {
        ClassificationError::UnsupportedType {
            function: function.to_string(),
            parameter: declared.name.clone(),
            ty: declared.ty.source.clone(),
        }
    })?;

    let kind = match class {
        // Handles are never routable; nullability and defaults are ignored
        TypeClass::NavigationHandle => ArgumentKind::NavigationHandle,
        TypeClass::String => ArgumentKind::StringArg {
            nullable: declared.ty.nullable,
            default: match declared_default(function, declared, NavType::StringType)? {
                Some(Literal::String(value)) => Some(value),
                _ => None,
            },
        },
        TypeClass::Int => {
            reject_nullable(function, declared, NavType::IntType)?;
            ArgumentKind::IntArg {
                default: match declared_default(function, declared, NavType::IntType)? {
                    Some(Literal::Int(value)) => Some(value),
                    _ => None,
                },
            }
        }
        TypeClass::Bool => {
            reject_nullable(function, declared, NavType::BoolType)?;
            ArgumentKind::BoolArg {
                default: match declared_default(function, declared, NavType::BoolType)? {
                    Some(Literal::Bool(value)) => Some(value),
                    _ => None,
                },
            }
        }
    };

    tracing::debug!(
        function,
        parameter = %declared.name,
        kind = ?kind,
        "classified parameter"
    );

    Ok(Parameter::new(
        declared.name.as_str(),
        kind,
        declared.ty.source.as_str(),
    ))
}

/// Integers and booleans have no absent encoding in a route.
fn reject_nullable(
    function: &str,
    declared: &DeclaredParameter,
    kind: NavType,
) -> Result<(), ClassificationError> {
    if declared.ty.nullable {
        return Err(ClassificationError::NullableNotAllowed {
            function: function.to_string(),
            parameter: declared.name.clone(),
            kind,
        });
    }
    Ok(())
}

/// First default annotation of the expected kind; any other kind is an error.
fn declared_default(
    function: &str,
    declared: &DeclaredParameter,
    expected: NavType,
) -> Result<Option<Literal>, ClassificationError> {
    if let Some(other) = declared.defaults.iter().find(|d| d.nav_type() != expected) {
        return Err(ClassificationError::DefaultKindMismatch {
            function: function.to_string(),
            parameter: declared.name.clone(),
            expected,
            found: other.nav_type(),
        });
    }
    Ok(declared.defaults.first().cloned())
}
