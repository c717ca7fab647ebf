//! # NavGen Core
//!
//! Host-neutral engine behind the `#[nav_gen]` attribute and the `navgen`
//! manifest CLI. A screen declaration flows through four pure stages:
//!
//! 1. [`classify`] - walk the parameter list and assign each parameter an
//!    [`ArgumentKind`] using a [`KnownTypes`] table resolved once per pass.
//! 2. [`RouteSpec`] - partition the parameters (handles, required, optional)
//!    and derive the route pattern, e.g. `detail/{lang}?ja={ja}`.
//! 3. [`generate`] - derive the three code shapes: registration, trigger and
//!    route constant.
//! 4. A text backend ([`render::kotlin`] here, the token backend in
//!    `navgen-macro`) serializes the shapes.
//!
//! No stage keeps state between declarations, so a failing declaration never
//! affects its neighbours.
//!
//! ## Example
//!
//! ```
//! use navgen_core::{classify, generate, Declaration, DeclaredParameter, KnownTypes, TypeRef, UnitNaming};
//!
//! let declaration = Declaration::new("app.ui", "DetailScreen", "detail")
//!     .param(DeclaredParameter::new("id", TypeRef::new("Int", false, "Int")))
//!     .param(DeclaredParameter::new("query", TypeRef::new("String", true, "String?")));
//!
//! let spec = classify(&declaration, &KnownTypes::kotlin()).unwrap();
//! assert_eq!(spec.route_pattern(), "detail/{id}?query={query}");
//!
//! let unit = generate(&spec, &UnitNaming::default());
//! assert_eq!(unit.name, "NavGenDetail");
//! ```

mod classify;
mod declaration;
mod error;
mod known_types;
mod model;
mod route;
mod shape;

pub mod render;

pub use classify::classify;
pub use declaration::{Declaration, DeclaredParameter, TypeRef};
pub use error::ClassificationError;
pub use known_types::{KnownTypes, TypeClass};
pub use model::{ArgumentKind, Literal, NavType, Parameter};
pub use route::{route_pattern, RouteSpec, RouteWriter};
pub use shape::{
    generate, ArgumentDescriptor, CallArgument, FormalParam, GeneratedUnit, ParamDefault,
    PathPiece, RegistrationShape, RouteConstantShape, ScreenCall, TriggerParam, TriggerShape,
    UnitNaming,
};
