//! # NavGen
//!
//! Type-safe screen navigation. Annotate a screen function with
//! [`nav_gen`] and the attribute derives, from its parameter list alone:
//!
//! - a registration method on [`NavGraphBuilder`] wiring the route template,
//!   its argument descriptors and the call into the screen,
//! - a navigation method on [`NavController`] taking typed arguments,
//! - an accessor on [`NavGenRoutes`] exposing the route template.
//!
//! Navigation handles (`NavController` parameters) are passed through and
//! never become part of the route. `String`, `i32` and `bool` parameters are
//! routable: plain ones become path segments, `Option<String>` and
//! defaulted ones become query parameters.
//!
//! ## Example
//!
//! ```
//! use navgen::{nav_gen, NavController, NavGenRoutes, NavGraphBuilder};
//!
//! #[nav_gen("detail")]
//! fn detail_screen(id: i32, query: Option<String>, nav_controller: NavController) {
//!     let _ = (id, query, nav_controller);
//! }
//!
//! let controller = NavController::new();
//! let mut builder = NavGraphBuilder::new();
//! builder.detail(controller.clone());
//! controller.set_graph(builder.build().unwrap()).unwrap();
//!
//! controller.detail(7, Some("a b".to_string())).unwrap();
//!
//! assert_eq!(NavGenRoutes.detail(), "detail/{id}?query={query}");
//! assert_eq!(controller.current_route().as_deref(), Some("detail/7?query=a%20b"));
//! ```

mod arguments;
mod controller;
mod error;
mod graph;
mod routes;

pub mod pattern;

pub use arguments::{ArgValue, NavArgument, NavType, RouteArguments};
pub use controller::{NavController, WeakNavController};
pub use error::NavigationError;
pub use graph::{BackStackEntry, NavGraph, NavGraphBuilder};
pub use navgen_macro::nav_gen;
pub use routes::{encode, NavGenRoutes};
