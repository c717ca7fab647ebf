// NavGen procedural macros
// Provides the #[nav_gen] screen attribute

use proc_macro::TokenStream;

mod expand;
mod screen;
mod tokens;

/// Generates type-safe navigation for a screen function
///
/// The function's parameters decide the route:
///
/// - `NavController` / `Option<NavController>` - navigation handle, passed
///   through on registration and never part of the route
/// - `String`, `i32`, `bool` - required path segment
/// - `Option<String>` - optional query parameter, absent by default
/// - any routable parameter with `#[default_string(..)]`, `#[default_int(..)]`
///   or `#[default_bool(..)]` - optional query parameter with that default
///
/// `Option<i32>` and `Option<bool>` are rejected: they have no absent
/// encoding in a route.
///
/// # Generated items
///
/// For `#[nav_gen("detail")]` three traits are emitted next to the function:
///
/// - `NavGenDetailGraph` on `NavGraphBuilder` - `builder.detail(handles..)`
/// - `NavGenDetailNavigate` on `NavController` - `controller.detail(args..)`
/// - `NavGenDetailRoute` on `NavGenRoutes` - `NavGenRoutes.detail()`
///
/// # Example
///
/// ```ignore
/// use navgen::{nav_gen, NavController};
///
/// // Route: detail/{lang}/{like}?ja={ja}&page={page}
/// #[nav_gen("detail")]
/// fn detail_screen(
///     lang: String,
///     ja: Option<String>,
///     like: bool,
///     #[default_int(1)] page: i32,
///     nav_controller: NavController,
/// ) {
///     // ...
/// }
///
/// controller.detail("en".into(), None, true, None)?;
/// ```
#[proc_macro_attribute]
pub fn nav_gen(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::expand(attr.into(), item.into()).into()
}
