/// Registry of route templates.
///
/// Every `#[nav_gen]` screen adds an accessor to this type through its
/// generated `NavGen<Route>Route` trait:
///
/// ```ignore
/// use navgen::NavGenRoutes;
///
/// assert_eq!(NavGenRoutes.detail(), "detail/{id}?q={q}");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavGenRoutes;

/// Percent-encodes an argument value for use inside a route.
///
/// ```
/// assert_eq!(navgen::encode("a b/c?d=e&f"), "a%20b%2Fc%3Fd%3De%26f");
/// assert_eq!(navgen::encode("plain-text_1.0~"), "plain-text_1.0~");
/// ```
pub fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
