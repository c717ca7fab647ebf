// Navigation errors
// Raised while building a graph or resolving a concrete route

use thiserror::Error;

use crate::arguments::NavType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No graph has been set on this controller")]
    GraphNotSet,

    #[error("No destination matches route `{0}`")]
    RouteNotFound(String),

    #[error("Route `{route}` is missing required argument `{argument}`")]
    MissingArgument { route: String, argument: String },

    #[error("Argument `{argument}` of route `{route}` is not a valid {nav_type}: `{value}`")]
    InvalidArgument {
        route: String,
        argument: String,
        nav_type: NavType,
        value: String,
    },

    #[error("Destination `{0}` is registered more than once")]
    DuplicateDestination(String),

    #[error("Invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
