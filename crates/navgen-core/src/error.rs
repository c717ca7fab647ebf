use thiserror::Error;

use crate::model::NavType;

/// Why a declaration could not be turned into a route.
///
/// Every variant names the offending function so the host can surface it as
/// a diagnostic. A failure aborts that one declaration only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("Not supported argument type `{ty}` for parameter `{parameter}` in `{function}`")]
    UnsupportedType {
        function: String,
        parameter: String,
        ty: String,
    },

    #[error("{kind} argument `{parameter}` in `{function}` does not allow nullable")]
    NullableNotAllowed {
        function: String,
        parameter: String,
        kind: NavType,
    },

    #[error("Route name for `{function}` must not be empty")]
    EmptyRouteName { function: String },

    #[error("{found} default value on {expected} argument `{parameter}` in `{function}`")]
    DefaultKindMismatch {
        function: String,
        parameter: String,
        expected: NavType,
        found: NavType,
    },

    #[error("Parameter `{parameter}` is declared more than once in `{function}`")]
    DuplicateParameter { function: String, parameter: String },
}

impl ClassificationError {
    pub fn function(&self) -> &str {
        match self {
            ClassificationError::UnsupportedType { function, .. }
            | ClassificationError::NullableNotAllowed { function, .. }
            | ClassificationError::EmptyRouteName { function }
            | ClassificationError::DefaultKindMismatch { function, .. }
            | ClassificationError::DuplicateParameter { function, .. } => function,
        }
    }

    /// The parameter that disqualified the declaration, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ClassificationError::UnsupportedType { parameter, .. }
            | ClassificationError::NullableNotAllowed { parameter, .. }
            | ClassificationError::DefaultKindMismatch { parameter, .. }
            | ClassificationError::DuplicateParameter { parameter, .. } => Some(parameter),
            ClassificationError::EmptyRouteName { .. } => None,
        }
    }
}
