// ============================================================================
// spark-toolkit - Errors
// Shape mismatches from the dynamic layer and configuration parsing
// ============================================================================

use thiserror::Error;

/// Result type alias for fallible toolkit operations.
pub type Result<T> = std::result::Result<T, ToolkitError>;

/// Errors raised by the toolkit.
///
/// Typed operations over slices and mappings are total and never produce one
/// of these. They come from the `json` layer, where a document may not have
/// the shape an operation needs, and from parsing configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("expected an array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("expected an array or object, found {found}")]
    NotACollection { found: &'static str },

    #[error("invalid random seed: {value:?}")]
    InvalidSeed { value: String },
}

impl ToolkitError {
    pub fn not_an_array(found: &'static str) -> Self {
        Self::NotAnArray { found }
    }

    pub fn not_an_object(found: &'static str) -> Self {
        Self::NotAnObject { found }
    }

    pub fn not_a_collection(found: &'static str) -> Self {
        Self::NotACollection { found }
    }

    pub fn invalid_seed(value: impl Into<String>) -> Self {
        Self::InvalidSeed {
            value: value.into(),
        }
    }
}
