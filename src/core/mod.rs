// ============================================================================
// spark-toolkit - Core Module
// Shared notions: truthiness, field access, mappings, errors, configuration
// ============================================================================

pub mod config;
pub mod error;
pub mod truthy;
pub mod types;

// Re-export commonly used items
pub use config::{RandomConfig, SEED_ENV_VAR};
pub use error::{Result, ToolkitError};
pub use truthy::{Truthy, truthy};
pub use types::{Fields, Mapping, MappingMut, Nested, Size};
