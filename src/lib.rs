// ============================================================================
// spark-toolkit - Collection Operations for Rust
// ============================================================================
//
// Pure, generic functions over slices and key-value mappings: search,
// projection, ranking, randomization, slicing, cleaning and merging.
// Inputs are never mutated, except by extend(), which merges into the
// destination it is given and returns it.
// ============================================================================

#[macro_use]
mod macros;

pub mod core;
pub mod json;
pub mod ops;

// Re-export core items at crate root for ergonomic access
pub use crate::core::config::{RandomConfig, SEED_ENV_VAR};
pub use crate::core::error::{Result, ToolkitError};
pub use crate::core::truthy::{Truthy, truthy};
pub use crate::core::types::{Fields, Mapping, MappingMut, Nested, Size};

// Re-export operations at crate root
pub use ops::cleaning::{compact, flatten, flatten_depth, flatten_shallow, union, without};
pub use ops::mapping::extend;
pub use ops::projection::{keys, pluck, values};
pub use ops::random::{
    Randomizer, sample, sample_default, sample_one, sample_one_default, shuffle, shuffle_default,
};
pub use ops::ranking::{max, max_by_key, min, min_by_key};
pub use ops::search::{contains, filter, find, find_index, where_matches};
pub use ops::slicing::{first, first_n, head, last, last_n, rest, rest_from, size, tail, take};

// =============================================================================
// TESTS
// =============================================================================
