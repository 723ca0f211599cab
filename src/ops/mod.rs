// ============================================================================
// spark-toolkit - Operations
// Pure functions over slices and mappings, grouped by purpose
// ============================================================================

pub mod cleaning;
pub mod mapping;
pub mod projection;
pub mod random;
pub mod ranking;
pub mod search;
pub mod slicing;

pub use cleaning::{compact, flatten, flatten_depth, flatten_shallow, union, without};
pub use mapping::extend;
pub use projection::{keys, pluck, values};
pub use random::{
    Randomizer, sample, sample_default, sample_one, sample_one_default, shuffle, shuffle_default,
};
pub use ranking::{max, max_by_key, min, min_by_key};
pub use search::{contains, filter, find, find_index, where_matches};
pub use slicing::{first, first_n, head, last, last_n, rest, rest_from, size, tail, take};
