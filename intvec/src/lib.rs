pub mod array;
pub mod config;

pub use array::{grown_capacity, Access, GrowableIntArray, IndexOutOfBounds};
pub use config::Config;

/// Capacity of an array built with [`GrowableIntArray::new`]. Override with
/// the `[array] initial_capacity` config key or `INTVEC_INITIAL_CAPACITY`.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
