//! YAML seed files used to pre-populate a tree at startup.

mod seed;

pub use seed::{Seed, SeedError};
