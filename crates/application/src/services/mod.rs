pub mod resolution_engine;

pub use resolution_engine::{Resolution, ResolutionEngine};
