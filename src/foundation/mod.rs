//! Core types, math vocabulary, deterministic RNG and the error taxonomy.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
pub(crate) mod rng;
