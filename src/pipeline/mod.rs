pub mod emitter;
pub mod generator;
pub mod normalizer;
pub mod title;
pub mod types;
