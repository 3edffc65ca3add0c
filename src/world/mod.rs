//! World module - the arena layout and obstacle queries.

mod arena;

pub use arena::*;
