//! Fiber layer: the arena-backed render tree and the builder that grows it.

pub mod arena;
pub mod build;
pub mod node;

pub use arena::{FiberArena, Siblings};
pub use build::build;
pub use node::{Fiber, FiberId, FiberKind};
