//! Scheduling: prioritized work queues and the coordinating brain.

pub mod brain;
pub mod queue;

pub use brain::{Brain, BrainError};
pub use queue::{Priority, QueueList, WorkQueue};
