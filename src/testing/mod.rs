//! Headless inspection helpers.
//!
//! Use [`tree_to_string`] to capture a fiber subtree as a plain-text outline
//! for snapshot-style assertions and debugging.

pub mod outline;

pub use outline::tree_to_string;
