//! # weft
//!
//! A fiber-tree core for declarative UIs: application code describes a tree
//! of logical nodes (host-platform elements and reusable components), and
//! weft turns that description into an incrementally-updatable internal tree
//! of *fibers* — tracking parent/child/sibling relationships in document
//! order — ready for an attachment layer to drive a real rendering surface.
//!
//! weft does not paint pixels: it consumes already-validated element values
//! and produces a fully linked fiber tree. Diffing against a previous tree
//! and committing mutations to the surface are collaborator concerns.
//!
//! ## Core Systems
//!
//! - **[`element`]** — Immutable element values, components, keys, and the
//!   construction helper that normalizes authored children
//! - **[`fiber`]** — Slotmap-backed fiber arena, the closed fiber variants,
//!   and the recursive tree builder
//! - **[`sched`]** — Prioritized work queues and the coordinating [`Brain`](sched::Brain)
//! - **[`surface`]** — Handles standing in for rendering-surface targets
//! - **[`render`]** — The entry point tying input validation, root
//!   resolution, and scheduling together
//! - **[`testing`]** — Headless tree-outline helpers for assertions
//!
//! ## Example
//!
//! ```
//! use weft::element::{create_element, Attributes};
//! use weft::render::render;
//! use weft::sched::Brain;
//! use weft::surface::Surface;
//!
//! let mut brain = Brain::detached();
//! let surface = Surface::new();
//! let app = create_element("h1", Attributes::new(), "Hello World!");
//! let root = render(&mut brain, app, &surface)?;
//! assert!(brain.fibers().get(root).is_some());
//! # Ok::<(), weft::render::RenderError>(())
//! ```

// Element model
pub mod element;

// Fiber tree
pub mod fiber;

// Scheduling
pub mod sched;

// Boundaries
pub mod render;
pub mod surface;

// Test support
pub mod testing;
