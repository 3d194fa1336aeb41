//! Element model: immutable descriptions of logical nodes, and the
//! construction helper that normalizes authored children.

pub mod create;
pub mod value;

pub use create::create_element;
pub use value::{AttrValue, Attributes, Child, Children, Component, Element, ElementKind, Key};
