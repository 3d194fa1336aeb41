//! The element-construction helper.
//!
//! [`create_element`] is the boundary between authored UI descriptions and
//! the core: it resolves which children sequence applies, filters out entries
//! that can never render, and produces the immutable [`Element`] value the
//! fiber layer consumes. Everything downstream assumes this filtering has
//! already happened.

use super::value::{Attributes, Children, Element, ElementKind};

/// Build an [`Element`] from a kind, attributes, and children.
///
/// An explicit non-empty `children` argument wins over whatever
/// `attributes.children` holds; otherwise the attribute-supplied children are
/// used. Either way, non-renderable entries (`Bool`, `Nothing`) are dropped
/// before the element is built.
///
/// Attach a key afterwards with [`Element::with_key`].
///
/// # Examples
///
/// ```
/// use weft::element::{create_element, Attributes};
///
/// let heading = create_element("h1", Attributes::new(), "Hello World!");
/// assert_eq!(heading.attributes().children().len(), 1);
/// ```
pub fn create_element(
    kind: impl Into<ElementKind>,
    mut attributes: Attributes,
    children: impl Into<Children>,
) -> Element {
    let explicit: Children = children.into();
    let chosen = if explicit.is_empty() {
        attributes.take_children()
    } else {
        explicit
    };
    let total = chosen.len();
    let normalized = chosen.normalized();
    let dropped = total - normalized.len();
    if dropped > 0 {
        log::warn!("create_element dropped {dropped} non-renderable child(ren)");
    }
    attributes.set_children(normalized);
    Element::new(kind, attributes)
}

// ===========================================================================
// Tests
// ===========================================================================
