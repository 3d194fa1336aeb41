//! The render entry point.
//!
//! [`render`] is the boundary application code calls: it validates its
//! input, resolves (or creates) the root fiber for the target surface, and
//! hands the work to the scheduler. The scheduler drains synchronously, so
//! when `render` returns `Ok` the fiber tree under the returned root is
//! fully linked and ready for the attachment layer.

use crate::element::Children;
use crate::fiber::FiberId;
use crate::sched::Brain;
use crate::surface::Surface;

/// Errors raised at the render boundary. No partial root is created on any
/// of these.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    /// The input normalized to zero renderable units — nothing to render.
    #[error("`render` was called without anything to render; pass at least one element, string, or number")]
    NothingToRender,
    /// The surface already holds content this library did not create.
    #[error("`render` was called with a surface that already holds foreign content; render into an empty surface")]
    OccupiedSurface,
}

/// Render `source` into `surface`, returning the root fiber id.
///
/// The same surface keeps the same root fiber across calls; a re-render
/// against it reuses the registered root. A surface that carries content not
/// created by this library is rejected before any root is registered.
///
/// # Examples
///
/// ```
/// use weft::element::{create_element, Attributes};
/// use weft::render::render;
/// use weft::sched::Brain;
/// use weft::surface::Surface;
///
/// let mut brain = Brain::detached();
/// let surface = Surface::new();
/// let heading = create_element("h1", Attributes::new(), "Hello World!");
/// let root = render(&mut brain, heading, &surface).unwrap();
/// assert_eq!(brain.root_of(&surface), Some(root));
/// ```
pub fn render(
    brain: &mut Brain,
    source: impl Into<Children>,
    surface: &Surface,
) -> Result<FiberId, RenderError> {
    let children = source.into().normalized();
    if children.is_empty() {
        return Err(RenderError::NothingToRender);
    }
    if brain.root_of(surface).is_none() && surface.has_foreign_content() {
        return Err(RenderError::OccupiedSurface);
    }

    let root = brain.resolve_root(surface);
    brain.schedule_work(root, children);
    Ok(root)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{create_element, Attributes, Child};

    fn heading() -> crate::element::Element {
        create_element("h1", Attributes::new(), "Hello World!")
    }

    #[test]
    fn render_without_renderable_input_fails() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        assert_eq!(
            render(&mut brain, Children::new(), &surface),
            Err(RenderError::NothingToRender)
        );
        assert_eq!(brain.root_of(&surface), None);
    }

    #[test]
    fn render_of_booleans_fails_with_nothing_to_render() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        assert_eq!(
            render(&mut brain, true, &surface),
            Err(RenderError::NothingToRender)
        );
        assert_eq!(
            render(&mut brain, false, &surface),
            Err(RenderError::NothingToRender)
        );
        assert_eq!(brain.root_of(&surface), None);
    }

    #[test]
    fn render_into_an_occupied_surface_fails() {
        let mut brain = Brain::detached();
        let surface = Surface::occupied();
        assert_eq!(
            render(&mut brain, heading(), &surface),
            Err(RenderError::OccupiedSurface)
        );
        assert_eq!(brain.root_of(&surface), None);
    }

    #[test]
    fn render_associates_the_surface_with_a_root() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = render(&mut brain, heading(), &surface).unwrap();
        assert_eq!(brain.root_of(&surface), Some(root));
    }

    #[test]
    fn re_render_reuses_the_root() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let first = render(&mut brain, heading(), &surface).unwrap();
        let second = render(&mut brain, heading(), &surface).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_surfaces_get_distinct_roots() {
        let mut brain = Brain::detached();
        let first = render(&mut brain, heading(), &Surface::new()).unwrap();
        let second = render(&mut brain, heading(), &Surface::new()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn render_accepts_bare_text() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = render(&mut brain, "Hello World!", &surface).unwrap();
        let text = brain.fibers().get(root).unwrap().child().unwrap();
        assert_eq!(
            brain.fibers().get(text).unwrap().text_content(),
            Some("Hello World!")
        );
    }

    #[test]
    fn render_accepts_bare_numbers() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = render(&mut brain, 42_i64, &surface).unwrap();
        let text = brain.fibers().get(root).unwrap().child().unwrap();
        assert_eq!(brain.fibers().get(text).unwrap().text_content(), Some("42"));
    }

    #[test]
    fn render_accepts_multiple_top_level_children() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = render(
            &mut brain,
            vec![
                Child::from(create_element("header", Attributes::new(), Children::new())),
                Child::from(create_element("main", Attributes::new(), Children::new())),
            ],
            &surface,
        )
        .unwrap();
        assert_eq!(brain.fibers().child_ids(root).len(), 2);
    }

    #[test]
    fn mixed_input_renders_only_renderable_units() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = render(
            &mut brain,
            vec![Child::from(true), Child::from("kept"), Child::Nothing],
            &surface,
        )
        .unwrap();
        assert_eq!(brain.fibers().child_ids(root).len(), 1);
    }
}
