//! Fiber-tree outlines: one line per fiber, indented by depth.

use crate::fiber::{FiberArena, FiberId, FiberKind};

/// Render the subtree rooted at `id` as an indented plain-text outline.
///
/// One line per fiber, two spaces of indent per level, children in document
/// order. Roots print as `root`, host fibers as `<tag>`, component fibers as
/// their name followed by `()`, text fibers as a quoted literal. Keys are
/// appended as `key=…` where present.
///
/// # Examples
///
/// ```
/// use weft::element::{create_element, Attributes};
/// use weft::render::render;
/// use weft::sched::Brain;
/// use weft::surface::Surface;
/// use weft::testing::tree_to_string;
///
/// let mut brain = Brain::detached();
/// let surface = Surface::new();
/// let heading = create_element("h1", Attributes::new(), "Hello World!");
/// let root = render(&mut brain, heading, &surface).unwrap();
/// assert_eq!(
///     tree_to_string(brain.fibers(), root),
///     "root\n  <h1>\n    \"Hello World!\"",
/// );
/// ```
pub fn tree_to_string(arena: &FiberArena, id: FiberId) -> String {
    let mut lines = Vec::new();
    visit(arena, id, 0, &mut lines);
    lines.join("\n")
}

fn visit(arena: &FiberArena, id: FiberId, depth: usize, lines: &mut Vec<String>) {
    let Some(fiber) = arena.get(id) else { return };

    let mut line = format!("{:indent$}{}", "", label(fiber.kind()), indent = depth * 2);
    if let Some(key) = fiber.key() {
        line.push_str(&format!(" key={key}"));
    }
    lines.push(line);

    for child in arena.children(id) {
        visit(arena, child, depth + 1, lines);
    }
}

fn label(kind: &FiberKind) -> String {
    match kind {
        FiberKind::Root { .. } => "root".to_owned(),
        FiberKind::Host { tag, .. } => format!("<{tag}>"),
        FiberKind::Component { component, .. } => format!("{}()", component.name()),
        FiberKind::Text { content } => format!("{content:?}"),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
