//! The tree builder: expands a fiber's pending children into its child chain.

use log::trace;

use crate::element::{Child, ElementKind};

use super::arena::FiberArena;
use super::node::{Fiber, FiberId};

/// Consume `fiber`'s pending children and materialize its descendants.
///
/// One fiber is created per renderable unit, in authored order: strings and
/// numbers become text fibers; host elements become host fibers whose own
/// children are built recursively; component elements are invoked and their
/// returned children built recursively under the component fiber. Each
/// unit's subtree is fully constructed before any linking happens — the
/// sibling chain and the parent's `child` link are written last, so an
/// aborted build never leaves a half-linked chain reachable from the parent.
///
/// Zero renderable units leave `child` as `None`, a valid terminal state.
pub fn build(arena: &mut FiberArena, fiber: FiberId) {
    let Some(parent) = arena.get_mut(fiber) else {
        return;
    };
    let pending = std::mem::take(&mut parent.pending);
    let replaced = parent.child;

    let mut built: Vec<FiberId> = Vec::with_capacity(pending.len());
    for unit in pending {
        match unit {
            Child::Text(content) => {
                trace!("materializing text fiber");
                built.push(arena.insert(Fiber::text(content, fiber)));
            }
            Child::Number(value) => {
                trace!("materializing text fiber from number");
                built.push(arena.insert(Fiber::text(value.to_string(), fiber)));
            }
            Child::Element(element) => {
                let (kind, attributes, key) = element.into_parts();
                let id = match kind {
                    ElementKind::Host(tag) => {
                        trace!("materializing host fiber <{tag}>");
                        arena.insert(Fiber::host(tag, attributes, key, fiber))
                    }
                    ElementKind::Component(component) => {
                        trace!("materializing component fiber {}", component.name());
                        let produced = component.expand(&attributes).normalized();
                        arena.insert(Fiber::component(
                            component, attributes, key, fiber, produced,
                        ))
                    }
                };
                build(arena, id);
                built.push(id);
            }
            // Filtered upstream; skipped if a hand-built element smuggles
            // them through.
            Child::Bool(_) | Child::Nothing => {}
        }
    }

    for pair in built.windows(2) {
        if let Some(previous) = arena.get_mut(pair[0]) {
            previous.sibling = Some(pair[1]);
        }
    }
    if let Some(parent) = arena.get_mut(fiber) {
        parent.child = built.first().copied();
    }

    // Releasing the child link destroys whatever chain it owned. No diff
    // pass exists yet; a re-render replaces the previous chain wholesale.
    let mut next = replaced;
    while let Some(old) = next {
        next = arena.get(old).and_then(Fiber::sibling);
        arena.remove_subtree(old);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
