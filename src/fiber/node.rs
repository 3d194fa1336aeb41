//! Fiber nodes: FiberId, Fiber, FiberKind.

use slotmap::new_key_type;

use crate::element::{Attributes, Children, Component, Key};
use crate::surface::SurfaceId;

new_key_type! {
    /// Unique identifier for a fiber. Copy, lightweight (u64).
    pub struct FiberId;
}

/// The variant of a fiber, as a closed sum type.
///
/// The tree builder matches exhaustively, so adding a variant is a
/// compile-time-checked exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum FiberKind {
    /// The top-level anchor for one rendering surface. No parent, no sibling.
    Root {
        /// The surface this root is associated with.
        surface: SurfaceId,
    },
    /// One host-platform node to be materialized.
    Host {
        /// Host tag name (e.g. `"div"`).
        tag: String,
        /// The element's attributes, children included.
        attributes: Attributes,
        /// Stable identity among siblings, if the element carried one.
        key: Option<Key>,
    },
    /// One invocation of a reusable component. Its child chain is the
    /// expansion of whatever the component returned.
    Component {
        /// The component reference.
        component: Component,
        /// The attributes the component was invoked with.
        attributes: Attributes,
        /// Stable identity among siblings, if the element carried one.
        key: Option<Key>,
    },
    /// A primitive leaf. Never carries pending children.
    Text {
        /// The stringified content.
        content: String,
    },
}

impl FiberKind {
    /// The key carried over from the element, if any.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Self::Host { key, .. } | Self::Component { key, .. } => key.as_ref(),
            Self::Root { .. } | Self::Text { .. } => None,
        }
    }

    /// Whether this is a root fiber.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root { .. })
    }

    /// Whether this is a text fiber.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// A mutable tree node tracking one instantiated logical node.
///
/// `child` is the owning link; `sibling` and `parent` are non-owning
/// back-references used for traversal. `pending` holds the not-yet-expanded
/// children the tree builder will consume.
///
/// Fibers are mutated only by the tree builder acting for the scheduler;
/// everything else reads through the accessors.
#[derive(Debug, Clone)]
pub struct Fiber {
    pub(crate) kind: FiberKind,
    pub(crate) child: Option<FiberId>,
    pub(crate) sibling: Option<FiberId>,
    pub(crate) parent: Option<FiberId>,
    pub(crate) pending: Children,
}

impl Fiber {
    /// A root fiber anchored to a surface.
    pub fn root(surface: SurfaceId) -> Self {
        Self {
            kind: FiberKind::Root { surface },
            child: None,
            sibling: None,
            parent: None,
            pending: Children::new(),
        }
    }

    /// A host-element fiber. Pending children are seeded from the element's
    /// attributes.
    pub fn host(tag: String, attributes: Attributes, key: Option<Key>, parent: FiberId) -> Self {
        let pending = attributes.children().clone();
        Self {
            kind: FiberKind::Host {
                tag,
                attributes,
                key,
            },
            child: None,
            sibling: None,
            parent: Some(parent),
            pending,
        }
    }

    /// A component fiber. Pending children are whatever the component
    /// returned for this invocation.
    pub fn component(
        component: Component,
        attributes: Attributes,
        key: Option<Key>,
        parent: FiberId,
        produced: Children,
    ) -> Self {
        Self {
            kind: FiberKind::Component {
                component,
                attributes,
                key,
            },
            child: None,
            sibling: None,
            parent: Some(parent),
            pending: produced,
        }
    }

    /// A text leaf.
    pub fn text(content: impl Into<String>, parent: FiberId) -> Self {
        Self {
            kind: FiberKind::Text {
                content: content.into(),
            },
            child: None,
            sibling: None,
            parent: Some(parent),
            pending: Children::new(),
        }
    }

    /// This fiber's variant.
    pub fn kind(&self) -> &FiberKind {
        &self.kind
    }

    /// First child in document order, if any.
    pub fn child(&self) -> Option<FiberId> {
        self.child
    }

    /// Next sibling in document order, if any.
    pub fn sibling(&self) -> Option<FiberId> {
        self.sibling
    }

    /// The fiber that owns this one. `None` only for roots.
    pub fn parent(&self) -> Option<FiberId> {
        self.parent
    }

    /// Children awaiting expansion by the tree builder.
    pub fn pending(&self) -> &Children {
        &self.pending
    }

    /// The key carried over from the element, if any.
    pub fn key(&self) -> Option<&Key> {
        self.kind.key()
    }

    /// Text content, for text fibers.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            FiberKind::Text { content } => Some(content),
            _ => None,
        }
    }
}
