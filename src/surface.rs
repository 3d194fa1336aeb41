//! Rendering-surface handles.
//!
//! A [`Surface`] stands in for one host rendering node (a DOM container, a
//! terminal region, a window; whatever the attachment layer drives). The
//! core only needs two things from it: a stable identity to key the root
//! registry, and whether it already holds content this library did not
//! create.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identity of a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(0);

fn next_surface_id() -> SurfaceId {
    SurfaceId(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
}

/// A handle to one rendering-surface target.
///
/// The root-fiber association is held out-of-band by the
/// [`Brain`](crate::sched::Brain), keyed by [`SurfaceId`]; the handle itself
/// stays immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: SurfaceId,
    foreign_content: bool,
}

impl Surface {
    /// A fresh, empty surface.
    pub fn new() -> Self {
        Self {
            id: next_surface_id(),
            foreign_content: false,
        }
    }

    /// A surface wrapping a host node that already holds content not created
    /// by this library. Rendering into it fails the precondition check at the
    /// render boundary.
    pub fn occupied() -> Self {
        Self {
            id: next_surface_id(),
            foreign_content: true,
        }
    }

    /// This surface's identity.
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Whether the underlying host node holds foreign content.
    pub fn has_foreign_content(&self) -> bool {
        self.foreign_content
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
