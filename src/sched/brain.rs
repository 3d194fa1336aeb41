//! The scheduler ("brain"): root registry, queue list, dispatch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::element::Children;
use crate::fiber::{build, Fiber, FiberArena, FiberId};
use crate::surface::{Surface, SurfaceId};

use super::queue::{Priority, QueueList, WorkQueue};

/// Errors raised when constructing a [`Brain`].
#[derive(Debug, thiserror::Error)]
pub enum BrainError {
    /// A second brain was constructed while another is live. There is no
    /// recovery; it indicates a hosting bug.
    #[error("a second brain was initialized while one is already live; a process has exactly one")]
    SecondBrain,
}

static LIVE_BRAINS: AtomicUsize = AtomicUsize::new(0);

/// Releases the process-wide authority slot when the owning brain drops.
#[derive(Debug)]
struct AuthoritySlot;

impl Drop for AuthoritySlot {
    fn drop(&mut self) {
        LIVE_BRAINS.fetch_sub(1, Ordering::Release);
    }
}

/// The coordinating authority: owns every root fiber, the fiber arena, and
/// the ordered list of pending work queues.
///
/// Dispatch is synchronous and run-to-completion: a call to
/// [`schedule_work`](Self::schedule_work) drains its own queue (and any still
/// pending ahead of it) before returning, so an in-flight build is never
/// interrupted by later-scheduled higher-priority work. The queue ordering
/// contract is designed so a cooperative yield point could be inserted
/// between targets without changing queue semantics.
#[derive(Debug)]
pub struct Brain {
    arena: FiberArena,
    roots: HashMap<SurfaceId, FiberId>,
    queues: QueueList,
    next_queue_id: u64,
    _authority: Option<AuthoritySlot>,
}

impl Brain {
    /// Claim the process-wide authority slot and construct the brain.
    ///
    /// Exactly one brain may be live at a time; a second call while one is
    /// live fails with [`BrainError::SecondBrain`]. Dropping the brain
    /// releases the slot.
    pub fn new() -> Result<Self, BrainError> {
        LIVE_BRAINS
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| BrainError::SecondBrain)?;
        Ok(Self::build_instance(Some(AuthoritySlot)))
    }

    /// Construct a brain outside the process-wide authority slot.
    ///
    /// For tests and embedded hosts that manage their own single-authority
    /// discipline. The scheduler behaves identically, it just doesn't
    /// contend for the global slot.
    pub fn detached() -> Self {
        Self::build_instance(None)
    }

    fn build_instance(authority: Option<AuthoritySlot>) -> Self {
        Self {
            arena: FiberArena::new(),
            roots: HashMap::new(),
            queues: QueueList::new(),
            next_queue_id: 0,
            _authority: authority,
        }
    }

    /// Look up the root fiber for `surface`, creating and registering one if
    /// none exists. Idempotent; schedules nothing.
    pub fn resolve_root(&mut self, surface: &Surface) -> FiberId {
        if let Some(&root) = self.roots.get(&surface.id()) {
            return root;
        }
        let root = self.arena.insert(Fiber::root(surface.id()));
        self.roots.insert(surface.id(), root);
        debug!("created root fiber for surface {:?}", surface.id());
        root
    }

    /// The root fiber already associated with `surface`, if any.
    pub fn root_of(&self, surface: &Surface) -> Option<FiberId> {
        self.roots.get(&surface.id()).copied()
    }

    /// Iterate every registered (surface, root) association.
    pub fn roots(&self) -> impl Iterator<Item = (SurfaceId, FiberId)> + '_ {
        self.roots.iter().map(|(&surface, &root)| (surface, root))
    }

    /// Read access to the fiber tree, for the attachment layer and tests.
    ///
    /// By the time any `schedule_work` call returns, every fiber reachable
    /// from its root has a fully linked child/sibling/parent structure.
    pub fn fibers(&self) -> &FiberArena {
        &self.arena
    }

    /// Schedule `children` to be built under `root` and drain the queue.
    ///
    /// Render/update work is not urgent by default: the queue is created at
    /// [`Priority::Low`] and spliced into the pending list in priority/age
    /// order.
    pub fn schedule_work(&mut self, root: FiberId, children: impl Into<Children>) {
        self.schedule_with_priority(root, children.into(), Priority::Low);
    }

    fn schedule_with_priority(&mut self, root: FiberId, children: Children, priority: Priority) {
        let mut queue = WorkQueue::new(self.next_queue_id, priority);
        self.next_queue_id += 1;

        if let Some(fiber) = self.arena.get_mut(root) {
            fiber.pending = children.normalized();
        }
        queue.push_target(root);
        self.queues.insert(queue);

        // There is work to do, so start doing it.
        self.dispatch();
    }

    /// Drain pending queues in order, building every target of each.
    fn dispatch(&mut self) {
        while let Some(mut queue) = self.queues.pop() {
            queue.mark_started();
            debug!(
                "dispatching work queue {} ({:?}, {} target(s))",
                queue.id(),
                queue.priority(),
                queue.targets().len()
            );
            for target in queue.take_targets() {
                build(&mut self.arena, target);
            }
            // Dropping the queue retires it.
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{create_element, Attributes};
    use crate::fiber::FiberKind;

    // The only test that touches the global authority slot; everything else
    // uses `Brain::detached` so the suite can run in parallel.
    #[test]
    fn second_live_brain_fails_fast() {
        let first = Brain::new().expect("first brain claims the slot");
        assert!(matches!(Brain::new(), Err(BrainError::SecondBrain)));
        drop(first);
        let second = Brain::new().expect("slot is free again after drop");
        drop(second);
    }

    #[test]
    fn resolve_root_is_idempotent() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let first = brain.resolve_root(&surface);
        let second = brain.resolve_root(&surface);
        assert_eq!(first, second);
        assert_eq!(brain.roots().count(), 1);
    }

    #[test]
    fn resolve_root_registers_one_root_per_surface() {
        let mut brain = Brain::detached();
        let a = brain.resolve_root(&Surface::new());
        let b = brain.resolve_root(&Surface::new());
        assert_ne!(a, b);
        assert_eq!(brain.roots().count(), 2);
    }

    #[test]
    fn root_of_reports_only_registered_surfaces() {
        let mut brain = Brain::detached();
        let known = Surface::new();
        let unknown = Surface::new();
        let root = brain.resolve_root(&known);
        assert_eq!(brain.root_of(&known), Some(root));
        assert_eq!(brain.root_of(&unknown), None);
    }

    #[test]
    fn schedule_work_builds_the_tree_before_returning() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = brain.resolve_root(&surface);
        brain.schedule_work(root, create_element("h1", Attributes::new(), "Hello World!"));

        let fibers = brain.fibers();
        let h1 = fibers.get(root).unwrap().child().expect("root has a child");
        assert!(matches!(
            fibers.get(h1).unwrap().kind(),
            FiberKind::Host { tag, .. } if tag == "h1"
        ));
        assert!(brain.queues.is_empty());
    }

    #[test]
    fn consecutive_schedules_drain_in_creation_order() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = brain.resolve_root(&surface);
        brain.schedule_work(root, create_element("p", Attributes::new(), "first"));
        brain.schedule_work(root, create_element("p", Attributes::new(), "second"));

        // Run-to-completion: the second schedule replaces the first build's
        // pending work, and the tree reflects the latest call.
        let fibers = brain.fibers();
        let p = fibers.get(root).unwrap().child().unwrap();
        let text = fibers.get(p).unwrap().child().unwrap();
        assert_eq!(fibers.get(text).unwrap().text_content(), Some("second"));
        // The first build's chain was released along with its child link.
        assert_eq!(fibers.len(), 3);
    }

    #[test]
    fn schedule_work_on_a_stale_root_is_a_noop() {
        let mut brain = Brain::detached();
        let surface = Surface::new();
        let root = brain.resolve_root(&surface);
        brain.arena.remove_subtree(root);
        brain.schedule_work(root, "orphaned");
        assert!(brain.fibers().is_empty());
    }

    #[test]
    fn queue_ids_are_monotonic() {
        let mut brain = Brain::detached();
        let root = brain.resolve_root(&Surface::new());
        brain.schedule_work(root, "a");
        brain.schedule_work(root, "b");
        assert_eq!(brain.next_queue_id, 2);
    }
}
