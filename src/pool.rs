//! Paged node pool with an intrusive free chain.
//!
//! Nodes live in fixed-size pages that are never moved or released once allocated, so a
//! [`NodeId`] stays valid for the lifetime of the pool. Every slot carries a `pool_next`
//! link; together the links thread all slots of all pages, in allocation order, into one
//! chain. Issuing a node only advances the chain head and never rewrites a link, so the
//! chain is permanently stable once built. [`NodePool::reset`] exploits this: rewinding the
//! head to the first slot ever allocated reclaims every node of every page in O(1).
//!
//! Pages are appended one slot ahead of exhaustion: the head always has a successor, so the
//! chain tail is never handed out and a new page can always be linked behind it.

use tracing::{debug, trace};

use crate::coordinate::{Bounds, Coordinate, Scalar};
use crate::node::Node;

/// Stable handle to a node slot in the pool.
///
/// Indices are flat across pages: `page * page_size + slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Slot<S: Scalar> {
    node: Node<S>,
    /// Successor in the free chain. Only written when the slot's page is created or when a
    /// new page is linked behind it.
    pool_next: Option<NodeId>,
    /// Pool generation the slot was last issued in.
    generation: u64,
}

/// Slab allocator backing all tree nodes.
#[derive(Clone, Debug)]
pub(crate) struct NodePool<S: Scalar> {
    pages: Vec<Box<[Slot<S>]>>,
    page_size: usize,
    /// Next slot to issue.
    head: Option<NodeId>,
    /// First slot ever allocated; `reset` rewinds `head` here.
    root: Option<NodeId>,
    generation: u64,
    /// Nodes issued since the last reset.
    allocated: usize,
}

impl<S: Scalar> NodePool<S> {
    /// Creates an empty pool. No page is allocated until the first node is requested.
    pub(crate) fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be non-zero");
        Self {
            pages: Vec::with_capacity(8),
            page_size,
            head: None,
            root: None,
            generation: 0,
            allocated: 0,
        }
    }

    /// Appends one page and links it behind the current chain head.
    fn allocate_page(&mut self) {
        let base = self.pages.len() * self.page_size;
        let last = self.page_size - 1;
        let page: Box<[Slot<S>]> = (0..self.page_size)
            .map(|i| Slot {
                node: Node::undefined(),
                pool_next: (i < last).then(|| NodeId(base + i + 1)),
                generation: 0,
            })
            .collect();
        self.pages.push(page);

        let first = NodeId(base);
        match self.head {
            None => {
                debug_assert!(self.root.is_none(), "pool has a root but no head");
                self.root = Some(first);
                self.head = Some(first);
            }
            Some(head) => {
                let slot = self.slot_mut(head);
                debug_assert!(slot.pool_next.is_none(), "linking a page behind a non-tail slot");
                slot.pool_next = Some(first);
            }
        }

        debug!(
            pages = self.pages.len(),
            page_size = self.page_size,
            "allocated node page"
        );
    }

    /// Issues the next free slot, reset to the undefined state.
    ///
    /// The slot keeps its `pool_next` link so the chain survives for the next reset.
    pub(crate) fn allocate_node(&mut self) -> NodeId {
        // A page of one slot leaves the head without a successor, so grow until one exists.
        while self.head.is_none_or(|head| self.slot(head).pool_next.is_none()) {
            self.allocate_page();
        }

        let generation = self.generation;
        let Some(id) = self.head else {
            unreachable!("pool head missing after page allocation");
        };
        let slot = self.slot_mut(id);
        slot.node = Node::undefined();
        slot.generation = generation;
        self.head = slot.pool_next;
        self.allocated += 1;
        id
    }

    /// Issues a node initialized as a leaf holding `point`.
    pub(crate) fn allocate_leaf_node(&mut self, point: Coordinate<S>, bounds: Bounds<S>) -> NodeId {
        let id = self.allocate_node();
        self.get_mut(id).initialize_as_leaf(point, bounds);
        id
    }

    /// Issues a node initialized as an empty region.
    pub(crate) fn allocate_region_node(&mut self, bounds: Bounds<S>) -> NodeId {
        let id = self.allocate_node();
        self.get_mut(id).initialize_as_region(bounds);
        id
    }

    /// Reclaims every issued node at once by rewinding the chain head.
    ///
    /// Existing [`NodeId`]s become stale; their slots will be reissued in the same order.
    pub(crate) fn reset(&mut self) {
        trace!(
            reclaimed = self.allocated,
            pages = self.pages.len(),
            "resetting node pool"
        );
        self.head = self.root;
        self.generation = self.generation.wrapping_add(1);
        self.allocated = 0;
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<S> {
        debug_assert!(self.is_current(id), "access to stale node {id:?}");
        &self.slot(id).node
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<S> {
        debug_assert!(self.is_current(id), "access to stale node {id:?}");
        &mut self.slot_mut(id).node
    }

    /// True iff `id` was issued since the last reset.
    #[inline]
    pub(crate) fn is_current(&self, id: NodeId) -> bool {
        self.slot(id).generation == self.generation
    }

    #[inline]
    pub(crate) fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total slots across all pages.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.pages.len() * self.page_size
    }

    #[inline]
    pub(crate) fn allocated(&self) -> usize {
        self.allocated
    }

    #[cfg(test)]
    pub(crate) fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[cfg(test)]
    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).pool_next
    }

    #[inline]
    fn slot(&self, id: NodeId) -> &Slot<S> {
        &self.pages[id.0 / self.page_size][id.0 % self.page_size]
    }

    #[inline]
    fn slot_mut(&mut self, id: NodeId) -> &mut Slot<S> {
        let page_size = self.page_size;
        &mut self.pages[id.0 / page_size][id.0 % page_size]
    }
}
