use crate::error::{ListError, Result};

/// Index of a node in the [`Arena`].
pub(crate) type NodeId = usize;

/// The "no node" index. A link set to `NIL` is never followed.
pub(crate) const NIL: NodeId = usize::MAX;

/// The structural part of a node. Singly and circular lists never read `prev`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
}

impl Link {
    pub(crate) const DETACHED: Link = Link {
        next: NIL,
        prev: NIL,
    };
}

/// Node storage of a list.
///
/// Links and payloads are kept in two parallel vectors so that the topology
/// code can rewire `links` without knowing the element type, and payloads can
/// be moved between nodes without touching any link. A sentinel is a node
/// whose payload is `None`; released slots are recycled through `vacant`.
pub(crate) struct Arena<T> {
    pub(crate) links: Vec<Link>,
    elements: Vec<Option<T>>,
    vacant: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            links: Vec::new(),
            elements: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// An arena holding two detached sentinels, at indices 0 and 1.
    pub(crate) fn with_sentinels() -> Self {
        Self {
            links: vec![Link::DETACHED; 2],
            elements: vec![None, None],
            vacant: Vec::new(),
        }
    }

    pub(crate) fn try_with_sentinels() -> Result<Self> {
        let mut arena = Self::new();
        arena.reserve(2)?;
        arena.alloc(None)?;
        arena.alloc(None)?;
        Ok(arena)
    }

    /// Allocate a detached node holding `element` (or a sentinel for `None`).
    ///
    /// Fails with [`ListError::OutOfMemory`] without touching the arena.
    pub(crate) fn alloc(&mut self, element: Option<T>) -> Result<NodeId> {
        if let Some(id) = self.vacant.pop() {
            self.links[id] = Link::DETACHED;
            self.elements[id] = element;
            return Ok(id);
        }
        if self.links.try_reserve(1).is_err() || self.elements.try_reserve(1).is_err() {
            log::warn!("node arena cannot grow past {} slots", self.links.len());
            return Err(ListError::OutOfMemory);
        }
        self.links.push(Link::DETACHED);
        self.elements.push(element);
        Ok(self.links.len() - 1)
    }

    /// Reserve room for `additional` more nodes.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = additional.saturating_sub(self.vacant.len());
        self.links
            .try_reserve(needed)
            .and_then(|_| self.elements.try_reserve(needed))
            .map_err(|_| ListError::OutOfMemory)
    }

    /// Return the slot of a detached node to the arena, handing back its payload.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<T> {
        self.links[id] = Link::DETACHED;
        self.vacant.push(id);
        self.elements[id].take()
    }

    pub(crate) fn element(&self, id: NodeId) -> Option<&T> {
        self.elements[id].as_ref()
    }

    pub(crate) fn take_element(&mut self, id: NodeId) -> Option<T> {
        self.elements[id].take()
    }

    pub(crate) fn put_element(&mut self, id: NodeId, element: T) {
        debug_assert!(self.elements[id].is_none(), "payload slot is occupied");
        self.elements[id] = Some(element);
    }

    /// Swap the payloads of two nodes, leaving links untouched.
    pub(crate) fn swap_elements(&mut self, a: NodeId, b: NodeId) {
        self.elements.swap(a, b);
    }
}
