//! Per-topology linking rules.
//!
//! Every list operation is written once against the [`Wiring`] capability set;
//! the three implementations only differ in how sentinels are sealed, whether a
//! `prev` link is maintained, and where the ring edge sits.

use crate::error::ListError;
use crate::list::arena::{Link, NodeId, NIL};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The connectivity pattern of a [`List`](crate::List).
///
/// # Examples
///
/// ```
/// use sentinel_list::Topology;
/// use std::convert::TryFrom;
///
/// assert_eq!(Topology::try_from(2), Ok(Topology::Circular));
/// assert_eq!("doubly".parse::<Topology>(), Ok(Topology::Doubly));
/// assert!(Topology::try_from(3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Forward-only chain, ended by the tail sentinel.
    Singly,
    /// Forward and backward chain between the two sentinels.
    Doubly,
    /// Forward-only ring; the tail sentinel links back to the head sentinel.
    Circular,
}

impl Topology {
    /// The numeric tag of the topology: 0 = Singly, 1 = Doubly, 2 = Circular.
    pub fn code(self) -> i32 {
        match self {
            Topology::Singly => 0,
            Topology::Doubly => 1,
            Topology::Circular => 2,
        }
    }

    pub(crate) fn wiring(self) -> &'static dyn Wiring {
        match self {
            Topology::Singly => &SinglyLinks,
            Topology::Doubly => &DoublyLinks,
            Topology::Circular => &CircularLinks,
        }
    }
}

impl TryFrom<i32> for Topology {
    type Error = ListError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Topology::Singly),
            1 => Ok(Topology::Doubly),
            2 => Ok(Topology::Circular),
            _ => {
                log::debug!("unrecognized topology tag {}", code);
                Err(ListError::InvalidTopology(code.to_string()))
            }
        }
    }
}

impl FromStr for Topology {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "singly" => Ok(Topology::Singly),
            "doubly" => Ok(Topology::Doubly),
            "circular" | "circly" => Ok(Topology::Circular),
            _ => Err(ListError::InvalidTopology(s.to_owned())),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Topology::Singly => "singly",
            Topology::Doubly => "doubly",
            Topology::Circular => "circular",
        })
    }
}

/// The capability set a topology provides to the list algorithms.
///
/// `at` arguments are never the tail sentinel, and `node` arguments of
/// `predecessor` are never the head sentinel.
pub(crate) trait Wiring: Sync {
    /// Wire the two sentinels of an empty list.
    fn seal(&self, links: &mut [Link], head: NodeId, tail: NodeId) {
        links[head] = Link { next: tail, prev: NIL };
        links[tail] = Link::DETACHED;
        self.close(links, head, tail);
    }

    /// Restore the edge leaving the tail sentinel.
    fn close(&self, _links: &mut [Link], _head: NodeId, _tail: NodeId) {}

    #[inline]
    fn advance(&self, links: &[Link], id: NodeId) -> NodeId {
        links[id].next
    }

    /// Whether a forward walk has to stop at `id`.
    #[inline]
    fn is_boundary(&self, _head: NodeId, tail: NodeId, id: NodeId) -> bool {
        id == tail
    }

    fn link_after(&self, links: &mut [Link], at: NodeId, node: NodeId) {
        links[node].next = links[at].next;
        links[at].next = node;
    }

    fn unlink_after(&self, links: &mut [Link], at: NodeId) -> NodeId {
        let node = links[at].next;
        links[at].next = links[node].next;
        node
    }

    /// The node whose forward link is `node`.
    fn predecessor(&self, links: &[Link], head: NodeId, node: NodeId) -> NodeId {
        let mut at = head;
        while links[at].next != node {
            at = links[at].next;
        }
        at
    }

    /// The backward link of `id`, if the topology keeps one.
    fn backward(&self, _links: &[Link], _id: NodeId) -> Option<NodeId> {
        None
    }

    /// One step of an in-place reversal: `link` used to lead to `next` and must
    /// now lead to `prev`.
    fn relink(&self, link: &mut Link, prev: NodeId, _next: NodeId) {
        link.next = prev;
    }
}

pub(crate) struct SinglyLinks;

pub(crate) struct DoublyLinks;

pub(crate) struct CircularLinks;

impl Wiring for SinglyLinks {}

impl Wiring for DoublyLinks {
    fn seal(&self, links: &mut [Link], head: NodeId, tail: NodeId) {
        links[head] = Link { next: tail, prev: NIL };
        links[tail] = Link { next: NIL, prev: head };
    }

    fn link_after(&self, links: &mut [Link], at: NodeId, node: NodeId) {
        let next = links[at].next;
        links[node] = Link { next, prev: at };
        links[at].next = node;
        links[next].prev = node;
    }

    fn unlink_after(&self, links: &mut [Link], at: NodeId) -> NodeId {
        let node = links[at].next;
        let next = links[node].next;
        links[at].next = next;
        links[next].prev = at;
        node
    }

    #[inline]
    fn predecessor(&self, links: &[Link], _head: NodeId, node: NodeId) -> NodeId {
        links[node].prev
    }

    #[inline]
    fn backward(&self, links: &[Link], id: NodeId) -> Option<NodeId> {
        Some(links[id].prev)
    }

    fn relink(&self, link: &mut Link, prev: NodeId, next: NodeId) {
        link.next = prev;
        link.prev = next;
    }
}

impl Wiring for CircularLinks {
    fn close(&self, links: &mut [Link], head: NodeId, tail: NodeId) {
        links[tail].next = head;
    }

    // The ring edge leads from the tail back to the head; reaching either
    // sentinel ends a walk.
    #[inline]
    fn is_boundary(&self, head: NodeId, tail: NodeId, id: NodeId) -> bool {
        id == tail || id == head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sealed(topology: Topology) -> Vec<Link> {
        let mut links = vec![Link::DETACHED; 4];
        topology.wiring().seal(&mut links, 0, 1);
        links
    }

    #[test]
    fn topology_seal() {
        let links = sealed(Topology::Singly);
        assert_eq!(links[0].next, 1);
        assert_eq!(links[1].next, NIL);

        let links = sealed(Topology::Doubly);
        assert_eq!((links[0].next, links[1].prev), (1, 0));
        assert_eq!((links[0].prev, links[1].next), (NIL, NIL));

        let links = sealed(Topology::Circular);
        assert_eq!((links[0].next, links[1].next), (1, 0));
    }

    #[test]
    fn topology_link_and_unlink() {
        for &topology in &[Topology::Singly, Topology::Doubly, Topology::Circular] {
            let wiring = topology.wiring();
            let mut links = sealed(topology);
            wiring.link_after(&mut links, 0, 2);
            wiring.link_after(&mut links, 2, 3);
            assert_eq!(wiring.advance(&links, 0), 2);
            assert_eq!(wiring.advance(&links, 2), 3);
            assert_eq!(wiring.advance(&links, 3), 1);
            assert_eq!(wiring.predecessor(&links, 0, 1), 3);
            assert_eq!(wiring.predecessor(&links, 0, 3), 2);

            assert_eq!(wiring.unlink_after(&mut links, 0), 2);
            assert_eq!(wiring.advance(&links, 0), 3);
            assert_eq!(wiring.predecessor(&links, 0, 3), 0);
            assert!(wiring.is_boundary(0, 1, 1));
            assert!(!wiring.is_boundary(0, 1, 3));
        }
    }

    #[test]
    fn topology_tags() {
        for &topology in &[Topology::Singly, Topology::Doubly, Topology::Circular] {
            assert_eq!(Topology::try_from(topology.code()), Ok(topology));
            assert_eq!(topology.to_string().parse::<Topology>(), Ok(topology));
        }
        assert_eq!(
            Topology::try_from(-1),
            Err(ListError::InvalidTopology("-1".into()))
        );
        assert!("ring".parse::<Topology>().is_err());
    }
}
