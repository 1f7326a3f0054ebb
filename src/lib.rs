//! This crate provides a linked list with three topologies (singly-linked,
//! doubly-linked and circular) bounded by two sentinel nodes, and a growable
//! [`Vector`] as a companion container.
//!
//! The [`List`] looks elements up either by position or by *identity*: the
//! identity-relative operations (`insert_before`, `delete_after`, `exchange`,
//! ...) find the first node whose element is the very same object as the
//! anchor, not merely an equal one. See [`Identity`].
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::{List, Topology};
//!
//! let mut list = List::new(Topology::Doubly);
//! list.insert_front(3).unwrap();
//! list.insert_front(2).unwrap();
//! list.insert_front(1).unwrap();
//!
//! list.insert_at(9, 1).unwrap(); // [1, 9, 2, 3]
//! assert_eq!(list.delete_at(0), Ok(1)); // [9, 2, 3]
//!
//! list.sort(0, 3, |a, b| a.cmp(b)).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3, 9]);
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a list live in an arena, addressed by index. Links and
//! payloads are stored apart:
//! ```text
//!   index:     0 (head)      1 (tail)       2              3
//!            ╔═══════════╗ ╔═══════════╗ ╔═══════════╗ ╔═══════════╗
//!   links:   ║ next:  2  ║ ║ next:  -  ║ ║ next:  3  ║ ║ next:  1  ║
//!            ║ prev:  -  ║ ║ prev:  3  ║ ║ prev:  0  ║ ║ prev:  2  ║
//!            ╚═══════════╝ ╚═══════════╝ ╚═══════════╝ ╚═══════════╝
//!            ┌╌╌╌╌╌╌╌╌╌╌╌┐ ┌╌╌╌╌╌╌╌╌╌╌╌┐ ┌───────────┐ ┌───────────┐
//!   payload: ┊No payload ┊ ┊No payload ┊ │ payload T │ │ payload T │
//!            └╌╌╌╌╌╌╌╌╌╌╌┘ └╌╌╌╌╌╌╌╌╌╌╌┘ └───────────┘ └───────────┘
//! ```
//! The picture is a doubly-linked list of two elements. The `List` contains:
//! - the arena, with a free list of released slots;
//! - the indices of the head and tail sentinels;
//! - the number of elements `len`;
//! - its [`Topology`].
//!
//! The sentinels are two ordinary arena slots that have *NO* payload. A
//! singly-linked list keeps only `next` links; a circular one does the same
//! but links the tail sentinel back to the head sentinel. Every walk stops at
//! the tail sentinel, so a circular list is never walked around its ring by
//! accident.
//!
//! Which links exist and how they are rewired is the only thing that differs
//! between the topologies. Each operation is written once against that
//! capability set, so e.g. `insert_back` is *O*(1) on a doubly-linked list
//! and a scan otherwise, with the same code.
//!
//! # Iteration
//!
//! [`Iter`] walks front to back; [`IterRev`] walks back to front, following
//! `prev` links where they exist and an explicit stack otherwise. Both are
//! fused and know their exact length.
//!
//! ```
//! use sentinel_list::{List, Topology};
//!
//! let list = List::from_elements(Topology::Circular, ['A', 'B', 'C']).unwrap();
//! assert_eq!(list.iter().collect::<String>(), "ABC");
//! assert_eq!(list.iter_rev().collect::<String>(), "CBA");
//! ```
//!
//! # Cursor Views
//!
//! A [`Cursor`] can move forward or backward over the list. In a list with
//! length *n*, there are *n* + 1 valid locations for the cursor, indexed by
//! 0, 1, ..., *n*, where *n* is the tail sentinel of the list.
//!
//! # Sharing
//!
//! With the `sync` feature (on by default), [`Shared`] wraps a list or a
//! vector in a mutex for use from several threads.
//!
//! [`Cursor`]: crate::list::cursor::Cursor

#[doc(inline)]
pub use error::{ListError, Result, VectorError};
#[doc(inline)]
pub use identity::Identity;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterRev};
#[doc(inline)]
pub use list::topology::Topology;
#[doc(inline)]
pub use list::List;
#[cfg(feature = "sync")]
#[doc(inline)]
pub use sync::{Shared, SharedList, SharedVector};
#[doc(inline)]
pub use vector::Vector;

pub mod error;
pub mod identity;
pub mod list;
#[cfg(feature = "sync")]
pub mod sync;
pub mod vector;
