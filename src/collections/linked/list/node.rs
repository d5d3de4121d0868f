use crate::collections::slot::Slot;

/// Position of a node within the list's arena. Indices are stable: a node
/// keeps its index until it is unlinked, no matter what happens around it.
pub(crate) type NodeIndex = usize;

/// The arena slot permanently occupied by the sentinel.
pub(crate) const SENTINEL: NodeIndex = 0;

/// One member of the circular ring.
///
/// `prev` and `next` are non-owning positional references; the arena owns
/// every node. The payload slot is engaged for every linked data node and
/// permanently empty for the sentinel (and for nodes parked on the free
/// list).
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub payload: Slot<T>,
    pub prev: NodeIndex,
    pub next: NodeIndex,
}
