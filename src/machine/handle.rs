//! Stable handles into a machine's arenas.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// Index of a node in the graph arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// Handle to a registered transition.
///
/// Equality is handle identity: two transitions with the same source, target
/// and an equivalent guard still get distinct ids. The owning machine's id is
/// part of the handle, so a handle never matches inside another machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TransitionId {
    machine: Uuid,
    index: usize,
}

impl TransitionId {
    pub(crate) fn new(machine: Uuid, index: usize) -> Self {
        Self { machine, index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Id of the machine that created this handle.
    pub fn machine(&self) -> Uuid {
        self.machine
    }
}

impl fmt::Debug for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitionId({})", self.index)
    }
}

/// Typed handle to the node holding the instance of state kind `S`.
pub struct StateRef<S> {
    machine: Uuid,
    node: NodeId,
    _kind: PhantomData<fn() -> S>,
}

impl<S> StateRef<S> {
    pub(crate) fn new(machine: Uuid, node: NodeId) -> Self {
        Self {
            machine,
            node,
            _kind: PhantomData,
        }
    }

    pub(crate) fn node(&self) -> NodeId {
        self.node
    }

    /// Id of the machine that created this handle.
    pub fn machine(&self) -> Uuid {
        self.machine
    }
}

impl<S> Clone for StateRef<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StateRef<S> {}

impl<S> PartialEq for StateRef<S> {
    fn eq(&self, other: &Self) -> bool {
        self.machine == other.machine && self.node == other.node
    }
}

impl<S> Eq for StateRef<S> {}

impl<S> Hash for StateRef<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.machine.hash(state);
        self.node.hash(state);
    }
}

impl<S> fmt::Debug for StateRef<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRef")
            .field("kind", &std::any::type_name::<S>())
            .field("node", &self.node.0)
            .finish()
    }
}
