//! Type-keyed registry of state nodes and the transition arena.

use super::handle::{NodeId, TransitionId};
use crate::core::{Predicate, State, StateKind};
use std::any::TypeId;
use std::collections::HashMap;
use uuid::Uuid;

/// One state kind: its owned instance plus local transitions in priority order.
pub(crate) struct Node {
    pub(crate) kind: StateKind,
    pub(crate) state: Box<dyn State>,
    pub(crate) transitions: Vec<TransitionId>,
}

/// Directed edge to `target`, guarded by `condition`.
pub(crate) struct TransitionRecord {
    pub(crate) target: NodeId,
    pub(crate) condition: Box<dyn Predicate>,
}

/// Owns every node and transition of a machine.
///
/// Nodes and transitions live in append-only arenas, so `NodeId` and
/// `TransitionId` values stay valid for as long as the graph does.
pub(crate) struct StateGraph {
    machine: Uuid,
    index: HashMap<TypeId, NodeId>,
    nodes: Vec<Node>,
    transitions: Vec<TransitionRecord>,
}

impl StateGraph {
    pub(crate) fn new(machine: Uuid) -> Self {
        Self {
            machine,
            index: HashMap::new(),
            nodes: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Node for `state`'s kind, creating it on first sight.
    ///
    /// If the kind is already known the passed instance is dropped and the
    /// stored one keeps serving.
    pub(crate) fn get_or_insert<S: State>(&mut self, state: S) -> NodeId {
        let kind = StateKind::of::<S>();
        if let Some(&id) = self.index.get(&kind.type_id()) {
            tracing::debug!(
                kind = kind.name(),
                "state kind already registered, discarding new instance"
            );
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            state: Box::new(state),
            transitions: Vec::new(),
        });
        self.index.insert(kind.type_id(), id);
        tracing::debug!(kind = kind.name(), node = id.0, "registered state kind");
        id
    }

    pub(crate) fn lookup(&self, type_id: TypeId) -> Option<NodeId> {
        self.index.get(&type_id).copied()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Store a transition record and hand back its handle.
    ///
    /// The record is not attached anywhere; callers put the handle on a node
    /// or on the global list.
    pub(crate) fn push_transition(
        &mut self,
        target: NodeId,
        condition: Box<dyn Predicate>,
    ) -> TransitionId {
        let id = TransitionId::new(self.machine, self.transitions.len());
        self.transitions.push(TransitionRecord { target, condition });
        id
    }

    /// Attach a new local transition to `from`.
    pub(crate) fn add_local(
        &mut self,
        from: NodeId,
        to: NodeId,
        condition: Box<dyn Predicate>,
    ) -> TransitionId {
        let id = self.push_transition(to, condition);
        self.node_mut(from).transitions.push(id);
        id
    }

    pub(crate) fn target(&self, id: TransitionId) -> NodeId {
        self.transitions[id.index()].target
    }

    /// First handle in `candidates` whose guard passes, in list order.
    pub(crate) fn first_passing(&self, candidates: &[TransitionId]) -> Option<TransitionId> {
        candidates
            .iter()
            .copied()
            .find(|id| self.transitions[id.index()].condition.evaluate())
    }

    /// True if handles minted for `machine` belong to this graph.
    pub(crate) fn owns(&self, machine: Uuid) -> bool {
        self.machine == machine
    }
}
