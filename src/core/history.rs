//! State change history tracking.
//!
//! Only real changes are recorded: the initial enter and self-transitions
//! leave no trace.

use super::state::StateKind;
use crate::machine::TransitionId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// What caused a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TransitionCause {
    /// `set_state` on a running machine.
    Explicit,
    /// A transition local to the previously active state.
    Local(TransitionId),
    /// A global ("any") transition.
    Any(TransitionId),
}

impl TransitionCause {
    /// Transition handle behind the change, if any.
    pub fn transition(&self) -> Option<TransitionId> {
        match self {
            Self::Explicit => None,
            Self::Local(id) | Self::Any(id) => Some(*id),
        }
    }
}

/// Record of a single state change.
#[derive(Clone, Debug, Serialize)]
pub struct StateTransition {
    /// The state being left
    pub from: StateKind,
    /// The state being entered
    pub to: StateKind,
    pub cause: TransitionCause,
    /// Number of completed `update` calls when the change happened
    pub tick: u64,
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered log of state changes.
///
/// # Example
///
/// ```rust
/// use tickfsm::StateMachine;
/// use tickfsm::unit_states;
///
/// unit_states! {
///     struct Idle;
///     struct Walk;
/// }
///
/// let mut machine = StateMachine::new();
/// machine.set_state(Idle);
/// machine.add_transition(Idle, Walk, || true);
/// machine.update().unwrap();
///
/// let path = machine.history().get_path();
/// assert_eq!(path.len(), 2);
/// assert!(path[0].is::<Idle>());
/// assert!(path[1].is::<Walk>());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    #[serde(skip)]
    limit: Option<usize>,
    #[serde(skip)]
    enabled: bool,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    /// Unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
            enabled: true,
        }
    }

    /// History keeping at most `limit` records; the oldest are dropped first.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit: Some(limit),
            enabled: true,
        }
    }

    /// History that records nothing.
    pub fn disabled() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub(crate) fn record(&mut self, transition: StateTransition) {
        if !self.enabled {
            return;
        }
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Recorded changes, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Sequence of kinds visited: the first recorded source followed by every
    /// target. Empty when nothing is recorded.
    pub fn get_path(&self) -> Vec<StateKind> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Wall-clock time between the first and last recorded change.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        (last.timestamp - first.timestamp).to_std().ok()
    }
}
