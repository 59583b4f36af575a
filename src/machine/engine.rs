//! Tick-driven state machine.

use super::error::MachineError;
use super::graph::StateGraph;
use super::handle::{NodeId, StateRef, TransitionId};
use crate::builder::MachineConfig;
use crate::core::{Predicate, State, StateHistory, StateKind, StateTransition, TransitionCause};
use chrono::Utc;
use std::any::{Any, TypeId};
use std::fmt;
use uuid::Uuid;

/// Outcome of a single [`StateMachine::update`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// No guard passed; the active state only ran its update hook.
    Stayed,

    /// A transition was selected but it targets the active state, so no
    /// lifecycle hooks fired.
    Held(TransitionId),

    /// The active state changed.
    Transitioned {
        transition: TransitionId,
        from: StateKind,
        to: StateKind,
    },
}

impl StepResult {
    /// True if the active state changed during the step.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Finite state machine with one node per state kind.
///
/// The host owns the loop: wire states and transitions, pick the initial
/// state with [`set_state`](Self::set_state), then call
/// [`update`](Self::update) once per tick.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickfsm::{unit_states, StateMachine, StepResult};
///
/// unit_states! {
///     struct Idle;
///     struct Running;
///     struct Dead;
/// }
///
/// let health = Rc::new(Cell::new(3));
/// let mut machine = StateMachine::new();
///
/// machine.set_state(Idle);
/// machine.add_transition(Idle, Running, || true);
/// let died = {
///     let health = Rc::clone(&health);
///     machine.add_any_transition(Dead, move || health.get() == 0)
/// };
///
/// machine.update().unwrap();
/// assert!(machine.is_current::<Running>());
///
/// health.set(0);
/// let step = machine.update().unwrap();
/// assert!(machine.is_current::<Dead>());
/// assert!(matches!(step, StepResult::Transitioned { transition, .. } if transition == died));
/// ```
pub struct StateMachine {
    id: Uuid,
    name: String,
    graph: StateGraph,
    any_transitions: Vec<TransitionId>,
    current: Option<NodeId>,
    history: StateHistory,
    ticks: u64,
}

impl StateMachine {
    /// Create an empty machine with default configuration.
    pub fn new() -> Self {
        Self::with_config(&MachineConfig::default())
    }

    pub(crate) fn with_config(config: &MachineConfig) -> Self {
        let id = Uuid::new_v4();
        let history = match (config.record_history, config.history_limit) {
            (false, _) => StateHistory::disabled(),
            (true, Some(limit)) => StateHistory::bounded(limit),
            (true, None) => StateHistory::new(),
        };
        tracing::debug!(machine = %config.name, %id, "created state machine");

        Self {
            id,
            name: config.name.clone(),
            graph: StateGraph::new(id),
            any_transitions: Vec::new(),
            current: None,
            history,
            ticks: 0,
        }
    }

    /// Unique id of this machine; every handle it creates carries it.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of completed `update` calls.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register `state`'s kind without activating it.
    ///
    /// If the kind is already registered, `state` is dropped and the handle
    /// points at the stored instance.
    pub fn register<S: State>(&mut self, state: S) -> StateRef<S> {
        StateRef::new(self.id, self.graph.get_or_insert(state))
    }

    /// Make `state`'s kind the active state.
    ///
    /// On a fresh machine this enters the state (no exit hook runs). On a
    /// running machine it behaves like a transition to that kind: nothing
    /// happens if the kind is already active, otherwise the active state
    /// exits and the target enters.
    pub fn set_state<S: State>(&mut self, state: S) -> StateRef<S> {
        let node = self.graph.get_or_insert(state);
        self.activate(node);
        StateRef::new(self.id, node)
    }

    /// Same as [`set_state`](Self::set_state) for an already registered kind.
    pub fn set_state_ref<S: State>(&mut self, state: &StateRef<S>) -> Result<(), MachineError> {
        self.check_handle(state.machine())?;
        self.activate(state.node());
        Ok(())
    }

    /// Add a transition from `from`'s kind to `to`'s kind, evaluated only
    /// while `from`'s kind is active.
    ///
    /// Both kinds are registered if needed. Transitions on the same source
    /// are tried in the order they were added; the first passing guard wins.
    pub fn add_transition<F, T, P>(&mut self, from: F, to: T, condition: P) -> TransitionId
    where
        F: State,
        T: State,
        P: Predicate + 'static,
    {
        let from = self.graph.get_or_insert(from);
        let to = self.graph.get_or_insert(to);
        self.attach_local(from, to, Box::new(condition))
    }

    /// Same as [`add_transition`](Self::add_transition) using handles from
    /// [`register`](Self::register) or [`set_state`](Self::set_state).
    pub fn add_transition_between<F, T, P>(
        &mut self,
        from: &StateRef<F>,
        to: &StateRef<T>,
        condition: P,
    ) -> Result<TransitionId, MachineError>
    where
        F: State,
        T: State,
        P: Predicate + 'static,
    {
        self.check_handle(from.machine())?;
        self.check_handle(to.machine())?;
        Ok(self.attach_local(from.node(), to.node(), Box::new(condition)))
    }

    /// Add a global transition to `to`'s kind.
    ///
    /// Global transitions are tried every tick, in the order they were
    /// added, before any transition of the active state.
    pub fn add_any_transition<T, P>(&mut self, to: T, condition: P) -> TransitionId
    where
        T: State,
        P: Predicate + 'static,
    {
        let to = self.graph.get_or_insert(to);
        let id = self.graph.push_transition(to, Box::new(condition));
        self.any_transitions.push(id);
        tracing::debug!(
            machine = %self.name,
            to = self.graph.node(to).kind.name(),
            "added any transition"
        );
        id
    }

    fn attach_local(
        &mut self,
        from: NodeId,
        to: NodeId,
        condition: Box<dyn Predicate>,
    ) -> TransitionId {
        let id = self.graph.add_local(from, to, condition);
        tracing::debug!(
            machine = %self.name,
            from = self.graph.node(from).kind.name(),
            to = self.graph.node(to).kind.name(),
            "added transition"
        );
        id
    }

    fn check_handle(&self, machine: Uuid) -> Result<(), MachineError> {
        if self.graph.owns(machine) {
            Ok(())
        } else {
            Err(MachineError::ForeignHandle {
                machine: self.name.clone(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Driving
    // ------------------------------------------------------------------

    /// Run one tick.
    ///
    /// 1. Global transitions are tried in order; the first passing one is taken.
    /// 2. Otherwise the active state's transitions are tried the same way.
    /// 3. If the taken transition targets another state, the active state
    ///    exits and the target enters.
    /// 4. The (possibly new) active state runs its update hook.
    ///
    /// Fails with [`MachineError::Uninitialized`] if no state was ever set;
    /// no guard is evaluated in that case.
    pub fn update(&mut self) -> Result<StepResult, MachineError> {
        let current = self.current.ok_or_else(|| MachineError::Uninitialized {
            machine: self.name.clone(),
        })?;

        let step = match self.select(current) {
            Some((transition, cause)) => {
                let target = self.graph.target(transition);
                if self.change_state(target, cause) {
                    StepResult::Transitioned {
                        transition,
                        from: self.graph.node(current).kind,
                        to: self.graph.node(target).kind,
                    }
                } else {
                    StepResult::Held(transition)
                }
            }
            None => StepResult::Stayed,
        };

        let active = self.current.unwrap_or(current);
        self.graph.node_mut(active).state.on_update();
        self.ticks += 1;

        tracing::trace!(machine = %self.name, tick = self.ticks, ?step, "tick complete");
        Ok(step)
    }

    fn select(&self, current: NodeId) -> Option<(TransitionId, TransitionCause)> {
        if let Some(id) = self.graph.first_passing(&self.any_transitions) {
            return Some((id, TransitionCause::Any(id)));
        }
        let local = &self.graph.node(current).transitions;
        self.graph
            .first_passing(local)
            .map(|id| (id, TransitionCause::Local(id)))
    }

    fn activate(&mut self, node: NodeId) {
        if self.current.is_none() {
            self.current = Some(node);
            let entered = self.graph.node_mut(node);
            tracing::debug!(machine = %self.name, state = entered.kind.name(), "entering initial state");
            entered.state.on_enter();
            return;
        }
        self.change_state(node, TransitionCause::Explicit);
    }

    /// Exit the active state and enter `target`. Returns false, without
    /// touching any hook, when `target` is already active.
    fn change_state(&mut self, target: NodeId, cause: TransitionCause) -> bool {
        let Some(previous) = self.current else {
            return false;
        };
        if previous == target {
            return false;
        }

        let from = self.graph.node(previous).kind;
        let to = self.graph.node(target).kind;

        self.graph.node_mut(previous).state.on_exit();
        self.current = Some(target);
        self.graph.node_mut(target).state.on_enter();

        tracing::debug!(
            machine = %self.name,
            from = from.name(),
            to = to.name(),
            tick = self.ticks,
            "state changed"
        );
        self.history.record(StateTransition {
            from,
            to,
            cause,
            tick: self.ticks,
            timestamp: Utc::now(),
        });
        true
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The active state, or `None` before the first `set_state`.
    pub fn current_state(&self) -> Option<&dyn State> {
        self.current.map(|node| self.graph.node(node).state.as_ref())
    }

    pub fn current_kind(&self) -> Option<StateKind> {
        self.current.map(|node| self.graph.node(node).kind)
    }

    /// True if `state` is the very instance stored in the active node.
    ///
    /// This is instance identity, not kind equality: a fresh value of the
    /// active kind is not the current state. Use [`is_current`](Self::is_current)
    /// to check by kind.
    ///
    /// Zero-sized states all live at the same address, so the concrete type
    /// is compared as well. Two values of one zero-sized kind cannot be told
    /// apart.
    pub fn is_current_state(&self, state: &dyn State) -> bool {
        self.current_state().is_some_and(|current| {
            Any::type_id(current.as_any()) == Any::type_id(state.as_any())
                && std::ptr::eq(
                    current as *const dyn State as *const (),
                    state as *const dyn State as *const (),
                )
        })
    }

    /// True if the active state is of kind `S`.
    pub fn is_current<S: State>(&self) -> bool {
        self.current_kind().is_some_and(|kind| kind.is::<S>())
    }

    /// True if `state` points at the active node of this machine.
    pub fn is_current_ref<S: State>(&self, state: &StateRef<S>) -> bool {
        self.graph.owns(state.machine()) && self.current == Some(state.node())
    }

    /// True if `transition` is one of the global transitions.
    pub fn has_any_transition(&self, transition: TransitionId) -> bool {
        self.any_transitions.contains(&transition)
    }

    /// True if `transition` belongs to the active state. False when no state
    /// is active.
    pub fn has_current_transition(&self, transition: TransitionId) -> bool {
        self.current
            .is_some_and(|node| self.graph.node(node).transitions.contains(&transition))
    }

    /// True if `transition` belongs to kind `S`, whichever state is active.
    /// False when `S` was never registered.
    pub fn has_transition<S: State>(&self, transition: TransitionId) -> bool {
        self.graph
            .lookup(TypeId::of::<S>())
            .is_some_and(|node| self.graph.node(node).transitions.contains(&transition))
    }

    /// True if kind `S` has a node in this machine.
    pub fn has_state<S: State>(&self) -> bool {
        self.graph.lookup(TypeId::of::<S>()).is_some()
    }

    /// Number of registered state kinds.
    pub fn state_count(&self) -> usize {
        self.graph.len()
    }

    /// Handle to the node of kind `S`, if registered.
    pub fn state_ref<S: State>(&self) -> Option<StateRef<S>> {
        self.graph
            .lookup(TypeId::of::<S>())
            .map(|node| StateRef::new(self.id, node))
    }

    /// The stored instance of kind `S`, if registered.
    pub fn state<S: State>(&self) -> Option<&S> {
        let node = self.graph.lookup(TypeId::of::<S>())?;
        self.graph
            .node(node)
            .state
            .as_ref()
            .as_any()
            .downcast_ref::<S>()
    }

    pub fn state_mut<S: State>(&mut self) -> Option<&mut S> {
        let node = self.graph.lookup(TypeId::of::<S>())?;
        self.graph
            .node_mut(node)
            .state
            .as_mut()
            .as_any_mut()
            .downcast_mut::<S>()
    }

    /// The instance behind `state`, or `None` for a handle from another machine.
    pub fn get<S: State>(&self, state: &StateRef<S>) -> Option<&S> {
        if !self.graph.owns(state.machine()) {
            return None;
        }
        self.graph
            .node(state.node())
            .state
            .as_ref()
            .as_any()
            .downcast_ref::<S>()
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("current", &self.current_kind())
            .field("states", &self.graph.len())
            .field("any_transitions", &self.any_transitions.len())
            .field("ticks", &self.ticks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every hook call as "<label>.<hook>".
    struct Recorder<const N: u8> {
        label: &'static str,
        log: Log,
    }

    impl<const N: u8> Recorder<N> {
        fn new(label: &'static str, log: &Log) -> Self {
            Self {
                label,
                log: Rc::clone(log),
            }
        }

        fn push(&self, hook: &str) {
            self.log.borrow_mut().push(format!("{}.{}", self.label, hook));
        }
    }

    impl<const N: u8> State for Recorder<N> {
        fn on_enter(&mut self) {
            self.push("enter");
        }

        fn on_update(&mut self) {
            self.push("update");
        }

        fn on_exit(&mut self) {
            self.push("exit");
        }
    }

    type Idle = Recorder<0>;
    type Running = Recorder<1>;
    type Dead = Recorder<2>;

    fn log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn fresh_machine_has_no_current_state() {
        let machine = StateMachine::new();

        assert!(machine.current_state().is_none());
        assert!(machine.current_kind().is_none());
        assert_eq!(machine.state_count(), 0);
    }

    #[test]
    fn update_before_set_state_fails() {
        let log = log();
        let mut machine = StateMachine::new();
        let evaluated = Rc::new(Cell::new(false));
        {
            let evaluated = Rc::clone(&evaluated);
            machine.add_any_transition(Idle::new("idle", &log), move || {
                evaluated.set(true);
                true
            });
        }

        let result = machine.update();

        assert!(matches!(result, Err(MachineError::Uninitialized { .. })));
        assert!(!evaluated.get());
        assert!(entries(&log).is_empty());
        assert_eq!(machine.ticks(), 0);
    }

    #[test]
    fn set_state_enters_once_without_exit() {
        let log = log();
        let mut machine = StateMachine::new();

        let idle = machine.set_state(Idle::new("idle", &log));

        assert!(machine.is_current_ref(&idle));
        assert!(machine.is_current::<Idle>());
        assert_eq!(entries(&log), vec!["idle.enter"]);
    }

    #[test]
    fn firing_transition_runs_exit_enter_update_in_order() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        let to_running = machine.add_transition(
            Idle::new("idle", &log),
            Running::new("running", &log),
            || true,
        );
        log.borrow_mut().clear();

        let step = machine.update().unwrap();

        assert_eq!(
            entries(&log),
            vec!["idle.exit", "running.enter", "running.update"]
        );
        assert_eq!(
            step,
            StepResult::Transitioned {
                transition: to_running,
                from: StateKind::of::<Idle>(),
                to: StateKind::of::<Running>(),
            }
        );
        assert!(machine.is_current::<Running>());
    }

    #[test]
    fn no_passing_guard_only_updates() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        machine.add_transition(
            Idle::new("idle", &log),
            Running::new("running", &log),
            Guard::never(),
        );
        log.borrow_mut().clear();

        assert_eq!(machine.update().unwrap(), StepResult::Stayed);
        assert_eq!(entries(&log), vec!["idle.update"]);
    }

    #[test]
    fn self_transition_fires_no_lifecycle_hooks() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        let looping =
            machine.add_transition(Idle::new("idle", &log), Idle::new("idle", &log), || true);
        let before = machine.current_state().map(|s| s as *const dyn State as *const ());
        log.borrow_mut().clear();

        let step = machine.update().unwrap();

        let after = machine.current_state().map(|s| s as *const dyn State as *const ());
        assert_eq!(step, StepResult::Held(looping));
        assert_eq!(entries(&log), vec!["idle.update"]);
        assert_eq!(before, after);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn set_state_on_active_kind_is_a_no_op() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        machine.set_state(Idle::new("other idle", &log));

        assert_eq!(entries(&log), vec!["idle.enter"]);
        assert_eq!(machine.state::<Idle>().map(|s| s.label), Some("idle"));
    }

    #[test]
    fn set_state_while_running_changes_state() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        machine.set_state(Running::new("running", &log));

        assert_eq!(entries(&log), vec!["idle.enter", "idle.exit", "running.enter"]);
        let last = machine.history().last().unwrap();
        assert_eq!(last.cause, TransitionCause::Explicit);
        assert!(last.to.is::<Running>());
    }

    #[test]
    fn global_transition_beats_local() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        machine.add_transition(Idle::new("idle", &log), Running::new("running", &log), || true);
        let to_dead = machine.add_any_transition(Dead::new("dead", &log), || true);

        let step = machine.update().unwrap();

        assert!(machine.is_current::<Dead>());
        assert!(matches!(step, StepResult::Transitioned { transition, .. } if transition == to_dead));
        assert_eq!(
            machine.history().last().map(|t| t.cause),
            Some(TransitionCause::Any(to_dead))
        );
    }

    #[test]
    fn earlier_local_transition_wins() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        let first =
            machine.add_transition(Idle::new("idle", &log), Running::new("running", &log), || true);
        machine.add_transition(Idle::new("idle", &log), Dead::new("dead", &log), || true);

        let step = machine.update().unwrap();

        assert!(machine.is_current::<Running>());
        assert!(matches!(step, StepResult::Transitioned { transition, .. } if transition == first));
    }

    #[test]
    fn earlier_global_transition_wins_and_skips_later_guards() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        let later_evaluated = Rc::new(Cell::new(false));

        machine.add_any_transition(Running::new("running", &log), || true);
        {
            let later_evaluated = Rc::clone(&later_evaluated);
            machine.add_any_transition(Dead::new("dead", &log), move || {
                later_evaluated.set(true);
                true
            });
        }

        machine.update().unwrap();

        assert!(machine.is_current::<Running>());
        assert!(!later_evaluated.get());
    }

    #[test]
    fn global_transition_to_active_state_blocks_local_ones() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        let stay = machine.add_any_transition(Idle::new("idle", &log), || true);
        machine.add_transition(Idle::new("idle", &log), Running::new("running", &log), || true);

        assert_eq!(machine.update().unwrap(), StepResult::Held(stay));
        assert!(machine.is_current::<Idle>());
    }

    #[test]
    fn is_current_state_uses_instance_identity() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));

        let stranger = Idle::new("idle", &log);
        assert!(!machine.is_current_state(&stranger));

        let stored = machine.state::<Idle>().unwrap();
        assert!(machine.is_current_state(stored));
    }

    #[test]
    fn is_current_state_tells_zero_sized_kinds_apart() {
        crate::unit_states! {
            struct Parked;
            struct Driving;
        }

        let mut machine = StateMachine::new();
        machine.set_state(Parked);
        machine.register(Driving);

        let driving = machine.state::<Driving>().unwrap();
        assert!(!machine.is_current_state(driving));

        let parked = machine.state::<Parked>().unwrap();
        assert!(machine.is_current_state(parked));
    }

    #[test]
    fn membership_queries_follow_registration_scope() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));
        let local = machine.add_transition(
            Idle::new("idle", &log),
            Running::new("running", &log),
            || true,
        );
        let global = machine.add_any_transition(Dead::new("dead", &log), Guard::never());

        assert!(machine.has_current_transition(local));
        assert!(machine.has_transition::<Idle>(local));
        assert!(!machine.has_transition::<Running>(local));
        assert!(!machine.has_any_transition(local));
        assert!(machine.has_any_transition(global));
        assert!(!machine.has_current_transition(global));

        machine.update().unwrap();

        assert!(!machine.has_current_transition(local));
        assert!(machine.has_transition::<Idle>(local));
    }

    #[test]
    fn membership_queries_on_empty_machine_are_false() {
        let log = log();
        let mut other = StateMachine::new();
        let foreign = other.add_transition(
            Idle::new("idle", &log),
            Running::new("running", &log),
            || true,
        );

        let machine = StateMachine::new();
        assert!(!machine.has_current_transition(foreign));
        assert!(!machine.has_transition::<Idle>(foreign));
        assert!(!machine.has_any_transition(foreign));
    }

    #[test]
    fn handles_from_other_machines_never_match() {
        let log = log();
        let mut a = StateMachine::new();
        let mut b = StateMachine::new();
        a.set_state(Idle::new("idle", &log));
        b.set_state(Idle::new("idle", &log));
        let in_a = a.add_transition(Idle::new("idle", &log), Running::new("running", &log), || true);
        b.add_transition(Idle::new("idle", &log), Running::new("running", &log), || true);

        assert!(a.has_current_transition(in_a));
        assert!(!b.has_current_transition(in_a));
        assert!(!b.has_transition::<Idle>(in_a));
    }

    #[test]
    fn wiring_before_set_state_creates_nodes() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.add_transition(Idle::new("idle", &log), Running::new("running", &log), || true);
        machine.add_any_transition(Dead::new("dead", &log), Guard::never());

        assert_eq!(machine.state_count(), 3);
        assert!(machine.has_state::<Dead>());
        assert!(machine.current_state().is_none());
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn handle_based_wiring() {
        let log = log();
        let mut machine = StateMachine::new();
        let idle = machine.register(Idle::new("idle", &log));
        let running = machine.register(Running::new("running", &log));
        let go = machine.add_transition_between(&idle, &running, || true).unwrap();

        machine.set_state_ref(&idle).unwrap();
        machine.update().unwrap();

        assert!(machine.has_transition::<Idle>(go));
        assert!(machine.is_current_ref(&running));
        assert_eq!(machine.get(&running).map(|s| s.label), Some("running"));
    }

    #[test]
    fn foreign_state_ref_is_rejected() {
        let log = log();
        let mut other = StateMachine::new();
        let foreign = other.register(Idle::new("idle", &log));

        let mut machine = StateMachine::new();
        let running = machine.register(Running::new("running", &log));

        assert!(matches!(
            machine.set_state_ref(&foreign),
            Err(MachineError::ForeignHandle { .. })
        ));
        assert!(matches!(
            machine.add_transition_between(&foreign, &running, || true),
            Err(MachineError::ForeignHandle { .. })
        ));
        assert!(machine.get(&foreign).is_none());
        assert!(!machine.is_current_ref(&foreign));
    }

    #[test]
    fn state_mut_reaches_stored_instance() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));

        if let Some(idle) = machine.state_mut::<Idle>() {
            idle.label = "renamed";
        }

        assert_eq!(machine.state::<Idle>().map(|s| s.label), Some("renamed"));
        assert!(machine.state::<Running>().is_none());
        assert!(machine.state_ref::<Running>().is_none());
    }

    #[test]
    fn ticks_count_successful_updates() {
        let log = log();
        let mut machine = StateMachine::new();
        machine.set_state(Idle::new("idle", &log));

        for _ in 0..3 {
            machine.update().unwrap();
        }

        assert_eq!(machine.ticks(), 3);
    }

    #[test]
    fn uninitialized_error_names_the_machine() {
        let mut machine = StateMachine::new();
        let err = machine.update().unwrap_err();

        assert!(err.to_string().contains(machine.name()));
    }
}
