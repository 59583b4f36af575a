//! Closure-driven base state carrying a host blackboard.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

type Hook<B> = Box<dyn FnMut(&mut B)>;

/// State built from closures over a blackboard value `B`.
///
/// `K` is a marker type that gives the state its kind: `HookState<Idle, B>`
/// and `HookState<Chase, B>` are two different kinds even though they share
/// a blackboard type. The machine never looks at the blackboard.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tickfsm::core::HookState;
/// use tickfsm::StateMachine;
///
/// struct Idle;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let idle = HookState::<Idle, _>::new(Rc::clone(&log))
///     .with_enter(|log| log.borrow_mut().push("enter idle"));
///
/// let mut machine = StateMachine::new();
/// machine.set_state(idle);
/// assert_eq!(*log.borrow(), vec!["enter idle"]);
/// ```
pub struct HookState<K: 'static, B: 'static> {
    blackboard: B,
    enter: Option<Hook<B>>,
    update: Option<Hook<B>>,
    exit: Option<Hook<B>>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: 'static, B: 'static> HookState<K, B> {
    /// Create a state with no hooks around `blackboard`.
    pub fn new(blackboard: B) -> Self {
        Self {
            blackboard,
            enter: None,
            update: None,
            exit: None,
            _kind: PhantomData,
        }
    }

    pub fn with_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut B) + 'static,
    {
        self.enter = Some(Box::new(hook));
        self
    }

    pub fn with_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut B) + 'static,
    {
        self.update = Some(Box::new(hook));
        self
    }

    pub fn with_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut B) + 'static,
    {
        self.exit = Some(Box::new(hook));
        self
    }

    pub fn blackboard(&self) -> &B {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut B {
        &mut self.blackboard
    }
}

impl<K: 'static, B: 'static> State for HookState<K, B> {
    fn on_enter(&mut self) {
        if let Some(hook) = self.enter.as_mut() {
            hook(&mut self.blackboard);
        }
    }

    fn on_update(&mut self) {
        if let Some(hook) = self.update.as_mut() {
            hook(&mut self.blackboard);
        }
    }

    fn on_exit(&mut self) {
        if let Some(hook) = self.exit.as_mut() {
            hook(&mut self.blackboard);
        }
    }

    fn kind_name() -> &'static str {
        std::any::type_name::<K>()
    }
}

impl<K: 'static, B: fmt::Debug + 'static> fmt::Debug for HookState<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookState")
            .field("kind", &std::any::type_name::<K>())
            .field("blackboard", &self.blackboard)
            .finish_non_exhaustive()
    }
}
