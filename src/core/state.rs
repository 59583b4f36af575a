//! State lifecycle contract.
//!
//! A state is an opaque value owned by the machine. The machine only ever
//! calls the three lifecycle hooks; everything else about a state belongs to
//! the host.

use serde::Serialize;
use std::any::{Any, TypeId};
use std::fmt;

/// Upcast helper so the machine can hand back typed references to the
/// states it owns.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Trait for state machine states.
///
/// Every Rust type implementing `State` is one state *kind*. A machine holds
/// at most one instance per kind: the first instance registered is kept and
/// any later instance of the same type is discarded.
///
/// All hooks default to no-ops, so a state overrides only what it needs.
///
/// # Example
///
/// ```rust
/// use tickfsm::core::State;
///
/// struct Idle {
///     frames: u32,
/// }
///
/// impl State for Idle {
///     fn on_enter(&mut self) {
///         self.frames = 0;
///     }
///
///     fn on_update(&mut self) {
///         self.frames += 1;
///     }
/// }
/// ```
pub trait State: AsAny {
    /// Called once when this state becomes active.
    ///
    /// Never called for a transition that resolves to the already-active state.
    fn on_enter(&mut self) {}

    /// Called once per `update` while this state is active, after transition
    /// resolution for that tick.
    fn on_update(&mut self) {}

    /// Called once when this state stops being active, right before the next
    /// state's `on_enter`.
    fn on_exit(&mut self) {}

    /// Name used for the kind in logs and history.
    ///
    /// Default implementation returns the Rust type name.
    fn kind_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

/// Descriptor of a state kind: its type identity plus a display name.
#[derive(Clone, Copy, Eq, Serialize)]
pub struct StateKind {
    #[serde(skip)]
    type_id: TypeId,
    name: &'static str,
}

impl StateKind {
    /// Kind descriptor for the state type `S`.
    pub fn of<S: State>() -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            name: S::kind_name(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True if this descriptor names the state type `S`.
    pub fn is<S: State>(&self) -> bool {
        self.type_id == TypeId::of::<S>()
    }
}

impl PartialEq for StateKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl std::hash::Hash for StateKind {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateKind").field(&self.name).finish()
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
