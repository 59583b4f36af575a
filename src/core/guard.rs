//! Guard predicates for controlling state transitions.
//!
//! A guard takes no input from the machine. Hosts close over whatever data
//! the decision needs; the machine only ever asks for a boolean.

use std::fmt;

/// Capability evaluated once per tick to decide if a transition fires.
///
/// Implemented for every `Fn() -> bool`, so plain closures can be passed
/// anywhere a predicate is expected.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickfsm::core::Predicate;
///
/// let health = Rc::new(Cell::new(10));
/// let dead = {
///     let health = Rc::clone(&health);
///     move || health.get() <= 0
/// };
///
/// assert!(!dead.evaluate());
/// health.set(0);
/// assert!(dead.evaluate());
/// ```
pub trait Predicate {
    fn evaluate(&self) -> bool;
}

impl<F> Predicate for F
where
    F: Fn() -> bool,
{
    fn evaluate(&self) -> bool {
        self()
    }
}

/// Boxed predicate wrapping a zero-argument function.
///
/// Results are never cached: each `evaluate` calls the wrapped function.
///
/// # Example
///
/// ```rust
/// use tickfsm::core::{Guard, Predicate};
///
/// let guard = Guard::always().and(Guard::new(|| 2 > 1));
/// assert!(guard.evaluate());
/// assert!(!guard.not().evaluate());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a boolean function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that always passes.
    pub fn always() -> Self {
        Guard::new(|| true)
    }

    /// Guard that never passes.
    pub fn never() -> Self {
        Guard::new(|| false)
    }

    /// Passes only when both guards pass. `other` is not evaluated if `self` fails.
    pub fn and<P>(self, other: P) -> Self
    where
        P: Predicate + 'static,
    {
        Guard::new(move || self.evaluate() && other.evaluate())
    }

    /// Passes when either guard passes. `other` is not evaluated if `self` passes.
    pub fn or<P>(self, other: P) -> Self
    where
        P: Predicate + 'static,
    {
        Guard::new(move || self.evaluate() || other.evaluate())
    }

    /// Inverts the guard.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Guard::new(move || !self.evaluate())
    }
}

impl Predicate for Guard {
    fn evaluate(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
