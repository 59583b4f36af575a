//! Macros for declaring state kinds.

/// Declare unit structs that are state kinds with no-op hooks.
///
/// Handy for kinds whose behaviour lives entirely in transitions, and for
/// tests.
///
/// # Example
///
/// ```
/// use tickfsm::unit_states;
/// use tickfsm::StateMachine;
///
/// unit_states! {
///     pub struct Closed;
///     pub struct Open;
/// }
///
/// let mut machine = StateMachine::new();
/// machine.set_state(Closed);
/// machine.add_transition(Closed, Open, || true);
/// machine.update().unwrap();
/// assert!(machine.is_current::<Open>());
/// ```
#[macro_export]
macro_rules! unit_states {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis struct $name:ident;
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            impl $crate::core::State for $name {
                fn kind_name() -> &'static str {
                    stringify!($name)
                }
            }
        )*
    };
}
