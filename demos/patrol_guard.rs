//! Patrol Guard
//!
//! A guard NPC that patrols, chases when it spots the player, and drops dead
//! from any state once its health runs out.
//!
//! Key concepts:
//! - States carrying a shared blackboard via `HookState`
//! - Local transitions tried only from their source state
//! - A global transition that wins over everything else
//!
//! Run with: RUST_LOG=tickfsm=debug cargo run --example patrol_guard

use std::cell::RefCell;
use std::rc::Rc;
use tickfsm::{HookState, StateMachineBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Blackboard {
    health: i32,
    player_distance: f32,
    steps: u32,
}

type Shared = Rc<RefCell<Blackboard>>;

struct Patrol;
struct Chase;
struct Dead;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Patrol Guard Example ===\n");

    let board: Shared = Rc::new(RefCell::new(Blackboard {
        health: 3,
        player_distance: 20.0,
        steps: 0,
    }));

    let patrol = HookState::<Patrol, _>::new(Rc::clone(&board))
        .with_enter(|_| println!("  [patrol] back on the route"))
        .with_update(|b: &mut Shared| b.borrow_mut().steps += 1);
    let chase = HookState::<Chase, _>::new(Rc::clone(&board))
        .with_enter(|_| println!("  [chase] spotted the player!"))
        .with_update(|b: &mut Shared| b.borrow_mut().health -= 1)
        .with_exit(|_| println!("  [chase] giving up"));
    let dead = HookState::<Dead, _>::new(Rc::clone(&board))
        .with_enter(|_| println!("  [dead] the guard falls"));

    let mut machine = StateMachineBuilder::new()
        .name("patrol-guard")
        .history_limit(16)
        .build()
        .expect("valid configuration");

    let patrol = machine.register(patrol);
    let chase = machine.register(chase);
    machine.register(dead);

    let near = {
        let board = Rc::clone(&board);
        move || board.borrow().player_distance < 5.0
    };
    let far = {
        let board = Rc::clone(&board);
        move || board.borrow().player_distance >= 5.0
    };
    let out_of_health = {
        let board = Rc::clone(&board);
        move || board.borrow().health <= 0
    };

    machine
        .add_transition_between(&patrol, &chase, near)
        .expect("handles from this machine");
    machine
        .add_transition_between(&chase, &patrol, far)
        .expect("handles from this machine");
    machine.add_any_transition(HookState::<Dead, Shared>::new(Rc::clone(&board)), out_of_health);

    machine.set_state_ref(&patrol).expect("handle from this machine");

    let distances = [20.0, 12.0, 4.0, 3.0, 9.0, 2.0, 1.0, 1.0];
    for (tick, distance) in distances.into_iter().enumerate() {
        board.borrow_mut().player_distance = distance;
        let step = machine.update().expect("machine was started");
        println!(
            "tick {tick}: distance {distance:>4.1} -> {:?} ({})",
            machine.current_kind().map(|k| k.name()),
            if step.changed() { "changed" } else { "stayed" }
        );
    }

    println!("\nVisited path:");
    for kind in machine.history().get_path() {
        println!("  {kind}");
    }
    println!("Patrol steps taken: {}", board.borrow().steps);

    println!("\n=== Example Complete ===");
}
