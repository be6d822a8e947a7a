//! Vectoroids entry point
//!
//! Runs the simulation headless: a scripted pilot stands in for the
//! excluded input layer, the fixed-timestep driver paces the run against
//! the wall clock, and a JSON snapshot of the final state is written to
//! stdout.

use std::time::{Duration, Instant};

use vectoroids::sim::{FixedTimestep, GamePhase, GameState, TickInput};

/// Five simulated minutes before the demo gives up
const DEMO_TICK_LIMIT: u64 = 5 * 60 * 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    log::info!("vectoroids starting with seed {seed}");

    let mut state = GameState::new(seed);
    let mut driver = FixedTimestep::new();
    let mut previous = Instant::now();

    loop {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(previous).as_secs_f32() * 1000.0;
        previous = now;

        let input = pilot(&state);
        driver.advance(&mut state, &input, elapsed_ms);

        match state.phase {
            GamePhase::Playing => {}
            GamePhase::Lost => {
                log::info!("run lost after {} ticks", state.time_ticks);
                break;
            }
            GamePhase::Won => {
                log::info!("run won after {} ticks", state.time_ticks);
                break;
            }
        }
        if state.time_ticks >= DEMO_TICK_LIMIT {
            log::info!("demo tick limit reached");
            break;
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    match state.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot failed: {err}"),
    }
}

/// Scripted pilot: sweep the heading, thrust in pulses, never let go of
/// the trigger
fn pilot(state: &GameState) -> TickInput {
    TickInput {
        turn_right: state.time_ticks % 120 < 40,
        thrusting: state.time_ticks % 240 < 30,
        shooting: true,
        ..TickInput::default()
    }
}
