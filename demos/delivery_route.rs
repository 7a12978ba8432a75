//! Terminal delivery-route demo using crossterm.
//!
//! Run: cargo run --bin delivery-route [seed]
//!
//! Shows the fixed delivery route first; press `r` for a random route,
//! `s` for the fixed one again, `q` to quit. Logs go to stderr, which shares
//! the terminal with the drawn frame, so redirect it when raising the level:
//!
//! ```text
//! RUST_LOG=debug cargo run --bin delivery-route 2> route.log
//! ```

use gridroute_demo::{Action, Session, terminal::Terminal};
use gridroute_scenario::{DELIVERY_END, DELIVERY_START, FixedScenario, RandomScenario, delivery_grid};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => rand::rng().random(),
    };
    log::info!("random scenarios seeded with {seed}");

    let mut session = Session::new(
        delivery_grid()?,
        FixedScenario::new(DELIVERY_START, DELIVERY_END),
        RandomScenario::new(StdRng::seed_from_u64(seed)),
    );

    let mut term = Terminal::open()?;
    let mut action = Action::Static;
    while let Some(frame) = session.handle(action)? {
        term.draw(session.grid(), &frame)?;
        action = term.next_action()?;
    }
    Ok(())
}
