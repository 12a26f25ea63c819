//! Block Pop entry point
//!
//! The game runs inside a host engine (see `platform::wasm`). Natively this
//! binary plays one scripted round headless and logs what happened, which is
//! handy for checking a config file.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use block_pop::GameConfig;

    env_logger::init();
    log::info!("Block Pop (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let summary = scripted_round(config);
    println!("{}", summary);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::wasm::wasm_main
}

/// Launch, then report one hit per step on the lowest live block until the
/// grid is cleared, bouncing the ball off the paddle every so often.
#[cfg(not(target_arch = "wasm32"))]
fn scripted_round(config: block_pop::GameConfig) -> String {
    use block_pop::consts::SIM_DT;
    use block_pop::platform::Session;
    use block_pop::sim::{GameEvent, HitOutcome, Notice, RoundOutcome};

    let mut session = Session::new(config);
    session.pointer_down(0.0); // leave the menu
    session.pointer_down(session.state.paddle.center_x());
    session.pointer_up();
    session.update(SIM_DT);

    let mut steps = 0u64;
    let mut destroyed = 0u32;
    while session.state.outcome() == RoundOutcome::Ongoing && steps < 1_000_000 {
        let first_id = session.state.field.iter().next().map(|b| b.id);
        if let Some(id) = first_id {
            session.report(GameEvent::BlockHit(id));
        }
        if steps % 10 == 0 {
            session.report(GameEvent::PaddleHit);
        }
        session.update(SIM_DT);
        steps += 1;

        for notice in session.state.drain_notices() {
            if let Notice::BlockHit {
                outcome: HitOutcome::Destroyed { .. },
                ..
            } = notice
            {
                destroyed += 1;
            }
        }
    }

    let snapshot = session.state.snapshot();
    format!(
        "{:?} after {} steps: {} blocks destroyed, wallet {}",
        snapshot.outcome, steps, destroyed, snapshot.wallet
    )
}
