//! Pet Push headless runner
//!
//! Plays one match with a scripted wearer against the configured opponent.
//! Without a settings file the opponent is the AI.
//!
//! Usage: `pet-push [settings.json] [brick|ai]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::rc::Rc;

    use pet_push::sim::{Gesture, GestureBus, ManualClock};
    use pet_push::{OpponentKind, Settings};

    /// Give up after a minute of game time
    const MAX_FRAMES: u32 = 60 * 60;
    /// The scripted wearer taps every few frames
    const TAP_EVERY: u32 = 6;

    env_logger::init();
    log::info!("Pet Push (native) starting...");

    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from);
    let mut settings = Settings::load_or_default(path.as_deref());
    if path.is_none() {
        settings.opponent = OpponentKind::Ai;
    }
    if let Some(kind) = args.next().as_deref().and_then(OpponentKind::from_str) {
        settings.opponent = kind;
    }

    let bus = Rc::new(GestureBus::new());
    let clock = Rc::new(ManualClock::new(0.0));
    let mut game = match settings.build_game(bus.clone(), clock.clone()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start match: {}", e);
            std::process::exit(1);
        }
    };

    let dt = settings.frame_dt_ms;
    let (player, opponent) = game.sprites();
    for frame in 0..MAX_FRAMES {
        // Face the opponent, shove, and hop now and then
        let facing = if player.rect().center().x < opponent.rect().center().x {
            Gesture::SwipeRight
        } else {
            Gesture::SwipeLeft
        };
        bus.dispatch(facing, 0.0, 0.0);
        if frame % TAP_EVERY == 0 {
            bus.dispatch(Gesture::Tap, 0.0, 0.0);
        }
        if frame % 240 == 120 {
            bus.dispatch(Gesture::SwipeUp, 0.0, 0.0);
        }

        clock.advance(f64::from(dt));
        if game.update(dt).is_some() {
            break;
        }
    }

    match game.player_won() {
        Some(true) => println!("Player won after {} frames", game.frames()),
        Some(false) => println!("Opponent won after {} frames", game.frames()),
        None => println!("No winner after {} frames", game.frames()),
    }
    log::info!(
        "Final positions: player x={:.1}, opponent x={:.1}",
        player.x(),
        opponent.x()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Nothing to run headless in the browser
}
