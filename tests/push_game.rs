use std::rc::Rc;

use pet_push::sim::{Agent, Gesture, GestureBus, ManualClock, PushGame, Winner};
use pet_push::{OpponentKind, PetStats, Settings};

const DT: f32 = 1000.0 / 60.0;

fn start(settings: &Settings) -> (PushGame, Rc<GestureBus>, Rc<ManualClock>) {
    let bus = Rc::new(GestureBus::new());
    let clock = Rc::new(ManualClock::new(0.0));
    let game = settings.build_game(bus.clone(), clock.clone()).unwrap();
    (game, bus, clock)
}

/// Step until the match ends or `max_frames` pass, running `input` before each frame
fn play(
    game: &mut PushGame,
    clock: &ManualClock,
    max_frames: u32,
    mut input: impl FnMut(u32),
) -> Option<Winner> {
    for frame in 0..max_frames {
        input(frame);
        clock.advance(f64::from(DT));
        if let Some(winner) = game.update(DT) {
            return Some(winner);
        }
    }
    None
}

#[test]
fn test_gestures_between_frames_are_all_consumed() {
    let (mut game, bus, _clock) = start(&Settings::default());

    for _ in 0..5 {
        bus.dispatch(Gesture::Tap, 0.0, 0.0);
    }
    assert_eq!(game.update(DT), None);

    // 5 taps at strength 1, stamina down to 0.95
    let vx = game.player().body().vel.x;
    assert!((vx - 5.25).abs() < 1e-4, "vx = {}", vx);

    // Nothing new arrived, so nothing new is pushed
    assert_eq!(game.update(DT), None);
    assert!(game.player().body().vel.x < vx);
}

#[test]
fn test_player_shoves_brick_off() {
    let settings = Settings {
        pet: PetStats {
            strength: 10.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let (mut game, bus, clock) = start(&settings);

    let winner = play(&mut game, &clock, 2000, |_| bus.dispatch(Gesture::Tap, 0.0, 0.0));

    assert_eq!(winner, Some(Winner::First));
    assert_eq!(game.player_won(), Some(true));
    // Brick went over the right edge
    assert!(game.opponent().rect().center().x >= game.platform().right());
    // Player's gesture handler is gone
    assert!(bus.is_empty());
}

#[test]
fn test_player_walks_off_left_edge() {
    let (mut game, bus, clock) = start(&Settings::default());
    bus.dispatch(Gesture::SwipeLeft, 0.0, 0.0);

    let winner = play(&mut game, &clock, 2000, |_| bus.dispatch(Gesture::Tap, 0.0, 0.0));

    assert_eq!(winner, Some(Winner::Second));
    assert_eq!(game.player_won(), Some(false));
    assert!(bus.is_empty());

    // Later frames and gestures are ignored
    let x = game.player().rect().x();
    bus.dispatch(Gesture::Tap, 0.0, 0.0);
    assert_eq!(game.update(DT), None);
    assert_eq!(game.player().rect().x(), x);
}

#[test]
fn test_swipe_up_jumps_and_lands() {
    let (mut game, bus, _clock) = start(&Settings::default());
    let start_y = game.player().rect().y();

    bus.dispatch(Gesture::SwipeUp, 0.0, 0.0);
    game.update(DT);
    assert!(game.player().is_jumping());
    assert!(game.player().rect().y() < start_y);

    let mut peak = start_y;
    for _ in 0..200 {
        game.update(DT);
        peak = peak.min(game.player().rect().y());
        if !game.player().is_jumping() {
            break;
        }
    }
    assert!(!game.player().is_jumping());
    assert_eq!(game.player().rect().bottom(), game.platform().y());
    // v² / 2g = 80px
    assert!(start_y - peak > 70.0 && start_y - peak < 90.0);
}

#[test]
fn test_idle_match_never_ends() {
    let (mut game, _bus, clock) = start(&Settings::default());
    assert_eq!(play(&mut game, &clock, 600, |_| {}), None);
    assert!(!game.is_over());
    assert_eq!(game.frames(), 600);
}

#[test]
fn test_ai_eventually_decides_the_match() {
    let settings = Settings {
        opponent: OpponentKind::Ai,
        ..Default::default()
    };
    let (mut game, bus, clock) = start(&settings);

    let winner = play(&mut game, &clock, 60 * 300, |_| {});

    assert!(winner.is_some());
    assert!(game.is_over());
    assert!(bus.is_empty());
}

#[test]
fn test_ai_matches_are_reproducible() {
    let settings = Settings {
        opponent: OpponentKind::Ai,
        ..Default::default()
    };
    let (mut first, _bus1, clock1) = start(&settings);
    let (mut second, _bus2, clock2) = start(&settings);

    let w1 = play(&mut first, &clock1, 60 * 300, |_| {});
    let w2 = play(&mut second, &clock2, 60 * 300, |_| {});

    assert_eq!(w1, w2);
    assert_eq!(first.frames(), second.frames());
    assert_eq!(first.opponent().rect(), second.opponent().rect());
}
