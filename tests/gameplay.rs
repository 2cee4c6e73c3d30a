use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use catch_the_stars::consts::*;
use catch_the_stars::game::{Basket, GameState, Phase, Star};
use catch_the_stars::input::Controls;

fn idle() -> Controls {
    Controls::default()
}

#[test]
fn star_dropped_onto_basket_is_caught() {
    let mut rng = Pcg32::seed_from_u64(11);
    let mut game = GameState::new();
    game.basket = Basket { x: 0 };
    game.stars.push(Star { x: 0, y: -20, size: 20, speed: 5, color: STAR_COLORS[0] });

    game.tick(idle(), &mut rng);
    assert_eq!(game.stars[0].y, -15);
    assert_eq!(game.score, 0);

    let mut ticks = 1;
    while game.score == 0 && ticks < 500 {
        game.tick(idle(), &mut rng);
        ticks += 1;
    }
    // Bottom edge passes the basket top (y = 550) once y reaches 535.
    assert_eq!(ticks, 111);
    assert_eq!(game.score, 1);
    assert_eq!(game.lives, START_LIVES);
    // Only the two stars spawned on frames 40 and 80 remain.
    assert_eq!(game.stars.len(), 2);
}

#[test]
fn ramp_uses_score_from_before_the_frames_catches() {
    let mut rng = Pcg32::seed_from_u64(14);
    let mut game = GameState::new();
    game.score = 9;
    game.spawner.timer = 39;
    game.basket = Basket { x: 0 };
    game.stars.push(Star { x: 0, y: 530, size: 20, speed: 5, color: STAR_COLORS[0] });

    game.tick(idle(), &mut rng);

    // The spawn fired while the score was still 9, so no speed-up yet.
    assert_eq!(game.score, 10);
    assert_eq!(game.spawner.timer, 0);
    assert_eq!(game.spawner.interval, SPAWN_INTERVAL_START);
}

#[test]
fn last_miss_ends_the_game_and_freezes_it() {
    let mut rng = Pcg32::seed_from_u64(12);
    let mut game = GameState::new();
    game.lives = 1;
    game.stars.push(Star { x: 0, y: 580, size: 10, speed: 5, color: STAR_COLORS[1] });

    for _ in 0..4 {
        game.tick(idle(), &mut rng);
    }
    assert_eq!(game.phase, Phase::Playing);
    assert_eq!(game.stars.len(), 1);

    game.tick(idle(), &mut rng);
    assert_eq!(game.lives, 0);
    assert_eq!(game.phase, Phase::GameOver);
    assert!(game.stars.is_empty());

    let frozen = game.clone();
    for _ in 0..200 {
        game.tick(Controls { left: true, right: false }, &mut rng);
    }
    assert_eq!(game, frozen);
}

#[test]
fn a_neglected_game_runs_out_of_lives() {
    let mut rng = Pcg32::seed_from_u64(13);
    let mut game = GameState::new();
    game.basket = Basket { x: 0 };
    for _ in 0..10_000 {
        game.tick(idle(), &mut rng);
        if game.is_game_over() {
            break;
        }
    }
    assert!(game.is_game_over());
    assert!(game.lives <= 0);
    assert!(game.spawner.interval >= SPAWN_INTERVAL_MIN);
}

#[test]
fn same_seed_same_game() {
    let inputs: Vec<Controls> = (0..3000)
        .map(|i| Controls { left: i % 7 < 3, right: i % 11 < 4 })
        .collect();
    let play = || {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut game = GameState::new();
        for c in &inputs {
            game.tick(*c, &mut rng);
        }
        game
    };
    assert_eq!(play(), play());
}

fn controls() -> impl Strategy<Value = Controls> {
    (any::<bool>(), any::<bool>()).prop_map(|(left, right)| Controls { left, right })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn session_invariants(seed in any::<u64>(), inputs in prop::collection::vec(controls(), 1..1500)) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut game = GameState::new();
        for c in inputs {
            let before = game.clone();
            game.tick(c, &mut rng);

            prop_assert!(game.basket.x >= 0 && game.basket.x <= SCREEN_WIDTH - BASKET_WIDTH);
            prop_assert!(game.spawner.interval <= before.spawner.interval);
            prop_assert!(game.spawner.interval >= SPAWN_INTERVAL_MIN);
            prop_assert!(game.score >= before.score);
            prop_assert!(game.lives <= before.lives);
            prop_assert_eq!(game.is_game_over(), game.lives <= 0);

            if before.is_game_over() {
                prop_assert_eq!(&game, &before);
            }
            for star in &game.stars {
                prop_assert!(star.y <= SCREEN_HEIGHT);
            }
        }
    }

    #[test]
    fn reset_always_gives_a_fresh_game(seed in any::<u64>(), frames in 0usize..3000) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut game = GameState::new();
        for i in 0..frames {
            game.tick(Controls { left: i % 3 == 0, right: i % 5 == 0 }, &mut rng);
        }
        game.reset();
        prop_assert_eq!(game.score, 0);
        prop_assert_eq!(game.lives, START_LIVES);
        prop_assert_eq!(game.spawner.interval, SPAWN_INTERVAL_START);
        prop_assert_eq!(game.spawner.timer, 0);
        prop_assert!(game.stars.is_empty());
        prop_assert_eq!(game.basket.x, 350);
        prop_assert_eq!(game.phase, Phase::Playing);
    }
}
