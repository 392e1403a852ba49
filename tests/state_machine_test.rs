//! Integration test: Game state machine and run invariants
//!
//! Exercises `Game::dispatch` / `Game::tick` directly with a seeded RNG:
//! scoring, best-score bookkeeping, stale ticks, resize and long seeded runs.

use clumsy::config::Skin;
use clumsy::core::{
    Action, Character, Command, CommentState, Game, GameStatus, Obstacle, RunId, Viewport,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

const FRAME: f64 = 16.0;

fn classic() -> Game {
    Game::new(Skin::Classic.tuning(), Viewport::new(800.0, 600.0), 0)
}

fn start(game: &mut Game, now_ms: f64) -> RunId {
    game.dispatch(Action::Start, now_ms);
    assert_eq!(game.status, GameStatus::Playing);
    game.current_run().unwrap()
}

/// Tick up to `ticks` times, pinning the character in place so only an
/// obstacle can end the run. Returns all commands.
fn tick_hovering(game: &mut Game, run: RunId, from_ms: f64, ticks: u32) -> Vec<Command> {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut commands = Vec::new();
    for i in 1..=ticks {
        game.character = Character::at(300.0);
        commands.extend(game.tick(run, from_ms + i as f64 * FRAME, &mut rng));
        if game.status != GameStatus::Playing {
            break;
        }
    }
    commands
}

fn crash(game: &mut Game, run: RunId, now_ms: f64) -> Vec<Command> {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    game.character = Character::at(1000.0);
    game.tick(run, now_ms, &mut rng)
}

fn finish_comment(game: &mut Game) {
    game.dispatch(Action::CommentReady("nice".to_string()), 0.0);
    assert_eq!(game.comment, CommentState::Ready("nice".to_string()));
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_obstacle_scores_exactly_once() {
    let mut game = classic();
    let run = start(&mut game, 0.0);
    game.obstacles.push(Obstacle::new(1, 10.0, 250.0));

    let commands = tick_hovering(&mut game, run, 0.0, 20);
    assert_eq!(game.score, 1);
    assert!(game.obstacles[0].passed);
    let score_cues = commands
        .iter()
        .filter(|c| **c == Command::Sound(clumsy::core::SoundCue::Score))
        .count();
    assert_eq!(score_cues, 1);
}

#[test]
fn test_seeded_runs_keep_score_monotonic_and_passes_write_once() {
    for seed in 0..5 {
        let mut game = classic();
        let run = start(&mut game, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut last_score = 0;
        let mut passed_ids = HashSet::new();

        for i in 1..=3000 {
            // Crude autopilot: flap when sinking below the middle
            if game.character.y > 300.0 && game.character.velocity > 0.0 {
                game.dispatch(Action::Jump, i as f64 * FRAME);
            }
            game.tick(run, i as f64 * FRAME, &mut rng);

            assert!(game.score >= last_score);
            last_score = game.score;
            for obstacle in &game.obstacles {
                if passed_ids.contains(&obstacle.id) {
                    assert!(obstacle.passed, "passed flag cleared on {}", obstacle.id);
                }
                if obstacle.passed {
                    passed_ids.insert(obstacle.id);
                }
            }
            if game.status != GameStatus::Playing {
                break;
            }
        }
        assert!(game.score as usize <= passed_ids.len());
    }
}

#[test]
fn test_obstacle_ids_unique_and_oldest_leftmost() {
    let mut game = classic();
    let run = start(&mut game, 0.0);
    // Spawns at 1504ms and 3008ms; neither has reached the character yet
    tick_hovering(&mut game, run, 0.0, 280);

    assert_eq!(game.status, GameStatus::Playing);
    assert_eq!(game.obstacles.len(), 2);
    let ids: HashSet<u64> = game.obstacles.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), game.obstacles.len());
    for pair in game.obstacles.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
}

// =============================================================================
// Best score
// =============================================================================

#[test]
fn test_high_score_only_increases_across_runs() {
    let mut game = classic();

    let run = start(&mut game, 0.0);
    game.obstacles.push(Obstacle::new(1, 10.0, 250.0));
    tick_hovering(&mut game, run, 0.0, 1);
    assert_eq!(game.score, 1);
    let commands = crash(&mut game, run, 100.0);
    assert!(commands.contains(&Command::SaveHighScore(1)));
    assert_eq!(game.high_score, 1);
    finish_comment(&mut game);

    let run = start(&mut game, 200.0);
    let commands = crash(&mut game, run, 300.0);
    assert_eq!(game.score, 0);
    assert_eq!(game.high_score, 1);
    assert!(!commands
        .iter()
        .any(|c| matches!(c, Command::SaveHighScore(_))));
    assert!(commands.contains(&Command::FetchComment(0)));
}

// =============================================================================
// Stale ticks and lifecycle
// =============================================================================

#[test]
fn test_tick_for_previous_run_is_noop() {
    let mut game = classic();
    let first = start(&mut game, 0.0);
    crash(&mut game, first, 16.0);
    finish_comment(&mut game);
    let second = start(&mut game, 100.0);
    assert_ne!(first, second);

    let before = game.character;
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert!(game.tick(first, 116.0, &mut rng).is_empty());
    assert_eq!(game.character, before);

    game.tick(second, 116.0, &mut rng);
    assert!((game.character.y - 300.6).abs() < 1e-9);
}

#[test]
fn test_tick_after_game_over_is_noop() {
    let mut game = classic();
    let run = start(&mut game, 0.0);
    crash(&mut game, run, 16.0);
    let score = game.score;
    let y = game.character.y;

    let mut rng = ChaCha8Rng::seed_from_u64(4);
    assert!(game.tick(run, 32.0, &mut rng).is_empty());
    assert_eq!(game.status, GameStatus::GameOver);
    assert_eq!(game.score, score);
    assert_eq!(game.character.y, y);
}

#[test]
fn test_game_over_sets_dive_rotation() {
    let mut game = classic();
    let run = start(&mut game, 0.0);
    crash(&mut game, run, 16.0);
    assert_eq!(game.character.rotation, 90.0);
}

#[test]
fn test_late_comment_is_dropped() {
    let mut game = classic();
    let run = start(&mut game, 0.0);
    crash(&mut game, run, 16.0);
    finish_comment(&mut game);

    let commands = game.dispatch(Action::CommentReady("too late".to_string()), 0.0);
    assert!(commands.is_empty());
    assert_eq!(game.comment, CommentState::Ready("nice".to_string()));
}

#[test]
fn test_countdown_tick_outside_countdown_is_ignored() {
    let mut game = classic();
    assert!(game.dispatch(Action::CountdownTick, 0.0).is_empty());
    assert_eq!(game.status, GameStatus::Start);
}

// =============================================================================
// Resize
// =============================================================================

#[test]
fn test_spawn_uses_viewport_at_spawn_time() {
    let mut game = classic();
    let run = start(&mut game, 0.0);
    game.resize(Viewport::new(1000.0, 600.0));

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    game.tick(run, 1504.0, &mut rng);
    assert_eq!(game.obstacles.len(), 1);
    // Spawned at the new right edge, then scrolled by one step
    assert_eq!(game.obstacles[0].x, 997.0);
}

#[test]
fn test_shrinking_viewport_moves_ground_up() {
    let mut game = classic();
    let run = start(&mut game, 0.0);
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    game.tick(run, 16.0, &mut rng);
    assert_eq!(game.status, GameStatus::Playing);

    // Ground now at 400 - 112 = 288, above the character's feet
    game.resize(Viewport::new(800.0, 400.0));
    game.tick(run, 32.0, &mut rng);
    assert_eq!(game.status, GameStatus::GameOver);
}

#[test]
fn test_every_skin_can_complete_a_run() {
    for skin in Skin::ALL {
        let mut game = Game::new(skin.tuning(), Viewport::new(800.0, 600.0), 0);
        game.dispatch(Action::Start, 0.0);
        let mut now = 0.0;
        for _ in 0..skin.tuning().countdown_seconds {
            now += 1000.0;
            game.dispatch(Action::CountdownTick, now);
        }
        let run = game.current_run().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..500 {
            now += FRAME;
            game.tick(run, now, &mut rng);
        }
        assert_eq!(game.status, GameStatus::GameOver, "{}", skin.name());
    }
}
