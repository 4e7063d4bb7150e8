//! Turn-resolution state machine integration tests.
//!
//! These tests drive full turns through the board: opening pairs,
//! blocking third flips, resolving matches and mismatches after their
//! delays, counting attempts, and finishing rounds.

use concentration::{Board, BoardSize, FlipOutcome, GameConfig, GameEvent, TileId};

fn board(size: BoardSize, seed: u64) -> Board {
    Board::new(GameConfig::new().with_size(size), seed).unwrap()
}

/// Flip a tile and the tile that matches it, returning both IDs.
fn open_matching_pair(board: &mut Board) -> (TileId, TileId) {
    let first = board
        .tiles()
        .iter()
        .find(|t| t.is_playable())
        .copied()
        .expect("a playable tile");
    let partner = board
        .tiles()
        .iter()
        .find(|t| t.id != first.id && t.is_playable() && t.is_match(&first))
        .copied()
        .expect("its partner");
    assert_eq!(board.flip(first.id), FlipOutcome::Opened);
    assert_eq!(
        board.flip(partner.id),
        FlipOutcome::PairPending { matched: true }
    );
    (first.id, partner.id)
}

/// Flip two tiles with different images, returning both IDs.
fn open_mismatched_pair(board: &mut Board) -> (TileId, TileId) {
    let first = board
        .tiles()
        .iter()
        .find(|t| t.is_playable())
        .copied()
        .expect("a playable tile");
    let other = board
        .tiles()
        .iter()
        .find(|t| t.is_playable() && !t.is_match(&first))
        .copied()
        .expect("a tile with a different image");
    assert_eq!(board.flip(first.id), FlipOutcome::Opened);
    assert_eq!(
        board.flip(other.id),
        FlipOutcome::PairPending { matched: false }
    );
    (first.id, other.id)
}

/// Play a whole round with perfect memory: always open a known pair.
/// Returns all events emitted during the round.
fn play_perfect_round(board: &mut Board) -> Vec<GameEvent> {
    let pairs = board.size().pair_count();
    let mut events = Vec::new();
    for _ in 0..pairs {
        open_matching_pair(board);
        board.advance(1000);
        events.extend(board.drain_events());
        if events.contains(&GameEvent::GameOver) {
            break;
        }
    }
    events
}

// =============================================================================
// Match / mismatch resolution
// =============================================================================

/// Flip two matching tiles; after the delay both are hidden and
/// attempts is 1.
#[test]
fn test_matched_pair_hides_after_delay() {
    let mut board = board(BoardSize::Small, 42);
    let (a, b) = open_matching_pair(&mut board);

    board.advance(1000);
    assert!(board.tile(a).unwrap().hidden);
    assert!(board.tile(b).unwrap().hidden);
    assert_eq!(board.attempts(), 1);
    assert_eq!(
        board.drain_events(),
        vec![GameEvent::TilesMatched { first: a, second: b }]
    );
}

/// Test that a mismatched pair flips back after the longer delay and
/// still counts as one attempt.
#[test]
fn test_mismatched_pair_flips_back() {
    let mut board = board(BoardSize::Medium, 42);
    let (a, b) = open_mismatched_pair(&mut board);

    // The match delay is not enough for a mismatch
    board.advance(1000);
    assert!(board.tile(a).unwrap().face_up);
    assert!(board.drain_events().is_empty());

    board.advance(500);
    assert!(!board.tile(a).unwrap().face_up);
    assert!(!board.tile(b).unwrap().face_up);
    assert!(!board.tile(a).unwrap().hidden);
    assert_eq!(board.attempts(), 1);
    assert_eq!(
        board.drain_events(),
        vec![GameEvent::TilesMismatched { first: a, second: b }]
    );
    assert!(board.tiles().iter().all(|t| t.is_playable()));
}

/// Test that each resolved pair increments attempts by exactly 1.
#[test]
fn test_attempts_count_both_outcomes() {
    let mut board = board(BoardSize::Medium, 7);

    open_mismatched_pair(&mut board);
    board.advance(1500);
    assert_eq!(board.attempts(), 1);

    open_matching_pair(&mut board);
    board.advance(1000);
    assert_eq!(board.attempts(), 2);
}

/// Test that resolution fires exactly once however the host slices the
/// elapsed time.
#[test]
fn test_resolution_fires_once() {
    let mut board = board(BoardSize::Small, 42);
    open_matching_pair(&mut board);

    for _ in 0..100 {
        board.advance(25);
    }
    assert_eq!(board.attempts(), 1);
    assert_eq!(board.drain_events().len(), 1);
}

// =============================================================================
// Third-flip blocking
// =============================================================================

/// Test that flipping a third tile while a pair is open has no
/// observable effect.
#[test]
fn test_third_flip_blocked() {
    let mut board = board(BoardSize::Medium, 42);
    let (a, b) = open_mismatched_pair(&mut board);

    let third = board
        .tiles()
        .iter()
        .find(|t| t.id != a && t.id != b)
        .copied()
        .unwrap();
    let before = board.tiles().to_vec();

    assert_eq!(board.flip(third.id), FlipOutcome::Ignored);
    assert_eq!(board.tiles(), &before[..]);
    assert_eq!(board.face_up_tiles().count(), 2);
}

/// Test that a single open tile only locks itself.
#[test]
fn test_single_open_tile_keeps_board_playable() {
    let mut board = board(BoardSize::Medium, 42);
    let first = board.tiles()[0].id;
    board.flip(first);

    assert!(board.tile(first).unwrap().disabled);
    assert_eq!(
        board.tiles().iter().filter(|t| t.is_playable()).count(),
        7
    );
}

/// Test that re-flipping the open tile itself is rejected.
#[test]
fn test_reflip_open_tile_rejected() {
    let mut board = board(BoardSize::Small, 42);
    let first = board.tiles()[0].id;
    assert_eq!(board.flip(first), FlipOutcome::Opened);
    assert_eq!(board.flip(first), FlipOutcome::Ignored);
    assert_eq!(board.face_up_tiles().count(), 1);
}

// =============================================================================
// Game over & rounds
// =============================================================================

/// Test a full round: game-over fires exactly once, the score summary
/// reports the attempts, and a fresh round starts automatically.
#[test]
fn test_full_round_game_over() {
    let mut board = board(BoardSize::Small, 42);
    let events = play_perfect_round(&mut board);

    let game_overs = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver))
        .count();
    assert_eq!(game_overs, 1);
    assert_eq!(events.last(), Some(&GameEvent::GameOver));

    // Perfect memory: one attempt per pair
    assert_eq!(board.last_round_attempts(), Some(2));
    assert_eq!(
        board.score_summary().as_deref(),
        Some("Your number of attempts: 2")
    );

    // The next round started automatically
    assert_eq!(board.round(), 2);
    assert_eq!(board.attempts(), 0);
    assert_eq!(board.tile_count(), 4);
    assert!(board.tiles().iter().all(|t| t.is_playable()));
}

/// Test that a round with mismatches ends with attempts above the
/// pair count.
#[test]
fn test_round_with_mismatches() {
    let mut board = board(BoardSize::Small, 42);

    open_mismatched_pair(&mut board);
    board.advance(1500);
    let events = play_perfect_round(&mut board);

    assert!(events.contains(&GameEvent::GameOver));
    let pairs = 2;
    assert_eq!(board.last_round_attempts(), Some(pairs + 1));
    assert!(board.last_round_attempts().unwrap() >= pairs);
}

/// Test several consecutive rounds on the same board.
#[test]
fn test_consecutive_rounds() {
    let mut board = board(BoardSize::Small, 9);
    for expected_round in 1..=3 {
        assert_eq!(board.round(), expected_round);
        let events = play_perfect_round(&mut board);
        assert_eq!(events.last(), Some(&GameEvent::GameOver));
    }
    assert_eq!(board.round(), 4);
}

/// Test that the score summary is absent before any round finishes.
#[test]
fn test_no_summary_before_first_game_over() {
    let mut board = board(BoardSize::Small, 42);
    assert_eq!(board.score_summary(), None);

    open_matching_pair(&mut board);
    board.advance(1000);
    assert_eq!(board.score_summary(), None);
}

// =============================================================================
// Stale timers
// =============================================================================

/// Test that a resolution pending across a resize never fires against
/// the rebuilt tiles.
#[test]
fn test_resize_invalidates_pending_resolution() {
    let mut board = board(BoardSize::Large, 42);
    open_matching_pair(&mut board);
    assert!(board.pending_resolution().is_some());

    board.set_size(BoardSize::Small).unwrap();
    board.advance(60_000);

    assert_eq!(board.attempts(), 0);
    assert!(board.drain_events().is_empty());
    assert_eq!(board.hidden_tiles().count(), 0);
}

/// Test that restarting a round cancels the pending resolution.
#[test]
fn test_restart_invalidates_pending_resolution() {
    let mut board = board(BoardSize::Small, 42);
    open_matching_pair(&mut board);

    board.restart();
    board.advance(60_000);

    assert_eq!(board.attempts(), 0);
    assert!(board.drain_events().is_empty());
}

/// Test that advancing with nothing pending is a no-op.
#[test]
fn test_advance_without_pending() {
    let mut board = board(BoardSize::Small, 42);
    board.advance(10_000);
    assert_eq!(board.attempts(), 0);
    assert!(board.drain_events().is_empty());
    assert!(board.tiles().iter().all(|t| t.is_playable()));
}
