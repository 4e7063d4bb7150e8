//! Board state and the turn-resolution state machine.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardSize, GameConfig, GameError, GameRng, GameRngState, ImageId};
use crate::events::{EventQueue, GameEvent};
use crate::tiles::{Tile, TileId};

use super::resolution::{FlipOutcome, PendingResolution};

/// The grid of tiles plus turn and game logic.
///
/// ## Lifecycle
///
/// A board is initialized on construction and re-initialized whenever
/// its size changes or a round ends (all tiles hidden). Every
/// (re)initialization reshuffles the pairing, resets every tile to
/// face-down/enabled/visible, resets the attempt counter, bumps the
/// round number, and cancels any pending pair resolution.
///
/// ## Turn resolution
///
/// [`flip`](Board::flip) handles a user flip: the face-up set is
/// disabled, and once two tiles are open every visible face-down tile
/// is disabled too, so a third tile cannot be opened while the pair is
/// outstanding. The pair outcome applies after a delay driven by
/// [`advance`](Board::advance).
#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    size: BoardSize,
    tiles: Vec<Tile>,
    /// Resolved pairs this round, match or mismatch alike.
    attempts: u32,
    /// Bumped on every (re)initialization; keys pending resolutions.
    round: u32,
    /// Logical clock, advanced by the host.
    now_ms: u64,
    /// Currently open (face-up, unresolved) tiles in flip order.
    open: SmallVec<[TileId; 2]>,
    pending: Option<PendingResolution>,
    events: EventQueue,
    last_round_attempts: Option<u32>,
    rng: GameRng,
}

impl Board {
    /// Create a board from a configuration and an RNG seed.
    ///
    /// Fails with [`GameError::InsufficientImages`] when the image set
    /// cannot cover the configured size.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate_for(config.size)?;
        let mut board = Self {
            size: config.size,
            config,
            tiles: Vec::new(),
            attempts: 0,
            round: 0,
            now_ms: 0,
            open: SmallVec::new(),
            pending: None,
            events: EventQueue::new(),
            last_round_attempts: None,
            rng: GameRng::new(seed),
        };
        board.initialize();
        Ok(board)
    }

    /// Current board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Change the board size and re-initialize.
    ///
    /// The tile collection is discarded and rebuilt only when the tile
    /// count actually changes; either way the board reshuffles, every
    /// tile resets, the attempt counter resets, and any pending
    /// resolution is cancelled.
    pub fn set_size(&mut self, size: BoardSize) -> Result<(), GameError> {
        self.config.validate_for(size)?;
        self.size = size;
        self.initialize();
        Ok(())
    }

    /// Grid dimensions as `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.size.dimensions()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Layout hint: true for 2-column boards.
    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.size.is_narrow()
    }

    /// All tiles in grid order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by ID.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Tiles showing their front face and still in play.
    pub fn face_up_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.face_up && !t.hidden)
    }

    /// Tiles showing their back and still in play.
    pub fn face_down_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| !t.face_up && !t.hidden)
    }

    /// Matched tiles, removed from play.
    pub fn hidden_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.hidden)
    }

    /// Resolved pairs so far this round.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Round counter, starting at 1 and bumped on re-initialization.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current logical time in ms.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The scheduled pair resolution, if a pair is open.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    /// Attempt count of the most recently finished round.
    #[must_use]
    pub fn last_round_attempts(&self) -> Option<u32> {
        self.last_round_attempts
    }

    /// Human-readable score line for the most recently finished round.
    #[must_use]
    pub fn score_summary(&self) -> Option<String> {
        self.last_round_attempts
            .map(|n| format!("Your number of attempts: {}", n))
    }

    /// Take all queued events, oldest first.
    #[must_use]
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Peek at queued events without draining.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        self.events.peek()
    }

    /// Abandon the current round and start a fresh one.
    pub fn restart(&mut self) {
        self.initialize();
    }

    /// Handle a user flip.
    ///
    /// Illegal flips (disabled, hidden, already face-up, unknown ID)
    /// return [`FlipOutcome::Ignored`] with no state change. A legal
    /// flip disables the face-up set; when it opens a pair, every
    /// visible face-down tile is disabled too and the resolution is
    /// scheduled: 1000 logical ms for a match, 1500 for a mismatch.
    pub fn flip(&mut self, id: TileId) -> FlipOutcome {
        let Some(index) = self.tiles.iter().position(|t| t.id == id) else {
            debug!("flip ignored: no such tile {}", id);
            return FlipOutcome::Ignored;
        };
        if !self.tiles[index].flip_up() {
            trace!("flip ignored: {} is not playable", id);
            return FlipOutcome::Ignored;
        }
        self.open.push(id);

        // Disable the face-up set; with a pair open, lock the rest of
        // the board so a third tile cannot be flipped mid-resolution.
        let pair_open = self.open.len() > 1;
        for tile in &mut self.tiles {
            if tile.hidden {
                continue;
            }
            if tile.face_up || pair_open {
                tile.disabled = true;
            }
        }

        if self.open.len() < 2 {
            trace!("{} opened, turn still open", id);
            return FlipOutcome::Opened;
        }

        let (first, second) = (self.open[0], self.open[1]);
        let matched = match (self.tile(first), self.tile(second)) {
            (Some(a), Some(b)) => a.is_match(b),
            _ => false,
        };
        let delay = if matched {
            self.config.match_delay_ms
        } else {
            self.config.mismatch_delay_ms
        };
        self.pending = Some(PendingResolution {
            first,
            second,
            matched,
            due_at_ms: self.now_ms.saturating_add(delay),
            round: self.round,
        });
        debug!(
            "pair open: {} vs {} ({}), resolving in {} ms",
            first,
            second,
            if matched { "match" } else { "mismatch" },
            delay
        );
        FlipOutcome::PairPending { matched }
    }

    /// Advance the logical clock by `delta_ms` and apply the pending
    /// pair resolution if its delay has elapsed.
    ///
    /// A resolution scheduled before a re-initialization is discarded
    /// unfired; it never touches rebuilt tiles.
    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        let Some(pending) = self.pending else {
            return;
        };
        if !pending.is_current(self.round) {
            debug!("dropping stale resolution from round {}", pending.round);
            self.pending = None;
            return;
        }
        if !pending.is_due(self.now_ms) {
            return;
        }
        self.pending = None;
        self.open.clear();
        self.resolve(pending);
    }

    /// Apply a due pair resolution.
    fn resolve(&mut self, pending: PendingResolution) {
        self.attempts += 1;

        if pending.matched {
            self.with_tile(pending.first, |t| t.hidden = true);
            self.with_tile(pending.second, |t| t.hidden = true);
            self.events.push(GameEvent::TilesMatched {
                first: pending.first,
                second: pending.second,
            });
        } else {
            self.with_tile(pending.first, Tile::turn_down);
            self.with_tile(pending.second, Tile::turn_down);
            self.events.push(GameEvent::TilesMismatched {
                first: pending.first,
                second: pending.second,
            });
        }
        debug!(
            "resolved {} vs {}: {} (attempt {})",
            pending.first,
            pending.second,
            if pending.matched { "match" } else { "mismatch" },
            self.attempts
        );

        if self.tiles.iter().all(|t| t.hidden) {
            for tile in &mut self.tiles {
                tile.disabled = true;
            }
            self.last_round_attempts = Some(self.attempts);
            self.events.push(GameEvent::GameOver);
            debug!(
                "round {} over after {} attempts",
                self.round, self.attempts
            );
            self.initialize();
        } else {
            // Everything still in play was disabled only to block a
            // third flip; a mismatched pair rejoins this set.
            for tile in self.tiles.iter_mut().filter(|t| !t.hidden) {
                tile.disabled = false;
            }
        }
    }

    fn with_tile(&mut self, id: TileId, f: impl FnOnce(&mut Tile)) {
        if let Some(tile) = self.tiles.iter_mut().find(|t| t.id == id) {
            f(tile);
        }
    }

    /// (Re)initialize the board for the current size.
    ///
    /// The tile collection is rebuilt only when the count changed;
    /// otherwise tiles are reused in place. Either way every tile gets
    /// a freshly shuffled face and resets to face-down/enabled/visible.
    fn initialize(&mut self) {
        let count = self.size.tile_count();
        let pairs = self.size.pair_count();

        // Fisher-Yates over [0, count): taking the shuffled index mod
        // the pair count maps each bucket exactly twice, whatever the
        // permutation. Face images start at 1; image 0 is the back.
        let indices = self.rng.shuffled_indices(count);
        let face = |position: usize| ImageId::new((indices[position] % pairs + 1) as u32);

        if self.tiles.len() != count {
            self.tiles = (0..count)
                .map(|p| Tile::new(TileId::new(p as u32), face(p)))
                .collect();
        } else {
            for (position, tile) in self.tiles.iter_mut().enumerate() {
                tile.image = face(position);
                tile.reset();
            }
        }

        self.attempts = 0;
        self.round += 1;
        self.pending = None;
        self.open.clear();
        let (width, height) = self.size.dimensions();
        debug!(
            "initialized {}x{} board ({} tiles, round {})",
            width, height, count, self.round
        );
    }

    /// Capture the board state for checkpointing.
    ///
    /// Queued events are not part of snapshots; drain them first.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            config: self.config.clone(),
            size: self.size,
            tiles: self.tiles.clone(),
            attempts: self.attempts,
            round: self.round,
            now_ms: self.now_ms,
            open: self.open.to_vec(),
            pending: self.pending,
            last_round_attempts: self.last_round_attempts,
            rng: self.rng.state(),
        }
    }

    /// Restore a board from a snapshot.
    pub fn restore(snapshot: BoardSnapshot) -> Result<Self, GameError> {
        snapshot.config.validate_for(snapshot.size)?;
        Ok(Self {
            size: snapshot.size,
            config: snapshot.config,
            tiles: snapshot.tiles,
            attempts: snapshot.attempts,
            round: snapshot.round,
            now_ms: snapshot.now_ms,
            open: SmallVec::from_vec(snapshot.open),
            pending: snapshot.pending,
            events: EventQueue::new(),
            last_round_attempts: snapshot.last_round_attempts,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

/// Serializable board state.
///
/// Everything needed to resume a game mid-round, including the open
/// pair and its scheduled resolution. Events are excluded by design.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Game configuration (images, delays, initial size).
    pub config: GameConfig,
    /// Current board size (may differ from `config.size` after resizes).
    pub size: BoardSize,
    /// Tiles in grid order.
    pub tiles: Vec<Tile>,
    /// Resolved pairs this round.
    pub attempts: u32,
    /// Round counter.
    pub round: u32,
    /// Logical clock.
    pub now_ms: u64,
    /// Open tiles in flip order.
    pub open: Vec<TileId>,
    /// Scheduled pair resolution, if any.
    pub pending: Option<PendingResolution>,
    /// Attempt count of the last finished round.
    pub last_round_attempts: Option<u32>,
    /// RNG state.
    pub rng: GameRngState,
}
