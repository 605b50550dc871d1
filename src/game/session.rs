//! Game controller: the Idle/Active state machine and the per-frame step.
//!
//! Everything mutable lives in one [`Game`] value. The browser glue owns it in a
//! thread local and feeds it animation timestamps, key events and fetch results;
//! tests drive it directly with fixed timestamps and a seeded RNG.

use rand::Rng;

use super::difficulty::{INITIAL_SPAWN_INTERVAL_MS, spawn_interval_for};
use super::input::{KeyMatch, match_key};
use super::sim::{LiveWords, WordId};
use super::spawn::{SpawnHistory, SpawnOutcome, spawn_word};
use super::storage::{HighScore, KeyValueStore};
use super::words::{WordPool, resolve_words};
use crate::config::GameConfig;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen; waiting for space.
    Idle,
    Active,
}

/// Counters of the current (or last) session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub score: u32,
    /// Pixels per frame.
    pub speed: f64,
    pub spawn_interval_ms: f64,
    /// Animation timestamp of the last spawn attempt (or of the session start).
    pub last_spawn_ms: f64,
    /// Session number; word fetches are tagged with it.
    pub epoch: u64,
}

impl GameSession {
    fn fresh(speed: f64, now: f64, epoch: u64) -> Self {
        Self {
            score: 0,
            speed,
            spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
            last_spawn_ms: now,
            epoch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Space while idle began session `epoch`; its word list should be fetched now.
    Started { epoch: u64 },
    Typed { id: WordId, remaining: usize },
    Completed { id: WordId, score: u32 },
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Idle,
    /// Words moved; nothing else happened.
    Moved,
    /// Words moved and the spawn interval elapsed.
    SpawnAttempted(SpawnOutcome),
    /// A word crossed the right edge and the session ended.
    GameOver { score: u32, new_high_score: bool },
}

pub struct Game {
    config: GameConfig,
    phase: Phase,
    session: GameSession,
    live: LiveWords,
    history: SpawnHistory,
    pool: WordPool,
    high_score: HighScore,
    store: Box<dyn KeyValueStore>,
}

impl Game {
    /// Idle game with the high score read from `store`.
    pub fn new(config: GameConfig, store: Box<dyn KeyValueStore>) -> Self {
        let high_score = HighScore::load(store.as_ref(), &config.storage_key);
        Self {
            phase: Phase::Idle,
            session: GameSession::fresh(config.speed, 0.0, 0),
            live: LiveWords::new(),
            history: SpawnHistory::with_capacity(config.history_capacity),
            pool: WordPool::new(),
            high_score,
            store,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn live(&self) -> &LiveWords {
        &self.live
    }

    pub fn history(&self) -> &SpawnHistory {
        &self.history
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    /// Idle -> Active. Resets all session state and starts waiting for the word list
    /// of the new epoch. Returns that epoch. Ignored (returns None) while active.
    pub fn start(&mut self, now: f64) -> Option<u64> {
        if self.phase == Phase::Active {
            return None;
        }
        let epoch = self.session.epoch + 1;
        self.session = GameSession::fresh(self.config.speed, now, epoch);
        self.live.clear();
        self.history.clear();
        self.pool.begin_loading(epoch);
        self.phase = Phase::Active;
        log::info!("Session {epoch} started");
        Some(epoch)
    }

    /// Deliver the word fetch result for `epoch`. Results for any session other than
    /// the one currently loading are dropped. Returns true if the pool was filled.
    pub fn words_arrived<R: Rng + ?Sized>(
        &mut self,
        epoch: u64,
        fetched: Result<Vec<String>, GameError>,
        rng: &mut R,
    ) -> bool {
        let words = resolve_words(fetched, rng);
        let filled = self.pool.fill(epoch, words);
        if !filled {
            log::warn!(
                "Discarding word list for stale session {epoch} (current {})",
                self.session.epoch
            );
        }
        filled
    }

    /// Keydown handler. `key` is the logical key (`"a"`, `" "`, `"Shift"`), `code`
    /// the physical key code (`"Space"`).
    pub fn on_key(&mut self, key: &str, code: &str, now: f64) -> KeyOutcome {
        match self.phase {
            Phase::Idle if code == "Space" => match self.start(now) {
                Some(epoch) => KeyOutcome::Started { epoch },
                None => KeyOutcome::Ignored,
            },
            Phase::Idle => KeyOutcome::Ignored,
            Phase::Active => match match_key(key, &mut self.live) {
                KeyMatch::Ignored => KeyOutcome::Ignored,
                KeyMatch::Typed { id, remaining } => KeyOutcome::Typed { id, remaining },
                KeyMatch::Completed { id } => {
                    self.session.score += 1;
                    self.session.spawn_interval_ms = spawn_interval_for(self.session.score);
                    KeyOutcome::Completed {
                        id,
                        score: self.session.score,
                    }
                }
            },
        }
    }

    /// One animation frame. While active: move every word, end the session if one
    /// crossed `width`, otherwise spawn once the spawn interval has elapsed.
    pub fn frame<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> FrameOutcome {
        if self.phase == Phase::Idle {
            return FrameOutcome::Idle;
        }
        if self.live.advance(self.session.speed, width) {
            return self.end();
        }
        if now - self.session.last_spawn_ms > self.session.spawn_interval_ms {
            let outcome = spawn_word(
                &self.pool,
                &mut self.history,
                &mut self.live,
                height,
                &self.config,
                rng,
            );
            self.session.last_spawn_ms = now;
            return FrameOutcome::SpawnAttempted(outcome);
        }
        FrameOutcome::Moved
    }

    /// Active -> Idle: settle the high score and clear the field.
    fn end(&mut self) -> FrameOutcome {
        let score = self.session.score;
        let new_high_score = self.high_score.submit(score, self.store.as_mut());
        self.live.clear();
        self.phase = Phase::Idle;
        log::info!(
            "Session {} over with score {score} (high score {})",
            self.session.epoch,
            self.high_score.best()
        );
        FrameOutcome::GameOver {
            score,
            new_high_score,
        }
    }
}
