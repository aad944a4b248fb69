//! The game session: one table, one score, one turn at a time.

use std::collections::VecDeque;
use std::time::Duration;

use crate::cards::{parse_definitions, CardDefinition, CardRegistry, Deck, InstanceId};
use crate::core::{
    GameConfig, GameRng, ScheduledCallback, Scheduler, ScoreTracker, TimerTask, TimerToken,
};
use crate::error::{GameError, Result};
use crate::turn::{Evaluation, IgnoreReason, Selection, TurnPhase, TurnState};

use super::events::GameEvent;
use super::view::{CardView, SessionSnapshot};

/// A memory-matching game.
///
/// Owns the loaded definitions, the dealt deck, the turn, the score and
/// the pending callback. Nothing is global, so any number of sessions can
/// run side by side.
///
/// ## Driving a session
///
/// - `start` / `start_from_json` once the host has the card list
/// - `handle_selection` for every click
/// - `advance` with elapsed time, or `fire` with the token of a host timer
/// - `drain_events` after each call to update the view
///
/// ```
/// use pair_match::{CardDefinition, GameConfig, GameSession};
/// use std::time::Duration;
///
/// let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
/// session
///     .start(vec![CardDefinition::new("cat", "cat.png")])
///     .unwrap();
///
/// let ids: Vec<_> = session.cards().iter().map(|c| c.id).collect();
/// session.handle_selection(ids[0]);
/// session.handle_selection(ids[1]);
/// session.advance(Duration::from_millis(300));
///
/// assert_eq!(session.score(), 1);
/// assert!(session.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    registry: Option<CardRegistry>,
    deck: Deck,
    turn: TurnState,
    score: ScoreTracker,
    scheduler: Scheduler,
    events: VecDeque<GameEvent>,
    completed: bool,
}

impl GameSession {
    /// Create an idle session. Nothing is dealt until `start`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: GameRng::new(seed),
            registry: None,
            deck: Deck::default(),
            turn: TurnState::new(),
            score: ScoreTracker::new(),
            scheduler: Scheduler::new(),
            events: VecDeque::new(),
            completed: false,
        })
    }

    // === Lifecycle ===

    /// Validate `definitions`, deal a shuffled pair deck and reset play.
    ///
    /// On error the session is left exactly as it was.
    pub fn start(&mut self, definitions: Vec<CardDefinition>) -> Result<()> {
        let registry = CardRegistry::from_definitions(definitions).map_err(|e| {
            log::error!("refusing to start: {e}");
            e
        })?;
        let pairs = registry.len();
        self.registry = Some(registry);
        self.deal();
        log::info!("session started with {pairs} pairs");
        self.events.push_back(GameEvent::Started { pairs });
        self.events.push_back(GameEvent::ScoreChanged { score: 0 });
        Ok(())
    }

    /// Parse a JSON card list and `start` with it.
    pub fn start_from_json(&mut self, json: &str) -> Result<()> {
        let definitions = parse_definitions(json).map_err(|e| {
            log::error!("error loading cards: {e}");
            e
        })?;
        self.start(definitions)
    }

    /// Deal the loaded definitions again with a fresh shuffle and zero score.
    pub fn restart(&mut self) -> Result<()> {
        let pairs = match &self.registry {
            Some(registry) => registry.len(),
            None => return Err(GameError::NotStarted),
        };
        self.deal();
        log::info!("session restarted with {pairs} pairs");
        self.events.push_back(GameEvent::Restarted { pairs });
        self.events.push_back(GameEvent::ScoreChanged { score: 0 });
        Ok(())
    }

    fn deal(&mut self) {
        if let Some(stale) = self.scheduler.cancel() {
            log::warn!("dropping pending {:?} callback {} on deal", stale.task, stale.token);
        }
        let Some(registry) = &self.registry else {
            return;
        };
        let mut deck = Deck::build(registry);
        deck.shuffle(&mut self.rng);
        self.deck = deck;
        self.turn.reset();
        self.score.reset();
        self.completed = false;
    }

    // === Input ===

    /// Single entry point for a click on a card.
    pub fn handle_selection(&mut self, id: InstanceId) -> Selection {
        if self.registry.is_none() {
            return Selection::Ignored(IgnoreReason::NotStarted);
        }

        let selection = self.turn.select(&mut self.deck, id);
        match selection {
            Selection::Ignored(reason) => {
                log::debug!("ignored selection of {id}: {reason:?}");
            }
            Selection::First(card) => {
                log::debug!("first card {card}");
                self.events.push_back(GameEvent::CardFlipped { card });
            }
            Selection::Second { first, second } => {
                log::debug!("second card {second} (first {first})");
                self.events.push_back(GameEvent::CardFlipped { card: second });
                self.scheduler
                    .schedule(TimerTask::Evaluate, self.config.evaluation_delay());
            }
        }
        selection
    }

    // === Time ===

    /// Move the clock forward, running every callback that comes due.
    ///
    /// Callbacks run in due order, so a conceal scheduled by an evaluation
    /// inside this window also runs if its time is reached. The clock
    /// saturates at `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.scheduler.now().saturating_add(elapsed);
        while let Some(callback) = self.scheduler.pop_due(target) {
            self.run(callback.task);
        }
        self.scheduler.advance_to(target);
    }

    /// Run the pending callback now if `token` is still current.
    ///
    /// Returns `false` for stale or unknown tokens, which change nothing.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.scheduler.take_token(token) {
            Some(callback) => {
                self.run(callback.task);
                true
            }
            None => {
                log::debug!("ignoring stale timer {token}");
                false
            }
        }
    }

    /// The callback waiting to run, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<&ScheduledCallback> {
        self.scheduler.pending()
    }

    /// Logical time elapsed in this session.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    fn run(&mut self, task: TimerTask) {
        match task {
            TimerTask::Evaluate => self.evaluate(),
            TimerTask::ConcealMismatch => match self.turn.conceal(&mut self.deck) {
                Some((first, second)) => {
                    log::debug!("concealed {first} and {second}");
                    self.events.push_back(GameEvent::PairConcealed { first, second });
                }
                None => log::warn!("conceal fired with no pair selected"),
            },
        }
    }

    fn evaluate(&mut self) {
        match self.turn.evaluate(&mut self.deck) {
            Some(Evaluation::Match { first, second, card_id }) => {
                let score = self.score.increment();
                log::debug!("matched {card_id} ({first}, {second}); score {score}");
                self.events.push_back(GameEvent::PairMatched { first, second });
                self.events.push_back(GameEvent::ScoreChanged { score });

                if !self.completed && self.deck.all_matched() {
                    self.completed = true;
                    log::info!("all {} pairs found", self.deck.pair_count());
                    self.events.push_back(GameEvent::Completed { score });
                }
            }
            Some(Evaluation::Mismatch { first, second }) => {
                log::debug!("mismatch {first} / {second}");
                self.events.push_back(GameEvent::PairMismatched { first, second });
                self.scheduler
                    .schedule(TimerTask::ConcealMismatch, self.config.mismatch_delay());
            }
            None => log::warn!("evaluation fired with no pair selected"),
        }
    }

    // === Observation ===

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Drain the event queue as a JSON array.
    pub fn drain_events_json(&mut self) -> Result<String> {
        let events = self.drain_events();
        serde_json::to_string(&events).map_err(|e| GameError::Encoding(e.to_string()))
    }

    /// `snapshot` as JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string(&self.snapshot()).map_err(|e| GameError::Encoding(e.to_string()))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Dealt cards in table order.
    #[must_use]
    pub fn cards(&self) -> &Deck {
        &self.deck
    }

    /// Loaded definitions, if `start` has succeeded.
    #[must_use]
    pub fn registry(&self) -> Option<&CardRegistry> {
        self.registry.as_ref()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.registry.is_some()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Render view of one card.
    #[must_use]
    pub fn view(&self, id: InstanceId) -> Option<CardView> {
        let registry = self.registry.as_ref()?;
        self.deck.get(id).map(|card| CardView::new(card, registry))
    }

    /// Render view of the whole table.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let cards = match &self.registry {
            Some(registry) => self
                .deck
                .iter()
                .map(|card| CardView::new(card, registry))
                .collect(),
            None => Vec::new(),
        };
        SessionSnapshot {
            cards,
            score: self.score.value(),
            phase: self.turn.phase(),
            pairs: self.deck.pair_count(),
            complete: self.completed,
            placeholder_image: self.config.placeholder_image.clone(),
        }
    }
}
