//! Browser bindings for the game engine.
//!
//! Enabled with the `wasm` feature. The page fetches the card list, renders
//! cards, and runs real timers; this wrapper keeps all game state in Rust
//! and talks JSON across the boundary.
//!
//! ```javascript
//! import init, { WebGame } from "./pkg/pair_match.js";
//!
//! await init();
//! const game = new WebGame(null, Math.floor(Math.random() * 2 ** 32));
//! game.start(await (await fetch("./data/cards.json")).text());
//!
//! function sync() {
//!   render(JSON.parse(game.drain_events_json()));
//!   const token = game.pending_timer_token();
//!   if (token !== undefined) {
//!     setTimeout(() => { game.fire(token); sync(); }, game.pending_timer_delay());
//!   }
//! }
//!
//! function click(id) {
//!   if (game.select(id)) sync();
//! }
//! ```
//!
//! An evaluation that finds a mismatch schedules the conceal, so `sync`
//! re-arms a timer after every `fire` until nothing is pending.
//!
//! Timer tokens make stale `setTimeout` callbacks harmless: `fire` ignores
//! any token that is no longer pending.

use std::time::Duration;

use wasm_bindgen::prelude::*;

use crate::cards::InstanceId;
use crate::core::{GameConfig, TimerToken};
use crate::session::GameSession;

/// Installs the panic hook when the module loads.
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A game session exposed to JavaScript.
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WebGame {
    /// `config_json` may be `null` for defaults. `seed` is truncated to an
    /// integer.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, seed: f64) -> Result<WebGame, JsError> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::default(),
        };
        let session = GameSession::new(config, seed as u64)?;
        Ok(Self { session })
    }

    /// Start from the fetched `cards.json` text.
    pub fn start(&mut self, cards_json: &str) -> Result<(), JsError> {
        self.session.start_from_json(cards_json)?;
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), JsError> {
        self.session.restart()?;
        Ok(())
    }

    /// Click on a card. Returns whether the click was accepted.
    pub fn select(&mut self, id: u32) -> bool {
        self.session
            .handle_selection(InstanceId::new(id))
            .is_accepted()
    }

    /// Advance the logical clock by `ms` milliseconds.
    pub fn advance(&mut self, ms: f64) {
        self.session.advance(Duration::from_millis(ms.max(0.0) as u64));
    }

    /// Run the pending callback if `token` is still current.
    pub fn fire(&mut self, token: f64) -> bool {
        self.session.fire(TimerToken(token as u64))
    }

    /// Token of the pending callback, if any.
    pub fn pending_timer_token(&self) -> Option<f64> {
        self.session.pending_timer().map(|t| t.token.raw() as f64)
    }

    /// Milliseconds until the pending callback is due.
    pub fn pending_timer_delay(&self) -> Option<f64> {
        let now = self.session.now();
        self.session
            .pending_timer()
            .map(|t| t.remaining(now).as_millis() as f64)
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Whole table as JSON (`SessionSnapshot`).
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(self.session.snapshot_json()?)
    }

    /// Queued events as a JSON array, emptying the queue.
    pub fn drain_events_json(&mut self) -> Result<String, JsError> {
        Ok(self.session.drain_events_json()?)
    }
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;
    use crate::session::{GameEvent, SessionSnapshot};

    const CARDS: &str = r#"[
        {"name": "cat", "image": "cat.png"},
        {"name": "dog", "image": "dog.png"}
    ]"#;

    fn ok<T>(result: Result<T, JsError>) -> T {
        match result {
            Ok(value) => value,
            Err(_) => panic!("binding call failed"),
        }
    }

    fn game() -> WebGame {
        let mut game = ok(WebGame::new(None, 11.0));
        ok(game.start(CARDS));
        ok(game.drain_events_json());
        game
    }

    fn snapshot(game: &WebGame) -> SessionSnapshot {
        serde_json::from_str(&ok(game.snapshot_json())).unwrap()
    }

    #[test]
    fn test_snapshot_json() {
        let game = game();
        let snapshot = snapshot(&game);

        assert_eq!(snapshot.cards.len(), 4);
        assert_eq!(snapshot.pairs, 2);
        assert_eq!(snapshot.score, 0);
        assert!(snapshot.cards.iter().all(|c| !c.flipped));
    }

    #[test]
    fn test_timer_loop_until_idle() {
        let mut game = game();
        let cards = snapshot(&game).cards;
        let other = cards.iter().find(|c| c.name != cards[0].name).unwrap();

        assert!(game.select(cards[0].id.raw()));
        assert!(game.select(other.id.raw()));
        assert!(!game.select(other.id.raw()));

        let evaluate = game.pending_timer_token().unwrap();
        assert_eq!(game.pending_timer_delay(), Some(300.0));
        assert!(game.fire(evaluate));

        let conceal = game.pending_timer_token().unwrap();
        assert_ne!(conceal, evaluate);
        assert_eq!(game.pending_timer_delay(), Some(1000.0));
        assert!(!game.fire(evaluate));
        assert!(game.fire(conceal));
        assert_eq!(game.pending_timer_token(), None);

        let events: Vec<GameEvent> =
            serde_json::from_str(&ok(game.drain_events_json())).unwrap();
        assert!(matches!(events.last(), Some(GameEvent::PairConcealed { .. })));
        assert!(snapshot(&game).cards.iter().all(|c| !c.flipped));
    }
}
