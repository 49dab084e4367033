use setrs::{
    BOARD_SIZE, Card, ComputerMove, Event, Flow, Game, GameOptions, GameResult, GameState,
    Report, SelectOutcome, Snapshot, Verdict, layout,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        let options = self.game.options;
        self.game = Game::new(options, seed as u64);
    }

    /// Feeds a pointer press through the screen layout. Returns false once
    /// the game asks to quit.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        match layout::hit_test(self.game.state(), x, y) {
            Some(event) => self.send(event),
            None => true,
        }
    }

    /// Advances the countdown. Returns the computer's move, or `null` if it
    /// did not move.
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        let computer_move = match self.game.dispatch(Event::Tick).1 {
            Some(Report::Computer(computer_move)) => Some(JsComputerMove::from(computer_move)),
            _ => None,
        };
        to_js_value(&computer_move)
    }

    pub fn quit(&mut self) -> bool {
        self.send(Event::Quit)
    }

    pub fn ticker_active(&self) -> bool {
        self.game.ticker_active()
    }

    pub fn more_time(&mut self) -> Result<u32, JsValue> {
        self.game.increase_round_seconds().map_err(js_err)
    }

    pub fn less_time(&mut self) -> Result<u32, JsValue> {
        self.game.decrease_round_seconds().map_err(js_err)
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.game.start().map_err(js_err)
    }

    pub fn select(&mut self, slot: u32) -> Result<JsValue, JsValue> {
        let slot = board_slot(slot)
            .ok_or_else(|| JsValue::from_str(&format!("slot {slot} is not on the board")))?;
        let outcome = self.game.select(slot).map_err(js_err)?;
        to_js_value(&JsSelectOutcome::from(outcome))
    }

    pub fn replay(&mut self) -> Result<(), JsValue> {
        self.game.replay().map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

impl WasmGame {
    fn send(&mut self, event: Event) -> bool {
        self.game.handle_event(event) != Flow::Quit
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    state: &'static str,
    slots: Vec<Option<JsCard>>,
    selection: Vec<u32>,
    player_score: u32,
    computer_score: u32,
    timer: u32,
    cards_remaining: u32,
    round_seconds: u32,
    result: Option<JsResult>,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            state: state_to_str(snapshot.state),
            slots: snapshot
                .board
                .slots()
                .iter()
                .map(|slot| slot.map(card_to_js))
                .collect(),
            selection: snapshot
                .selection
                .slots()
                .iter()
                .map(|&slot| slot as u32)
                .collect(),
            player_score: snapshot.scores.player,
            computer_score: snapshot.scores.computer,
            timer: snapshot.timer,
            cards_remaining: snapshot.cards_remaining as u32,
            round_seconds: snapshot.round_seconds,
            result: snapshot.result.map(JsResult::from),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    asset_id: String,
    color: &'static str,
    symbol: &'static str,
    shading: &'static str,
    number: u8,
}

#[derive(Serialize)]
struct JsResult {
    verdict: &'static str,
    tie: bool,
    player_score: u32,
    computer_score: u32,
}

impl From<GameResult> for JsResult {
    fn from(result: GameResult) -> Self {
        Self {
            verdict: match result.verdict {
                Verdict::Win => "Win",
                Verdict::Lose => "Lose",
            },
            tie: result.is_tie(),
            player_score: result.scores.player,
            computer_score: result.scores.computer,
        }
    }
}

#[derive(Serialize)]
struct JsSelectOutcome {
    outcome: &'static str,
    slots: Vec<u32>,
}

impl From<SelectOutcome> for JsSelectOutcome {
    fn from(outcome: SelectOutcome) -> Self {
        let (outcome, slots) = match outcome {
            SelectOutcome::Selected => ("Selected", Vec::new()),
            SelectOutcome::Deselected => ("Deselected", Vec::new()),
            SelectOutcome::Claimed(slots) => ("Claimed", slots_to_js(slots)),
            SelectOutcome::Rejected(slots) => ("Rejected", slots_to_js(slots)),
        };
        Self { outcome, slots }
    }
}

#[derive(Serialize)]
struct JsComputerMove {
    kind: &'static str,
    slots: Vec<u32>,
}

impl From<ComputerMove> for JsComputerMove {
    fn from(computer_move: ComputerMove) -> Self {
        match computer_move {
            ComputerMove::ClaimedSet(slots) => Self {
                kind: "ClaimedSet",
                slots: slots_to_js(slots),
            },
            ComputerMove::ForcedReplace => Self {
                kind: "ForcedReplace",
                slots: slots_to_js(setrs::game::FALLBACK_SLOTS),
            },
        }
    }
}

/// Converts a slot index from JS, rejecting anything off the board.
fn board_slot(slot: u32) -> Option<usize> {
    let slot = slot as usize;
    (slot < BOARD_SIZE).then_some(slot)
}

fn slots_to_js(slots: [usize; 3]) -> Vec<u32> {
    slots.iter().map(|&slot| slot as u32).collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        asset_id: card.asset_id(),
        color: card.color.name(),
        symbol: card.symbol.name(),
        shading: card.shading.name(),
        number: card.number.count(),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Home => "Home",
        GameState::Playing => "Playing",
        GameState::End => "End",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_slot_rejects_indices_off_the_board() {
        assert_eq!(board_slot(0), Some(0));
        assert_eq!(board_slot(11), Some(11));
        assert_eq!(board_slot(12), None);
        assert_eq!(board_slot(u32::MAX), None);
    }
}
