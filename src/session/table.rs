use super::action::Action;
use super::action::Record;
use super::history::History;
use super::phase::Phase;
use super::tier::Tier;
use crate::Chips;
use crate::DEFAULT_STACK;
use colored::*;
use serde::Serialize;

/// the session table: one player's stack, the shared pot, and the
/// visible history window.
///
/// transitions are pure functions returning the next table, so callers
/// swap a whole table in and observers never see a half-applied state.
/// both quantities are unsigned and every subtraction is clamped, so
/// stack and pot can never go negative.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    phase: Phase,
    stack: Chips,
    pot: Chips,
    history: History,
}

impl Table {
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            stack: 0,
            pot: 0,
            history: History::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn history(&self) -> &History {
        &self.history
    }

    /// parse free-text setup input. anything unparseable or non-positive
    /// falls back to the default stack rather than surfacing an error.
    pub fn seed(raw: &str) -> Chips {
        raw.trim()
            .parse::<Chips>()
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_STACK)
    }

    /// complete setup: seed the stack from raw input, zero the pot,
    /// forget any prior history, and enter play.
    pub fn setup(&self, raw: &str) -> Self {
        let mut next = self.clone();
        next.stack = Self::seed(raw);
        next.pot = 0;
        next.history.clear();
        next.phase = Phase::Active;
        next
    }

    /// apply one action and return the resulting table.
    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        next.act(action);
        next
    }

    /// back to setup. the pot and history are gone; the stack stays
    /// put until the next setup overwrites it.
    pub fn reset(&self) -> Self {
        let mut next = self.clone();
        next.phase = Phase::Setup;
        next.pot = 0;
        next.history.clear();
        next
    }

    fn act(&mut self, action: Action) {
        debug_assert!(self.phase == Phase::Active);
        match action {
            Action::Bet(requested) => {
                // over-large bets clamp to the stack instead of failing
                let applied = std::cmp::min(requested, self.stack);
                self.stack -= applied;
                self.pot += applied;
                self.record(action, applied);
            }
            Action::Win(bonus) => {
                // the whole pot comes home, plus whatever bonus was won
                let credited = self.pot + bonus;
                self.stack += credited;
                self.pot = 0;
                self.record(action, credited);
            }
            Action::Fold => {
                let forfeited = self.pot;
                self.pot = 0;
                self.record(action, forfeited);
            }
            Action::AllIn => {
                // shoving nothing is not an action
                if self.stack == 0 {
                    return;
                }
                let shoved = self.stack;
                self.pot += shoved;
                self.stack = 0;
                self.record(action, shoved);
            }
        }
    }

    fn record(&mut self, action: Action, amount: Chips) {
        self.history.append(Record::from((action.kind(), amount)));
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {:>6}   {} {:>6}",
            "STACK".bold(),
            self.stack.to_string().color(Tier::from(self.stack).color()),
            "POT".bold(),
            self.pot.to_string().color(Tier::from(self.pot).color()),
        )
    }
}
