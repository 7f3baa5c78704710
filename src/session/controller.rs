use super::action::Action;
use super::phase::Phase;
use super::table::Table;
use crate::Chips;
use crate::DENOMINATIONS;

/// which denomination picker the presentation layer has open.
/// bet picks are limited by the stack; win bonuses never are.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Bet,
    Win,
}

/// the single writer of session state. mediates between external
/// intents and the [Table]: gates everything by phase, answers the
/// presentation layer's capability queries, and logs each transition.
/// intents whose precondition fails are dropped, never errors.
#[derive(Debug, Default)]
pub struct Controller {
    table: Table,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// the current state, read-only.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// complete setup from free-text input. ignored mid-session;
    /// only reset() leads back to setup.
    pub fn setup(&mut self, raw: &str) {
        match self.table.phase() {
            Phase::Setup => {
                self.table = self.table.setup(raw);
                log::info!("{:<8}{:>6} stack", "SETUP", self.table.stack());
            }
            Phase::Active => log::warn!("setup ignored mid-session"),
        }
    }

    pub fn bet(&mut self, requested: Chips) {
        self.act(Action::Bet(requested));
    }
    pub fn win(&mut self, bonus: Chips) {
        self.act(Action::Win(bonus));
    }
    pub fn fold(&mut self) {
        self.act(Action::Fold);
    }
    pub fn all_in(&mut self) {
        self.act(Action::AllIn);
    }

    /// back to setup, dropping pot and history. the stack value
    /// survives until the next setup re-seeds it.
    pub fn reset(&mut self) {
        self.table = self.table.reset();
        log::info!("session reset");
    }

    /// catalog amounts the presentation layer may offer right now.
    /// this is an affordance, not an engine rule: the table would
    /// still clamp an oversized bet submitted anyway.
    pub fn choices(&self, mode: Mode) -> Vec<Chips> {
        DENOMINATIONS
            .iter()
            .copied()
            .filter(|&value| match mode {
                Mode::Bet => value <= self.table.stack(),
                Mode::Win => true,
            })
            .collect()
    }

    /// an empty stack has nothing left to bet.
    pub fn can_bet(&self) -> bool {
        self.table.phase() == Phase::Active && self.table.stack() > 0
    }
    /// nothing at stake means nothing to fold away.
    pub fn can_fold(&self) -> bool {
        self.table.phase() == Phase::Active && self.table.pot() > 0
    }
    /// an empty stack has nothing left to shove.
    pub fn can_all_in(&self) -> bool {
        self.table.phase() == Phase::Active && self.table.stack() > 0
    }

    fn act(&mut self, action: Action) {
        match self.table.phase() {
            Phase::Active => {
                self.table = self.table.apply(action);
                log::info!(
                    "{:<8}{:>6} stack {:>6} pot",
                    action.to_string(),
                    self.table.stack(),
                    self.table.pot(),
                );
            }
            Phase::Setup => log::warn!("{} ignored before setup", action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated(stack: Chips) -> Controller {
        let mut controller = Controller::new();
        controller.setup(&stack.to_string());
        controller
    }

    #[test]
    fn actions_ignored_before_setup() {
        let mut controller = Controller::new();
        controller.bet(25);
        controller.win(100);
        controller.fold();
        controller.all_in();
        assert!(controller.table().phase() == Phase::Setup);
        assert!(controller.table().stack() == 0);
        assert!(controller.table().pot() == 0);
        assert!(controller.table().history().is_empty());
    }

    #[test]
    fn setup_ignored_while_active() {
        let mut controller = seated(100);
        controller.bet(25);
        controller.setup("9999");
        assert!(controller.table().stack() == 75);
        assert!(controller.table().pot() == 25);
    }

    #[test]
    fn reset_reopens_setup() {
        let mut controller = seated(100);
        controller.bet(25);
        controller.reset();
        assert!(controller.table().phase() == Phase::Setup);
        assert!(controller.table().stack() == 75);
        assert!(controller.table().pot() == 0);
        assert!(controller.table().history().is_empty());
        controller.setup("500");
        assert!(controller.table().stack() == 500);
    }

    #[test]
    fn bet_choices_fit_the_stack() {
        let controller = seated(30);
        assert!(controller.choices(Mode::Bet) == vec![1, 5, 25]);
    }

    #[test]
    fn win_choices_ignore_the_stack() {
        let mut controller = seated(30);
        controller.all_in();
        assert!(controller.choices(Mode::Bet).is_empty());
        assert!(controller.choices(Mode::Win) == DENOMINATIONS.to_vec());
    }

    #[test]
    fn capability_gates() {
        let mut controller = seated(100);
        assert!(controller.can_bet());
        assert!(controller.can_all_in());
        assert!(!controller.can_fold());
        controller.all_in();
        assert!(!controller.can_bet());
        assert!(!controller.can_all_in());
        assert!(controller.can_fold());
        controller.fold();
        assert!(!controller.can_fold());
    }

    #[test]
    fn gates_closed_during_setup() {
        let controller = Controller::new();
        assert!(!controller.can_bet());
        assert!(!controller.can_fold());
        assert!(!controller.can_all_in());
    }
}
