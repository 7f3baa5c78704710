use crate::Chips;
use colored::*;
use serde::Serialize;
use std::time::SystemTime;

/// the four things that can happen to the stack and pot mid-session.
/// amounts are what the player asked for; the table decides what applies
/// (bets clamp to the stack, wins credit the whole pot plus the bonus).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Action {
    Bet(Chips),
    Win(Chips),
    Fold,
    AllIn,
}

impl Action {
    pub fn kind(&self) -> Kind {
        match self {
            Action::Bet(_) => Kind::Bet,
            Action::Win(_) => Kind::Win,
            Action::Fold => Kind::Fold,
            Action::AllIn => Kind::AllIn,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Bet(amount) => write!(f, "{}", format!("BET   {}", amount).red()),
            Action::Win(bonus) => write!(f, "{}", format!("WIN   {}", bonus).green()),
            Action::Fold => write!(f, "{}", "FOLD".white().dimmed()),
            Action::AllIn => write!(f, "{}", "ALLIN".yellow()),
        }
    }
}

/// what an [Action] turned into, stripped of its requested amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Kind {
    Bet,
    Win,
    Fold,
    AllIn,
}

/// one applied action as it appears in the session history.
///
/// the amount is what actually moved, not what was requested:
/// the clamped bet, the pot plus bonus credited on a win, the pot
/// forfeited on a fold, the stack shoved on an all in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Record {
    pub kind: Kind,
    pub amount: Chips,
    pub at: SystemTime,
}

impl From<(Kind, Chips)> for Record {
    fn from((kind, amount): (Kind, Chips)) -> Self {
        Self {
            kind,
            amount,
            at: SystemTime::now(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::Win => write!(f, "{}", format!("+{} chips (won)", self.amount).green()),
            Kind::Bet => write!(f, "{}", format!("-{} chips (bet)", self.amount).red()),
            Kind::Fold => write!(f, "{}", format!("Fold (lost {})", self.amount).dimmed()),
            Kind::AllIn => write!(f, "{}", format!("All In ({} chips)", self.amount).yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert!(Action::Bet(25).kind() == Kind::Bet);
        assert!(Action::Win(0).kind() == Kind::Win);
        assert!(Action::Fold.kind() == Kind::Fold);
        assert!(Action::AllIn.kind() == Kind::AllIn);
    }
}
