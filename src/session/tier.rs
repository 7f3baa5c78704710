use crate::Chips;
use serde::Serialize;

/// display bucket for a chip amount, following casino chip colors.
/// purely cosmetic: nothing on the table depends on it, but the
/// boundaries are a stable contract with the presentation layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub enum Tier {
    White,
    Red,
    Green,
    Black,
    Purple,
    Gold,
}

impl From<Chips> for Tier {
    fn from(amount: Chips) -> Self {
        match amount {
            0..5 => Tier::White,
            5..25 => Tier::Red,
            25..100 => Tier::Green,
            100..500 => Tier::Black,
            500..1000 => Tier::Purple,
            _ => Tier::Gold,
        }
    }
}

impl Tier {
    /// terminal stand-in for the chip's face color.
    pub fn color(&self) -> colored::Color {
        match self {
            Tier::White => colored::Color::White,
            Tier::Red => colored::Color::Red,
            Tier::Green => colored::Color::Green,
            Tier::Black => colored::Color::BrightBlack,
            Tier::Purple => colored::Color::Magenta,
            Tier::Gold => colored::Color::Yellow,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tier::White => write!(f, "white"),
            Tier::Red => write!(f, "red"),
            Tier::Green => write!(f, "green"),
            Tier::Black => write!(f, "black"),
            Tier::Purple => write!(f, "purple"),
            Tier::Gold => write!(f, "gold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert!(Tier::from(0) == Tier::White);
        assert!(Tier::from(4) == Tier::White);
        assert!(Tier::from(5) == Tier::Red);
        assert!(Tier::from(24) == Tier::Red);
        assert!(Tier::from(25) == Tier::Green);
        assert!(Tier::from(99) == Tier::Green);
        assert!(Tier::from(100) == Tier::Black);
        assert!(Tier::from(499) == Tier::Black);
        assert!(Tier::from(500) == Tier::Purple);
        assert!(Tier::from(999) == Tier::Purple);
        assert!(Tier::from(1000) == Tier::Gold);
        assert!(Tier::from(50_000) == Tier::Gold);
    }
}
