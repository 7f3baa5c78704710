use super::action::Record;
use crate::HISTORY;
use serde::Serialize;
use std::collections::VecDeque;

/// most-recent-first window over applied actions, capped at [HISTORY]
/// entries. appending past the cap evicts from the oldest end. index 0
/// is always the latest record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct History(VecDeque<Record>);

impl History {
    pub fn new() -> Self {
        Self(VecDeque::with_capacity(HISTORY))
    }
    pub fn append(&mut self, record: Record) {
        self.0.push_front(record);
        self.0.truncate(HISTORY);
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn latest(&self) -> Option<&Record> {
        self.0.front()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::action::Kind;

    #[test]
    fn newest_first() {
        let mut history = History::new();
        history.append(Record::from((Kind::Bet, 5)));
        history.append(Record::from((Kind::Fold, 5)));
        assert!(history.latest().unwrap().kind == Kind::Fold);
        assert!(history.iter().last().unwrap().kind == Kind::Bet);
    }

    #[test]
    fn capped_at_window() {
        let mut history = History::new();
        for amount in 1..=6 {
            history.append(Record::from((Kind::Bet, amount)));
        }
        assert!(history.len() == HISTORY);
        assert!(history.latest().unwrap().amount == 6);
        // the first append is the one evicted
        assert!(history.iter().all(|r| r.amount != 1));
        assert!(history.iter().last().unwrap().amount == 2);
    }

    #[test]
    fn cleared() {
        let mut history = History::new();
        history.append(Record::from((Kind::Win, 100)));
        history.clear();
        assert!(history.is_empty());
    }
}
