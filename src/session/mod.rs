pub mod action;
pub use action::*;

pub mod controller;
pub use controller::*;

pub mod history;
pub use history::*;

pub mod phase;
pub use phase::*;

pub mod table;
pub use table::*;

pub mod tier;
pub use tier::*;
