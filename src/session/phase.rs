use serde::Serialize;

/// Setup seeds the stack from user input; Active is where the four
/// actions live. the only transitions are setup completion and reset.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub enum Phase {
    #[default]
    Setup,
    Active,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "SETUP"),
            Phase::Active => write!(f, "ACTIVE"),
        }
    }
}
