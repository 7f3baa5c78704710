pub mod session;

/// Chip counts: the stack, the pot, and every recorded amount.
pub type Chips = u32;

/// Stack seeded when setup input is unparseable or non-positive.
pub const DEFAULT_STACK: Chips = 100;

/// How many past actions stay visible in the session history.
pub const HISTORY: usize = 5;

/// Selectable chip denominations offered for bet and win input.
pub const DENOMINATIONS: [Chips; 6] = [1, 5, 25, 100, 500, 1000];

/// Initialize terminal logging for the interactive binary.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
