#![deny(warnings)]
pub mod model;
pub mod sim;

pub use model::card::Card;
pub use model::deck::{Deck, DeckError};
pub use model::table::Table;
pub use sim::SimulationError;
pub use sim::cycles::count_rounds_by_cycles;
pub use sim::round::{RoundSimulator, count_rounds_to_original_order, run_round};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "deckcycle"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
