mod ledger;
mod squad_win;

pub use ledger::*;
pub use squad_win::*;
