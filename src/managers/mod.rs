// Shelfmark state managers
// Managers handle stateful collections behind the card callbacks.

pub mod library;
