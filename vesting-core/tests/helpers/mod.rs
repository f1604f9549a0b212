pub mod fixtures;
pub mod mock_ledger;

pub use fixtures::*;
pub use mock_ledger::*;
