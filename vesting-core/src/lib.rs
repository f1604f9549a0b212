pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod state;

pub use client::*;
pub use config::*;
pub use error::*;
pub use pda::*;
pub use state::*;
