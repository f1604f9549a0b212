//! Program-id configuration.
//!
//! The network mode is an explicit parameter, never guessed from an RPC URL.

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::state::ProtocolVersion;

pub const MAINNET_VESTING_PROGRAM_ID: Pubkey =
    solana_program::pubkey!("AKUgi92CLv6ce4d6MNHZXeKUFU2SbnAzLc77JN63EGBA");

pub const DEVNET_VESTING_PROGRAM_ID: Pubkey =
    solana_program::pubkey!("5UmrfVDhyotfF6Dufved4yjFPCVJdNHu22u1e6ohSyn6");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Devnet,
}

impl Network {
    pub const fn vesting_program_id(&self) -> Pubkey {
        match self {
            Network::Mainnet => MAINNET_VESTING_PROGRAM_ID,
            Network::Devnet => DEVNET_VESTING_PROGRAM_ID,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub program_id: Pubkey,
    pub version: ProtocolVersion,
}

impl ClientConfig {
    pub fn new(network: Network) -> Self {
        Self {
            program_id: network.vesting_program_id(),
            version: ProtocolVersion::Current,
        }
    }

    /// A non-standard deployment of the vesting program.
    pub fn custom(program_id: Pubkey, version: ProtocolVersion) -> Self {
        Self {
            program_id,
            version,
        }
    }
}
