use solana_program::pubkey::Pubkey;
use thiserror::Error;

/// Everything that can go wrong on the client side. All variants are fatal
/// to the operation that produced them; nothing is retried internally.
#[derive(Debug, Error)]
pub enum VestingError {
    /// Account or instruction bytes do not match the expected layout.
    #[error("malformed bytes: expected {expected} bytes, got {got}")]
    Layout { expected: usize, got: usize },

    /// No bump in the search space produced an off-curve address.
    #[error("program address derivation exhausted the bump search space")]
    DerivationExhausted,

    /// A vesting contract already lives at the derived address. The caller
    /// must pick a different seed.
    #[error("vesting account {0} already exists")]
    AccountAlreadyExists(Pubkey),

    /// The vesting account does not exist on the ledger yet.
    #[error("vesting account {0} is unavailable")]
    AccountUnavailable(Pubkey),

    /// The vesting account exists but its initialized flag is unset, meaning
    /// the create instruction has not landed.
    #[error("vesting account {0} is not initialized")]
    AccountUninitialized(Pubkey),

    /// The ledger transport failed.
    #[error("ledger rpc failure: {0}")]
    Rpc(String),
}
