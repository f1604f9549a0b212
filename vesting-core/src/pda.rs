//! Deterministic derivation of the vesting account address.

use solana_program::pubkey::Pubkey;

use crate::error::VestingError;

/// Hard cap on the seed bytes fed into the derivation. Longer inputs are
/// truncated, not hashed, so the first 31 bytes fully determine the address.
/// The 32nd seed byte is reserved for the bump.
pub const MAX_SEED_LEN: usize = 31;

/// The program-derived address of a vesting contract, together with the
/// bump that pushed it off-curve and the truncated seed it came from.
///
/// Purely derived data: identical `(seed, program_id)` inputs always yield
/// the identical key, so callers recompute it on demand instead of
/// persisting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingAccountKey {
    pub address: Pubkey,
    pub bump: u8,
    seed: Vec<u8>,
}

impl VestingAccountKey {
    pub fn derive(seed: &[u8], program_id: &Pubkey) -> Result<Self, VestingError> {
        let seed = &seed[..seed.len().min(MAX_SEED_LEN)];
        let (address, bump) = Pubkey::try_find_program_address(&[seed], program_id)
            .ok_or(VestingError::DerivationExhausted)?;
        Ok(Self {
            address,
            bump,
            seed: seed.to_vec(),
        })
    }

    /// Truncated seed with the bump byte appended. This is the seed argument
    /// the on-chain program expects in every instruction payload.
    pub fn canonical_seed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.seed.len() + 1);
        out.extend_from_slice(&self.seed);
        out.push(self.bump);
        out
    }
}
