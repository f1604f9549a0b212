//! High-level vesting operations over a ledger transport.

use solana_program::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::config::ClientConfig;
use crate::error::VestingError;
use crate::instruction;
use crate::pda::VestingAccountKey;
use crate::state::{ContractInfo, Schedule};

/// The ledger RPC collaborator. Implementations either talk to a real node
/// (`vesting-solana`) or serve canned accounts in tests.
#[allow(async_fn_in_trait)]
pub trait LedgerRpc {
    /// Raw bytes of the account, or `None` if no account exists there.
    async fn fetch_account_bytes(&self, address: &Pubkey)
        -> Result<Option<Vec<u8>>, VestingError>;

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, VestingError>;

    /// Conventional associated token account address for `(mint, owner)`.
    async fn resolve_associated_address(&self, mint: &Pubkey, owner: &Pubkey) -> Pubkey;
}

/// Builds the instruction sequences for the vesting operations. Pure data
/// transforms except for the `LedgerRpc` calls; no signing, no submission,
/// no retries.
pub struct VestingClient<L> {
    ledger: L,
    config: ClientConfig,
}

impl<L: LedgerRpc> VestingClient<L> {
    pub fn new(ledger: L, config: ClientConfig) -> Self {
        Self { ledger, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Recomputes the vesting account key for a seed. Idempotent.
    pub fn derive_account(&self, seed: &[u8]) -> Result<VestingAccountKey, VestingError> {
        VestingAccountKey::derive(seed, &self.config.program_id)
    }

    /// Lock tokens: returns `[Init, create-associated-account, Create]`.
    ///
    /// When `source_token_account` is `None` it defaults to the associated
    /// token account of `(mint, source_token_owner)`. Fails with
    /// [`VestingError::AccountAlreadyExists`] if the derived address is
    /// already taken, before any instruction is built.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        seed: &[u8],
        payer: &Pubkey,
        source_token_owner: &Pubkey,
        source_token_account: Option<Pubkey>,
        destination_token_account: &Pubkey,
        mint: &Pubkey,
        schedules: Vec<Schedule>,
    ) -> Result<Vec<Instruction>, VestingError> {
        let key = self.derive_account(seed)?;
        let source_token_account = match source_token_account {
            Some(account) => account,
            None => {
                self.ledger
                    .resolve_associated_address(mint, source_token_owner)
                    .await
            }
        };
        if self.ledger.account_exists(&key.address).await? {
            return Err(VestingError::AccountAlreadyExists(key.address));
        }
        let vesting_token_account = self
            .ledger
            .resolve_associated_address(mint, &key.address)
            .await;
        let seeds = key.canonical_seed();
        tracing::debug!(vesting = %key.address, bump = key.bump, "building create instructions");
        Ok(vec![
            instruction::init(&self.config.program_id, payer, &key.address, seeds.clone()),
            create_associated_token_account(payer, &key.address, mint, &spl_token::ID),
            instruction::create(
                &self.config.program_id,
                &key.address,
                &vesting_token_account,
                source_token_owner,
                &source_token_account,
                mint,
                destination_token_account,
                schedules,
                seeds,
            ),
        ])
    }

    /// Release vested tokens to the destination recorded on-chain.
    pub async fn unlock(
        &self,
        seed: &[u8],
        mint: &Pubkey,
    ) -> Result<Vec<Instruction>, VestingError> {
        let (key, vesting_token_account, info) = self.fetch_for_release(seed, mint).await?;
        Ok(vec![instruction::unlock(
            &self.config.program_id,
            &key.address,
            &vesting_token_account,
            &info.destination_address,
            key.canonical_seed(),
        )])
    }

    /// Start the withdrawal period for vested tokens.
    pub async fn initialize_unlock(
        &self,
        seed: &[u8],
        mint: &Pubkey,
    ) -> Result<Vec<Instruction>, VestingError> {
        let (key, vesting_token_account, info) = self.fetch_for_release(seed, mint).await?;
        Ok(vec![instruction::initialize_unlock(
            &self.config.program_id,
            &key.address,
            &vesting_token_account,
            &info.destination_address,
            key.canonical_seed(),
        )])
    }

    /// Fetch and decode a vesting account.
    ///
    /// Distinguishes "no account" ([`VestingError::AccountUnavailable`])
    /// from "account exists but the create instruction has not landed"
    /// ([`VestingError::AccountUninitialized`]).
    pub async fn contract_info(&self, address: &Pubkey) -> Result<ContractInfo, VestingError> {
        tracing::debug!(vesting = %address, "fetching contract state");
        let bytes = self
            .ledger
            .fetch_account_bytes(address)
            .await?
            .ok_or(VestingError::AccountUnavailable(*address))?;
        ContractInfo::unpack(&bytes, self.config.version)?
            .ok_or(VestingError::AccountUninitialized(*address))
    }

    async fn fetch_for_release(
        &self,
        seed: &[u8],
        mint: &Pubkey,
    ) -> Result<(VestingAccountKey, Pubkey, ContractInfo), VestingError> {
        let key = self.derive_account(seed)?;
        let vesting_token_account = self
            .ledger
            .resolve_associated_address(mint, &key.address)
            .await;
        let info = self.contract_info(&key.address).await?;
        Ok((key, vesting_token_account, info))
    }
}
