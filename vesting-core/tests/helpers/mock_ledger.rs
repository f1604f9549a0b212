use solana_program::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use vesting_core::client::LedgerRpc;
use vesting_core::error::VestingError;

/// In-memory ledger: a map of account addresses to raw bytes. Tests seed it
/// with account data exactly as the on-chain program would have written it.
#[derive(Clone, Default)]
pub struct MockLedger {
    accounts: Arc<RwLock<HashMap<Pubkey, Vec<u8>>>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_account(&self, address: Pubkey, data: Vec<u8>) {
        self.accounts.write().await.insert(address, data);
    }

    pub async fn remove_account(&self, address: &Pubkey) {
        self.accounts.write().await.remove(address);
    }
}

impl LedgerRpc for MockLedger {
    async fn fetch_account_bytes(
        &self,
        address: &Pubkey,
    ) -> Result<Option<Vec<u8>>, VestingError> {
        Ok(self.accounts.read().await.get(address).cloned())
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, VestingError> {
        Ok(self.accounts.read().await.contains_key(address))
    }

    async fn resolve_associated_address(&self, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, mint)
    }
}
