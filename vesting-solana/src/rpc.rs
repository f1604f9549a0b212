//! Ledger transport over a Solana JSON-RPC node.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use vesting_core::client::LedgerRpc;
use vesting_core::error::VestingError;

pub struct RpcLedger {
    rpc: RpcClient,
}

impl RpcLedger {
    pub fn new(url: String) -> Self {
        Self {
            rpc: RpcClient::new(url),
        }
    }

    pub fn new_with_commitment(url: String, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(url, commitment),
        }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }
}

impl LedgerRpc for RpcLedger {
    async fn fetch_account_bytes(
        &self,
        address: &Pubkey,
    ) -> Result<Option<Vec<u8>>, VestingError> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await
            .map_err(|err| VestingError::Rpc(err.to_string()))?;
        Ok(response.value.map(|account| account.data))
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, VestingError> {
        Ok(self.fetch_account_bytes(address).await?.is_some())
    }

    async fn resolve_associated_address(&self, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, mint)
    }
}
