mod helpers;

use helpers::{packed_contract_account, packed_uninitialized_account, MockLedger};
use solana_program::pubkey::Pubkey;
use vesting_core::client::VestingClient;
use vesting_core::config::ClientConfig;
use vesting_core::error::VestingError;
use vesting_core::state::{ProtocolVersion, Schedule};

/// Walks a contract through its whole life: create while the address is
/// free, observe the uninitialized window after Init lands, then unlock once
/// the program has populated the account.
#[tokio::test]
async fn test_full_contract_lifecycle() {
    let ledger = MockLedger::new();
    let program_id = Pubkey::new_unique();
    let config = ClientConfig::custom(program_id, ProtocolVersion::Current);
    let client = VestingClient::new(ledger.clone(), config);

    let payer = Pubkey::new_unique();
    let destination = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let schedules = vec![Schedule::new(0, 500), Schedule::new(7_776_000, 9500)];

    let instructions = client
        .create(
            b"lifecycle",
            &payer,
            &payer,
            None,
            &destination,
            &mint,
            schedules.clone(),
        )
        .await
        .unwrap();
    assert_eq!(instructions.len(), 3);

    let key = client.derive_account(b"lifecycle").unwrap();

    // Init landed, Create has not: the account exists but stays absent for
    // decoding purposes, and a second create must now conflict.
    ledger
        .set_account(
            key.address,
            packed_uninitialized_account(ProtocolVersion::Current, schedules.len()),
        )
        .await;
    assert!(matches!(
        client.contract_info(&key.address).await,
        Err(VestingError::AccountUninitialized(_))
    ));
    assert!(matches!(
        client
            .create(
                b"lifecycle",
                &payer,
                &payer,
                None,
                &destination,
                &mint,
                schedules.clone(),
            )
            .await,
        Err(VestingError::AccountAlreadyExists(_))
    ));

    // Create landed: the program wrote the populated state.
    ledger
        .set_account(
            key.address,
            packed_contract_account(&destination, &mint, &schedules),
        )
        .await;

    let info = client.contract_info(&key.address).await.unwrap();
    assert_eq!(info.destination_address, destination);
    assert_eq!(info.total_amount(), 10_000);

    let unlock = client.unlock(b"lifecycle", &mint).await.unwrap();
    assert_eq!(unlock.len(), 1);
    assert_eq!(unlock[0].accounts[4].pubkey, destination);
}

/// A fresh client over a fresh ledger must land on the same address: the
/// derivation carries no session state.
#[tokio::test]
async fn test_address_survives_client_restarts() {
    let program_id = Pubkey::new_unique();
    let config = ClientConfig::custom(program_id, ProtocolVersion::Current);

    let first = VestingClient::new(MockLedger::new(), config);
    let second = VestingClient::new(MockLedger::new(), config);

    let a = first.derive_account(b"stable seed").unwrap();
    let b = second.derive_account(b"stable seed").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.canonical_seed(), b.canonical_seed());
}

/// The legacy deployment stores no mint and exactly one schedule; a client
/// configured for it reads that layout.
#[tokio::test]
async fn test_legacy_deployment_round_trip() {
    let ledger = MockLedger::new();
    let config = ClientConfig::custom(Pubkey::new_unique(), ProtocolVersion::Legacy);
    let client = VestingClient::new(ledger.clone(), config);

    let destination = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let schedule = Schedule::new(1_700_000_000, 123);
    let key = client.derive_account(b"legacy").unwrap();
    ledger
        .set_account(
            key.address,
            helpers::packed_legacy_account(&destination, &schedule),
        )
        .await;

    let info = client.contract_info(&key.address).await.unwrap();
    assert_eq!(info.mint_address, None);
    assert_eq!(info.schedules, vec![schedule]);

    let unlock = client.unlock(b"legacy", &mint).await.unwrap();
    assert_eq!(unlock[0].accounts[4].pubkey, destination);
}
