use solana_program::pubkey::Pubkey;
use vesting_core::state::{ProtocolVersion, Schedule};

/// Account bytes as the current program writes them: destination, mint,
/// initialized flag, then one 16-byte record per schedule.
pub fn packed_contract_account(
    destination: &Pubkey,
    mint: &Pubkey,
    schedules: &[Schedule],
) -> Vec<u8> {
    let mut data = Vec::with_capacity(65 + 16 * schedules.len());
    data.extend_from_slice(&destination.to_bytes());
    data.extend_from_slice(&mint.to_bytes());
    data.push(1);
    for schedule in schedules {
        data.extend_from_slice(&schedule.pack());
    }
    data
}

/// Legacy layout: destination, initialized flag, one embedded schedule.
pub fn packed_legacy_account(destination: &Pubkey, schedule: &Schedule) -> Vec<u8> {
    let mut data = Vec::with_capacity(49);
    data.extend_from_slice(&destination.to_bytes());
    data.push(1);
    data.extend_from_slice(&schedule.pack());
    data
}

/// An account allocated by Init but never populated by Create.
pub fn packed_uninitialized_account(version: ProtocolVersion, schedule_count: usize) -> Vec<u8> {
    vec![0u8; version.header_len() + 16 * schedule_count]
}

pub fn test_schedules() -> Vec<Schedule> {
    vec![Schedule::new(0, 1000), Schedule::new(86_400, 2500)]
}
