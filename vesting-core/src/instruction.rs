//! Builders for the four vesting program instructions.
//!
//! Each instruction is a one-byte tag followed by a tag-specific payload.
//! Payload field order and account order are part of the wire contract and
//! must not change; signer/writable flags are fixed per instruction kind.

use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program, sysvar,
};

use crate::state::Schedule;

#[derive(Clone, Debug, PartialEq)]
pub enum VestingInstruction {
    /// Initializes an empty vesting account at the derived address.
    ///
    /// Accounts expected:
    ///   0. `[]` The system program account
    ///   1. `[]` The sysvar Rent account
    ///   2. `[signer, writable]` The fee payer account
    ///   3. `[writable]` The vesting account
    Init { seeds: Vec<u8> },
    /// Populates the vesting account and moves the locked tokens in.
    ///
    /// Accounts expected:
    ///   0. `[]` The spl-token program account
    ///   1. `[]` The sysvar Clock account
    ///   2. `[writable]` The vesting account
    ///   3. `[writable]` The vesting spl-token account
    ///   4. `[signer]` The source spl-token account owner
    ///   5. `[writable]` The source spl-token account
    Create {
        seeds: Vec<u8>,
        mint_address: Pubkey,
        destination_token_address: Pubkey,
        schedules: Vec<Schedule>,
    },
    /// Releases vested tokens to the destination token account.
    ///
    /// Accounts expected:
    ///   0. `[]` The spl-token program account
    ///   1. `[]` The sysvar Clock account
    ///   2. `[writable]` The vesting account
    ///   3. `[writable]` The vesting spl-token account
    ///   4. `[writable]` The destination spl-token account
    Unlock { seeds: Vec<u8> },
    /// Starts the withdrawal period for vested tokens.
    ///
    /// Same accounts as `Unlock`.
    InitializeUnlock { seeds: Vec<u8> },
}

impl VestingInstruction {
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            Self::Init { seeds } => {
                buf.push(0);
                buf.extend_from_slice(seeds);
            }
            Self::Create {
                seeds,
                mint_address,
                destination_token_address,
                schedules,
            } => {
                buf.push(1);
                buf.extend_from_slice(seeds);
                buf.extend_from_slice(&mint_address.to_bytes());
                buf.extend_from_slice(&destination_token_address.to_bytes());
                for schedule in schedules {
                    buf.extend_from_slice(&schedule.pack());
                }
            }
            Self::Unlock { seeds } => {
                buf.push(2);
                buf.extend_from_slice(seeds);
            }
            Self::InitializeUnlock { seeds } => {
                buf.push(3);
                buf.extend_from_slice(seeds);
            }
        }
        buf
    }
}

pub fn init(
    vesting_program_id: &Pubkey,
    payer: &Pubkey,
    vesting_account: &Pubkey,
    seeds: Vec<u8>,
) -> Instruction {
    let data = VestingInstruction::Init { seeds }.pack();
    let accounts = vec![
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(sysvar::rent::ID, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new(*vesting_account, false),
    ];
    Instruction {
        program_id: *vesting_program_id,
        accounts,
        data,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create(
    vesting_program_id: &Pubkey,
    vesting_account: &Pubkey,
    vesting_token_account: &Pubkey,
    source_token_owner: &Pubkey,
    source_token_account: &Pubkey,
    mint_address: &Pubkey,
    destination_token_address: &Pubkey,
    schedules: Vec<Schedule>,
    seeds: Vec<u8>,
) -> Instruction {
    let data = VestingInstruction::Create {
        seeds,
        mint_address: *mint_address,
        destination_token_address: *destination_token_address,
        schedules,
    }
    .pack();
    let accounts = vec![
        AccountMeta::new_readonly(spl_token::ID, false),
        AccountMeta::new_readonly(sysvar::clock::ID, false),
        AccountMeta::new(*vesting_account, false),
        AccountMeta::new(*vesting_token_account, false),
        AccountMeta::new_readonly(*source_token_owner, true),
        AccountMeta::new(*source_token_account, false),
    ];
    Instruction {
        program_id: *vesting_program_id,
        accounts,
        data,
    }
}

pub fn unlock(
    vesting_program_id: &Pubkey,
    vesting_account: &Pubkey,
    vesting_token_account: &Pubkey,
    destination_token_account: &Pubkey,
    seeds: Vec<u8>,
) -> Instruction {
    let data = VestingInstruction::Unlock { seeds }.pack();
    Instruction {
        program_id: *vesting_program_id,
        accounts: release_accounts(
            vesting_account,
            vesting_token_account,
            destination_token_account,
        ),
        data,
    }
}

pub fn initialize_unlock(
    vesting_program_id: &Pubkey,
    vesting_account: &Pubkey,
    vesting_token_account: &Pubkey,
    destination_token_account: &Pubkey,
    seeds: Vec<u8>,
) -> Instruction {
    let data = VestingInstruction::InitializeUnlock { seeds }.pack();
    Instruction {
        program_id: *vesting_program_id,
        accounts: release_accounts(
            vesting_account,
            vesting_token_account,
            destination_token_account,
        ),
        data,
    }
}

// Unlock and InitializeUnlock reference the same accounts in the same order.
fn release_accounts(
    vesting_account: &Pubkey,
    vesting_token_account: &Pubkey,
    destination_token_account: &Pubkey,
) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(spl_token::ID, false),
        AccountMeta::new_readonly(sysvar::clock::ID, false),
        AccountMeta::new(*vesting_account, false),
        AccountMeta::new(*vesting_token_account, false),
        AccountMeta::new(*destination_token_account, false),
    ]
}
