//! Typed views over vesting account bytes.
//!
//! The on-chain program is the only writer of account state, so this module
//! only decodes. Two layouts exist in the wild: the legacy one stores the
//! destination address and a single embedded schedule, the current one adds
//! the mint address to the header and holds a schedule sequence. Both are
//! handled by one [`ContractInfo`] type tagged with a [`ProtocolVersion`].

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::codec;
use crate::error::VestingError;

/// One release event: a point in time and the amount unlocked at it.
///
/// `release_time` is either an offset in seconds or an absolute unix
/// timestamp depending on the program deployment; the two are never mixed
/// within one account. No ordering or positivity checks happen here, the
/// on-chain program owns semantic legality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub release_time: u64,
    pub amount: u64,
}

pub const SCHEDULE_SIZE: usize = 16;

impl Schedule {
    pub fn new(release_time: u64, amount: u64) -> Self {
        Self {
            release_time,
            amount,
        }
    }

    pub fn pack(&self) -> [u8; SCHEDULE_SIZE] {
        let mut buf = [0u8; SCHEDULE_SIZE];
        buf[..8].copy_from_slice(&codec::encode_u64(self.release_time));
        buf[8..].copy_from_slice(&codec::encode_u64(self.amount));
        buf
    }

    pub fn unpack(src: &[u8]) -> Result<Self, VestingError> {
        if src.len() < SCHEDULE_SIZE {
            return Err(VestingError::Layout {
                expected: SCHEDULE_SIZE,
                got: src.len(),
            });
        }
        Ok(Self {
            release_time: codec::decode_u64(&src[..8])?,
            amount: codec::decode_u64(&src[8..16])?,
        })
    }
}

/// Which on-chain account layout the client expects to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// 33-byte header (destination + flag), exactly one embedded schedule.
    Legacy,
    /// 65-byte header (destination + mint + flag), schedule sequence.
    Current,
}

impl ProtocolVersion {
    pub const fn header_len(&self) -> usize {
        match self {
            ProtocolVersion::Legacy => 33,
            ProtocolVersion::Current => 65,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingHeader {
    pub destination_address: Pubkey,
    pub mint_address: Option<Pubkey>,
    pub is_initialized: bool,
}

impl VestingHeader {
    pub fn unpack(src: &[u8], version: ProtocolVersion) -> Result<Self, VestingError> {
        let header_len = version.header_len();
        if src.len() < header_len {
            return Err(VestingError::Layout {
                expected: header_len,
                got: src.len(),
            });
        }
        let destination_address = read_pubkey(&src[..32])?;
        let mint_address = match version {
            ProtocolVersion::Legacy => None,
            ProtocolVersion::Current => Some(read_pubkey(&src[32..64])?),
        };
        let is_initialized = src[header_len - 1] == 1;
        Ok(Self {
            destination_address,
            mint_address,
            is_initialized,
        })
    }
}

/// Decoded state of an initialized vesting contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub destination_address: Pubkey,
    pub mint_address: Option<Pubkey>,
    pub schedules: Vec<Schedule>,
}

impl ContractInfo {
    /// Decode raw account bytes.
    ///
    /// Returns `Ok(None)` when the initialized flag is unset: that is the
    /// normal state of a derived address whose create instruction has not
    /// landed yet, not a decode failure, and trailing bytes are ignored in
    /// that case. For initialized accounts the body must be an exact
    /// multiple of [`SCHEDULE_SIZE`] (exactly one schedule for
    /// [`ProtocolVersion::Legacy`]); any remainder is corruption.
    pub fn unpack(src: &[u8], version: ProtocolVersion) -> Result<Option<Self>, VestingError> {
        let header = VestingHeader::unpack(src, version)?;
        if !header.is_initialized {
            return Ok(None);
        }
        let body = &src[version.header_len()..];
        let schedules = match version {
            ProtocolVersion::Legacy => {
                if body.len() != SCHEDULE_SIZE {
                    return Err(VestingError::Layout {
                        expected: SCHEDULE_SIZE,
                        got: body.len(),
                    });
                }
                vec![Schedule::unpack(body)?]
            }
            ProtocolVersion::Current => {
                if body.len() % SCHEDULE_SIZE != 0 {
                    return Err(VestingError::Layout {
                        expected: body.len() - body.len() % SCHEDULE_SIZE,
                        got: body.len(),
                    });
                }
                body.chunks(SCHEDULE_SIZE)
                    .map(Schedule::unpack)
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(Some(Self {
            destination_address: header.destination_address,
            mint_address: header.mint_address,
            schedules,
        }))
    }

    /// Sum of all scheduled amounts, saturating at `u64::MAX`.
    pub fn total_amount(&self) -> u64 {
        self.schedules
            .iter()
            .fold(0u64, |acc, schedule| acc.saturating_add(schedule.amount))
    }
}

fn read_pubkey(src: &[u8]) -> Result<Pubkey, VestingError> {
    let bytes: [u8; 32] = src.try_into().map_err(|_| VestingError::Layout {
        expected: 32,
        got: src.len(),
    })?;
    Ok(Pubkey::new_from_array(bytes))
}
