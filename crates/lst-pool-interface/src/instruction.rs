//! Instruction discriminators and instruction data builders.
//!
//! Every instruction buffer is `[opcode: u8, payload...]`. Payload lengths are
//! fixed per opcode; see [`LstPoolInstructionTag::payload_len`].

use num_enum::{IntoPrimitive, TryFromPrimitive};
use pinocchio::pubkey::Pubkey;
use strum::IntoStaticStr;

/// Opcode of an LST pool instruction.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, IntoStaticStr,
)]
pub enum LstPoolInstructionTag {
    /// Create the global state record.
    Initialize = 0,
    /// Deposit lamports and mint LST.
    Stake = 1,
    /// Burn LST and receive lamports.
    Withdraw = 2,
    /// Fold accrued validator rewards into the pool.
    AutoCompound = 3,
    /// Move the pool's stake to a new validator.
    Redelegate = 4,
    /// Propose a new admin.
    ProposeAdmin = 5,
    /// Accept a pending admin proposal.
    AcceptAdmin = 6,
}

impl LstPoolInstructionTag {
    /// Convert to the opcode byte.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Exact payload length that follows the opcode byte.
    pub const fn payload_len(self) -> usize {
        match self {
            Self::Initialize | Self::AutoCompound | Self::AcceptAdmin => 0,
            Self::Stake | Self::Withdraw => 8,
            Self::Redelegate | Self::ProposeAdmin => 32,
        }
    }

    /// Human-readable instruction name, used in program logs.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

// ============================================================================
// Instruction Data Builders
// ============================================================================

/// Build instruction data for `Initialize`.
///
/// Layout: [discriminator: u8]
pub fn build_initialize_instruction_data() -> [u8; 1] {
    [LstPoolInstructionTag::Initialize.to_u8()]
}

/// Build instruction data for `Stake`.
///
/// Layout: [discriminator: u8, lamports: u64 LE]
pub fn build_stake_instruction_data(lamports: u64) -> [u8; 9] {
    build_amount_instruction_data(LstPoolInstructionTag::Stake, lamports)
}

/// Build instruction data for `Withdraw`.
///
/// Layout: [discriminator: u8, lst_amount: u64 LE]
pub fn build_withdraw_instruction_data(lst_amount: u64) -> [u8; 9] {
    build_amount_instruction_data(LstPoolInstructionTag::Withdraw, lst_amount)
}

/// Build instruction data for `AutoCompound`.
///
/// Layout: [discriminator: u8]
pub fn build_auto_compound_instruction_data() -> [u8; 1] {
    [LstPoolInstructionTag::AutoCompound.to_u8()]
}

/// Build instruction data for `Redelegate`.
///
/// Layout: [discriminator: u8, new_validator: Pubkey]
pub fn build_redelegate_instruction_data(new_validator: &Pubkey) -> [u8; 33] {
    build_key_instruction_data(LstPoolInstructionTag::Redelegate, new_validator)
}

/// Build instruction data for `ProposeAdmin`.
///
/// Layout: [discriminator: u8, candidate: Pubkey]
pub fn build_propose_admin_instruction_data(candidate: &Pubkey) -> [u8; 33] {
    build_key_instruction_data(LstPoolInstructionTag::ProposeAdmin, candidate)
}

/// Build instruction data for `AcceptAdmin`.
///
/// Layout: [discriminator: u8]
pub fn build_accept_admin_instruction_data() -> [u8; 1] {
    [LstPoolInstructionTag::AcceptAdmin.to_u8()]
}

fn build_amount_instruction_data(tag: LstPoolInstructionTag, amount: u64) -> [u8; 9] {
    let mut data = [0u8; 9];
    data[0] = tag.to_u8();
    data[1..9].copy_from_slice(&amount.to_le_bytes());
    data
}

fn build_key_instruction_data(tag: LstPoolInstructionTag, key: &Pubkey) -> [u8; 33] {
    let mut data = [0u8; 33];
    data[0] = tag.to_u8();
    data[1..33].copy_from_slice(key);
    data
}

/// Parse the instruction discriminator from instruction data.
pub fn parse_instruction_discriminator(data: &[u8]) -> Option<LstPoolInstructionTag> {
    let (&opcode, _) = data.split_first()?;
    LstPoolInstructionTag::try_from(opcode).ok()
}

// ============================================================================
// Tests
// ============================================================================
