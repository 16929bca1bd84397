//! LST pool instructions: decoding, dispatch and handlers.
//!
//! Every handler follows the same order: load the current record, validate
//! every precondition, compute the new record, issue external effects, and
//! only then write the record back. A failure at any step leaves storage
//! untouched.

use lst_pool_interface::LstPoolInstructionTag;
use pinocchio::{ProgramResult, program_error::ProgramError, pubkey::Pubkey};
use pinocchio_log::log;

use crate::{
    LstPoolError,
    ports::{LedgerStorage, PoolEffects, SignerSet},
    state::GlobalState,
};

// Admin instructions (admin transfer)
pub mod admin;

// Pool operations
mod auto_compound;
mod initialize;
mod redelegate;
mod stake;
mod withdraw;

pub use admin::*;
pub use auto_compound::process_auto_compound;
pub use initialize::process_initialize;
pub use redelegate::process_redelegate;
pub use stake::process_stake;
pub use withdraw::process_withdraw;

// ============================================================================
// Instruction
// ============================================================================

/// A decoded LST pool instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LstPoolInstruction {
    /// Create the global state record. Mint and validator come from accounts.
    Initialize,
    /// Deposit `lamports` and mint LST at the current rate.
    Stake {
        /// Lamports to deposit
        lamports: u64,
    },
    /// Burn `lst_amount` and pay out lamports at the current rate.
    Withdraw {
        /// LST base units to redeem
        lst_amount: u64,
    },
    /// Fold pending validator rewards into the pool.
    AutoCompound,
    /// Move the pool's stake to `new_validator`.
    Redelegate {
        /// Validator to delegate to
        new_validator: Pubkey,
    },
    /// Propose `candidate` as the next admin.
    ProposeAdmin {
        /// Candidate admin
        candidate: Pubkey,
    },
    /// Accept a pending admin proposal.
    AcceptAdmin,
}

impl LstPoolInstruction {
    /// Decode an instruction buffer `[opcode, payload...]`.
    ///
    /// # Errors
    /// * `MalformedInstruction` if the buffer is empty or the payload length
    ///   does not match the opcode
    /// * `UnknownInstruction` if the opcode is not known
    pub fn unpack(data: &[u8]) -> Result<Self, LstPoolError> {
        let (&opcode, payload) = data
            .split_first()
            .ok_or(LstPoolError::MalformedInstruction)?;
        let tag = LstPoolInstructionTag::try_from(opcode)
            .map_err(|_| LstPoolError::UnknownInstruction)?;

        if payload.len() != tag.payload_len() {
            return Err(LstPoolError::MalformedInstruction);
        }

        Ok(match tag {
            LstPoolInstructionTag::Initialize => Self::Initialize,
            LstPoolInstructionTag::Stake => Self::Stake {
                lamports: read_u64(payload)?,
            },
            LstPoolInstructionTag::Withdraw => Self::Withdraw {
                lst_amount: read_u64(payload)?,
            },
            LstPoolInstructionTag::AutoCompound => Self::AutoCompound,
            LstPoolInstructionTag::Redelegate => Self::Redelegate {
                new_validator: read_pubkey(payload)?,
            },
            LstPoolInstructionTag::ProposeAdmin => Self::ProposeAdmin {
                candidate: read_pubkey(payload)?,
            },
            LstPoolInstructionTag::AcceptAdmin => Self::AcceptAdmin,
        })
    }

    /// Opcode of this instruction.
    pub fn tag(&self) -> LstPoolInstructionTag {
        match self {
            Self::Initialize => LstPoolInstructionTag::Initialize,
            Self::Stake { .. } => LstPoolInstructionTag::Stake,
            Self::Withdraw { .. } => LstPoolInstructionTag::Withdraw,
            Self::AutoCompound => LstPoolInstructionTag::AutoCompound,
            Self::Redelegate { .. } => LstPoolInstructionTag::Redelegate,
            Self::ProposeAdmin { .. } => LstPoolInstructionTag::ProposeAdmin,
            Self::AcceptAdmin => LstPoolInstructionTag::AcceptAdmin,
        }
    }
}

fn read_u64(payload: &[u8]) -> Result<u64, LstPoolError> {
    payload
        .try_into()
        .map(u64::from_le_bytes)
        .map_err(|_| LstPoolError::MalformedInstruction)
}

fn read_pubkey(payload: &[u8]) -> Result<Pubkey, LstPoolError> {
    payload
        .try_into()
        .map_err(|_| LstPoolError::MalformedInstruction)
}

// ============================================================================
// Context
// ============================================================================

/// Who is calling and which identities the instruction was given.
pub struct InstructionContext<'a> {
    /// Identities that signed the instruction.
    pub signers: &'a dyn SignerSet,
    /// Identity the instruction acts for: future admin, depositor, holder,
    /// admin or candidate, depending on the instruction.
    pub caller: Pubkey,
    /// LST mint supplied with the instruction, if any.
    pub lst_mint: Option<Pubkey>,
    /// Validator identity supplied with the instruction, if any.
    pub validator: Option<Pubkey>,
}

// ============================================================================
// Dispatch
// ============================================================================

/// Route a decoded instruction to its handler.
///
/// # Errors
/// Any error of the selected handler; storage is left untouched on failure.
pub fn process<L, E>(
    ledger: &mut L,
    ctx: &InstructionContext,
    instruction: &LstPoolInstruction,
    effects: &mut E,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
    E: PoolEffects + ?Sized,
{
    match *instruction {
        LstPoolInstruction::Initialize => process_initialize(ledger, ctx, effects),
        LstPoolInstruction::Stake { lamports } => process_stake(ledger, ctx, lamports, effects),
        LstPoolInstruction::Withdraw { lst_amount } => {
            process_withdraw(ledger, ctx, lst_amount, effects)
        }
        LstPoolInstruction::AutoCompound => process_auto_compound(ledger, ctx, effects),
        LstPoolInstruction::Redelegate { new_validator } => {
            process_redelegate(ledger, ctx, &new_validator, effects)
        }
        LstPoolInstruction::ProposeAdmin { candidate } => {
            process_propose_admin(ledger, ctx, &candidate)
        }
        LstPoolInstruction::AcceptAdmin => process_accept_admin(ledger, ctx),
    }
}

/// Decode `data` and route it to its handler.
///
/// # Errors
/// Decoding errors, or any error of the selected handler.
pub fn process_instruction_data<L, E>(
    ledger: &mut L,
    ctx: &InstructionContext,
    data: &[u8],
    effects: &mut E,
) -> ProgramResult
where
    L: LedgerStorage + ?Sized,
    E: PoolEffects + ?Sized,
{
    let instruction = LstPoolInstruction::unpack(data)?;
    process(ledger, ctx, &instruction, effects)
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Load the record of an initialized pool.
pub(crate) fn load_initialized<L: LedgerStorage + ?Sized>(
    ledger: &L,
) -> Result<GlobalState, ProgramError> {
    let state = GlobalState::decode(&ledger.read()?)?;
    if !state.is_initialized() {
        log!("global state is not initialized");
        return Err(LstPoolError::InvalidAccount.into());
    }
    Ok(state)
}

/// Commit `updated` if storage still holds `loaded`.
///
/// Storage is re-read after external effects so a handler never overwrites a
/// record that changed underneath it.
pub(crate) fn commit<L: LedgerStorage + ?Sized>(
    ledger: &mut L,
    loaded: &GlobalState,
    updated: &GlobalState,
) -> ProgramResult {
    let current = GlobalState::decode(&ledger.read()?)?;
    if current != *loaded {
        log!("global state changed during instruction");
        return Err(LstPoolError::InvalidAccount.into());
    }
    ledger.write(&updated.encode())
}

/// Reject a mint identity that differs from the pool's LST mint.
pub(crate) fn require_pool_mint(
    state: &GlobalState,
    ctx: &InstructionContext,
) -> Result<(), LstPoolError> {
    match ctx.lst_mint {
        Some(mint) if mint != state.lst_mint_pubkey => {
            log!("lst mint does not match global state");
            Err(LstPoolError::InvalidAccount)
        }
        _ => Ok(()),
    }
}
