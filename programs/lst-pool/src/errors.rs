//! LST pool errors.

use lst_pool_interface::authority::AdminTransferError;
use num_enum::TryFromPrimitive;
use pinocchio::program_error::ProgramError;
use strum::IntoStaticStr;

/// LST pool error codes.
///
/// Codes are stable: clients decode `ProgramError::Custom(code)` back into
/// this enum with `LstPoolError::try_from(code)`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoStaticStr)]
pub enum LstPoolError {
    /// Global state bytes have the wrong size or an invalid discriminant
    MalformedAccount = 0,
    /// Instruction payload has the wrong length
    MalformedInstruction = 1,
    /// Opcode is not a known instruction
    UnknownInstruction = 2,
    /// Global state already holds a record
    AlreadyInitialized = 3,
    /// Validator identity is zero or not a vote account
    InvalidValidator = 4,
    /// Amount must be greater than zero
    ZeroAmount = 5,
    /// Deposit is too small to mint a single LST unit
    MintWouldBeZero = 6,
    /// Withdrawal is too small to pay out a single lamport
    PayoutWouldBeZero = 7,
    /// Withdrawal exceeds outstanding LST supply
    InsufficientSupply = 8,
    /// Payout exceeds tracked stake
    InsufficientStake = 9,
    /// Conversion with zero LST supply
    DivisionByZero = 10,
    /// Arithmetic overflow
    ArithmeticOverflow = 11,
    /// Validator has no rewards to compound
    NoRewardsAvailable = 12,
    /// New validator equals the current validator
    NoOpRedelegate = 13,
    /// Signer is not authorized for this operation
    Unauthorized = 14,
    /// Proposed admin is already the admin
    SelfProposal = 15,
    /// No admin transfer is in flight
    NoPendingAdmin = 16,
    /// Account is missing, has the wrong owner, size or identity
    InvalidAccount = 17,
    /// Tracked LST supply does not match the real mint supply
    SupplyMismatch = 18,
}

impl LstPoolError {
    /// Error name, used in program logs.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl From<LstPoolError> for ProgramError {
    fn from(e: LstPoolError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<AdminTransferError> for LstPoolError {
    fn from(e: AdminTransferError) -> Self {
        match e {
            AdminTransferError::Unauthorized => LstPoolError::Unauthorized,
            AdminTransferError::SelfProposal => LstPoolError::SelfProposal,
            AdminTransferError::NoPendingAdmin => LstPoolError::NoPendingAdmin,
        }
    }
}

/// Decode a program error back into an `LstPoolError`, if it is one.
pub fn decode_error(error: &ProgramError) -> Option<LstPoolError> {
    match error {
        ProgramError::Custom(code) => LstPoolError::try_from(*code).ok(),
        _ => None,
    }
}
