//! Global state record and its fixed-layout codec.
//!
//! The pool keeps one record per pool instance. [`GlobalState`] is the
//! in-memory form handlers work with; [`GlobalStateLayout`] is the exact
//! 145-byte account image.

use bytemuck::{Pod, Zeroable};
use lst_pool_interface::{
    GLOBAL_STATE_LEN, PENDING_ADMIN_ABSENT, PENDING_ADMIN_PRESENT, authority::HasAdmin,
};
use pinocchio::pubkey::Pubkey;

use crate::LstPoolError;

const ZERO_KEY: Pubkey = [0u8; 32];

// ============================================================================
// Account Layout
// ============================================================================

/// Byte image of the global state account.
///
/// Every field is a byte array so the struct has alignment 1 and no padding,
/// which lets bytemuck view raw account data directly.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct GlobalStateLayout {
    /// `total_staked_sol`, u64 LE
    pub total_staked_sol: [u8; 8],
    /// `total_lst_supply`, u64 LE
    pub total_lst_supply: [u8; 8],
    /// Validator currently receiving the pool's stake
    pub current_validator_pubkey: Pubkey,
    /// Pool admin
    pub admin: Pubkey,
    /// 0 = no pending admin, 1 = pending admin present
    pub pending_admin_tag: u8,
    /// Pending admin, meaningful only when the tag is 1
    pub pending_admin: Pubkey,
    /// LST mint tracked by this pool
    pub lst_mint_pubkey: Pubkey,
}

const _: () = assert!(core::mem::size_of::<GlobalStateLayout>() == GLOBAL_STATE_LEN);

// ============================================================================
// Global State
// ============================================================================

/// Singleton ledger record of a pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobalState {
    /// Lamports backing the outstanding LST.
    pub total_staked_sol: u64,
    /// Outstanding LST base units.
    pub total_lst_supply: u64,
    /// Validator currently receiving the pool's stake.
    pub current_validator_pubkey: Pubkey,
    /// Identity allowed to compound, redelegate and propose a new admin.
    pub admin: Pubkey,
    /// Candidate admin of an in-flight transfer.
    pub pending_admin: Option<Pubkey>,
    /// LST mint whose supply this record mirrors. Immutable after initialize.
    pub lst_mint_pubkey: Pubkey,
}

impl GlobalState {
    /// Create the record written by `Initialize`.
    pub fn new(admin: Pubkey, validator: Pubkey, lst_mint: Pubkey) -> Self {
        Self {
            total_staked_sol: 0,
            total_lst_supply: 0,
            current_validator_pubkey: validator,
            admin,
            pending_admin: None,
            lst_mint_pubkey: lst_mint,
        }
    }

    /// Decode a record from account bytes.
    ///
    /// # Errors
    /// `MalformedAccount` if the length is not `GLOBAL_STATE_LEN` or the
    /// pending admin discriminant is neither 0 nor 1.
    pub fn decode(bytes: &[u8]) -> Result<Self, LstPoolError> {
        let layout: &GlobalStateLayout =
            bytemuck::try_from_bytes(bytes).map_err(|_| LstPoolError::MalformedAccount)?;

        let pending_admin = match layout.pending_admin_tag {
            PENDING_ADMIN_ABSENT => None,
            PENDING_ADMIN_PRESENT => Some(layout.pending_admin),
            _ => return Err(LstPoolError::MalformedAccount),
        };

        Ok(Self {
            total_staked_sol: u64::from_le_bytes(layout.total_staked_sol),
            total_lst_supply: u64::from_le_bytes(layout.total_lst_supply),
            current_validator_pubkey: layout.current_validator_pubkey,
            admin: layout.admin,
            pending_admin,
            lst_mint_pubkey: layout.lst_mint_pubkey,
        })
    }

    /// Encode the record into its fixed account image.
    ///
    /// An absent pending admin is written as a zero discriminant and a zeroed
    /// value.
    pub fn encode(&self) -> [u8; GLOBAL_STATE_LEN] {
        let (pending_admin_tag, pending_admin) = match self.pending_admin {
            Some(key) => (PENDING_ADMIN_PRESENT, key),
            None => (PENDING_ADMIN_ABSENT, ZERO_KEY),
        };
        let layout = GlobalStateLayout {
            total_staked_sol: self.total_staked_sol.to_le_bytes(),
            total_lst_supply: self.total_lst_supply.to_le_bytes(),
            current_validator_pubkey: self.current_validator_pubkey,
            admin: self.admin,
            pending_admin_tag,
            pending_admin,
            lst_mint_pubkey: self.lst_mint_pubkey,
        };

        let mut bytes = [0u8; GLOBAL_STATE_LEN];
        bytes.copy_from_slice(bytemuck::bytes_of(&layout));
        bytes
    }

    /// True once `Initialize` has succeeded: the validator is never zero after.
    pub fn is_initialized(&self) -> bool {
        self.current_validator_pubkey != ZERO_KEY
    }

    /// True for the all-zero record of freshly allocated storage.
    pub fn is_empty_record(&self) -> bool {
        *self == Self::default()
    }

    /// Current exchange rate as `(total_staked_sol, total_lst_supply)`, or
    /// `None` while the pool is empty.
    pub fn exchange_rate(&self) -> Option<(u64, u64)> {
        if self.total_lst_supply == 0 {
            return None;
        }
        Some((self.total_staked_sol, self.total_lst_supply))
    }
}

impl HasAdmin for GlobalState {
    fn admin(&self) -> &Pubkey {
        &self.admin
    }

    fn admin_mut(&mut self) -> &mut Pubkey {
        &mut self.admin
    }

    fn pending_admin(&self) -> Option<&Pubkey> {
        self.pending_admin.as_ref()
    }

    fn set_pending_admin(&mut self, pending: Option<Pubkey>) {
        self.pending_admin = pending;
    }
}
