//! Byte layout of the global state record.
//!
//! Little-endian, no padding:
//!
//! ```text
//! offset  size  field
//!      0     8  total_staked_sol
//!      8     8  total_lst_supply
//!     16    32  current_validator_pubkey
//!     48    32  admin
//!     80     1  pending_admin discriminant (0 = absent, 1 = present)
//!     81    32  pending_admin value (ignored when absent)
//!    113    32  lst_mint_pubkey
//! ```

/// Total size of the global state record in bytes.
pub const GLOBAL_STATE_LEN: usize = 145;

/// Offset of `total_staked_sol` (u64 LE).
pub const TOTAL_STAKED_SOL_OFFSET: usize = 0;
/// Offset of `total_lst_supply` (u64 LE).
pub const TOTAL_LST_SUPPLY_OFFSET: usize = 8;
/// Offset of `current_validator_pubkey`.
pub const CURRENT_VALIDATOR_OFFSET: usize = 16;
/// Offset of `admin`.
pub const ADMIN_OFFSET: usize = 48;
/// Offset of the `pending_admin` discriminant byte.
pub const PENDING_ADMIN_TAG_OFFSET: usize = 80;
/// Offset of the `pending_admin` value.
pub const PENDING_ADMIN_OFFSET: usize = 81;
/// Offset of `lst_mint_pubkey`.
pub const LST_MINT_OFFSET: usize = 113;

/// Discriminant byte for an absent `pending_admin`.
pub const PENDING_ADMIN_ABSENT: u8 = 0;
/// Discriminant byte for a present `pending_admin`.
pub const PENDING_ADMIN_PRESENT: u8 = 1;

const _: () = assert!(LST_MINT_OFFSET + 32 == GLOBAL_STATE_LEN);
const _: () = assert!(PENDING_ADMIN_OFFSET == PENDING_ADMIN_TAG_OFFSET + 1);
