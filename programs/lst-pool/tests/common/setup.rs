//! Pool driver: runs instruction bytes through the ledger core against the
//! in-memory storage and effects.

use lst_pool::{
    GlobalState, InstructionContext, LstPoolError, ports::SignerSet, process_instruction_data,
};
use lst_pool_interface::{
    build_accept_admin_instruction_data, build_auto_compound_instruction_data,
    build_initialize_instruction_data, build_propose_admin_instruction_data,
    build_redelegate_instruction_data, build_stake_instruction_data,
    build_withdraw_instruction_data,
};
use pinocchio::{ProgramResult, program_error::ProgramError, pubkey::Pubkey};

use super::{MemoryLedger, MockEffects};

pub const ADMIN: Pubkey = [0xad; 32];
pub const VALIDATOR_1: Pubkey = [0x01; 32];
pub const VALIDATOR_2: Pubkey = [0x02; 32];
pub const LST_MINT: Pubkey = [0x4d; 32];
pub const ALICE: Pubkey = [0xa1; 32];
pub const BOB: Pubkey = [0xb0; 32];
pub const MALLORY: Pubkey = [0x66; 32];

pub const ONE_SOL: u64 = 1_000_000_000;

/// Identities that signed a test instruction.
pub struct TestSigners(pub Vec<Pubkey>);

impl SignerSet for TestSigners {
    fn has_signed(&self, key: &Pubkey) -> bool {
        self.0.contains(key)
    }
}

/// Assert that `result` failed with `error`.
#[track_caller]
pub fn assert_pool_error(result: ProgramResult, error: LstPoolError) {
    assert_eq!(result, Err(ProgramError::Custom(error as u32)));
}

/// A pool with in-memory storage and effects.
pub struct TestPool {
    pub ledger: MemoryLedger,
    pub effects: MockEffects,
}

impl TestPool {
    /// Uninitialized pool delegating to `VALIDATOR_1`.
    pub fn new() -> Self {
        Self {
            ledger: MemoryLedger::new(),
            effects: MockEffects::new(VALIDATOR_1),
        }
    }

    /// Pool initialized by `ADMIN` on `VALIDATOR_1` with `LST_MINT`, with the
    /// effect log cleared.
    pub fn initialized() -> Self {
        let mut pool = Self::new();
        pool.initialize(ADMIN, Some(LST_MINT), Some(VALIDATOR_1))
            .expect("initialize");
        pool.effects.log.clear();
        pool
    }

    pub fn state(&self) -> GlobalState {
        GlobalState::decode(&self.ledger.bytes).expect("decode global state")
    }

    /// Run raw instruction bytes with `caller` as the only signer.
    pub fn execute(
        &mut self,
        caller: Pubkey,
        data: &[u8],
        lst_mint: Option<Pubkey>,
        validator: Option<Pubkey>,
    ) -> ProgramResult {
        self.execute_signed(caller, &[caller], data, lst_mint, validator)
    }

    /// Run raw instruction bytes with an explicit signer set.
    pub fn execute_signed(
        &mut self,
        caller: Pubkey,
        signers: &[Pubkey],
        data: &[u8],
        lst_mint: Option<Pubkey>,
        validator: Option<Pubkey>,
    ) -> ProgramResult {
        let signers = TestSigners(signers.to_vec());
        let ctx = InstructionContext {
            signers: &signers,
            caller,
            lst_mint,
            validator,
        };
        process_instruction_data(&mut self.ledger, &ctx, data, &mut self.effects)
    }

    pub fn initialize(
        &mut self,
        admin: Pubkey,
        lst_mint: Option<Pubkey>,
        validator: Option<Pubkey>,
    ) -> ProgramResult {
        self.execute(
            admin,
            &build_initialize_instruction_data(),
            lst_mint,
            validator,
        )
    }

    /// Fund `user` and stake `lamports` for them.
    pub fn stake(&mut self, user: Pubkey, lamports: u64) -> ProgramResult {
        self.effects.fund(user, lamports);
        self.execute(
            user,
            &build_stake_instruction_data(lamports),
            Some(LST_MINT),
            None,
        )
    }

    pub fn withdraw(&mut self, user: Pubkey, lst_amount: u64) -> ProgramResult {
        self.execute(
            user,
            &build_withdraw_instruction_data(lst_amount),
            Some(LST_MINT),
            None,
        )
    }

    /// Accrue `rewards` on the pool stake and compound as `signer`.
    pub fn compound(&mut self, signer: Pubkey, rewards: u64) -> ProgramResult {
        self.effects.accrue_rewards(rewards);
        self.execute(signer, &build_auto_compound_instruction_data(), None, None)
    }

    pub fn redelegate(&mut self, signer: Pubkey, validator: Pubkey) -> ProgramResult {
        self.execute(
            signer,
            &build_redelegate_instruction_data(&validator),
            None,
            Some(validator),
        )
    }

    pub fn propose_admin(&mut self, signer: Pubkey, candidate: Pubkey) -> ProgramResult {
        self.execute(
            signer,
            &build_propose_admin_instruction_data(&candidate),
            None,
            None,
        )
    }

    pub fn accept_admin(&mut self, signer: Pubkey) -> ProgramResult {
        self.execute(signer, &build_accept_admin_instruction_data(), None, None)
    }
}
