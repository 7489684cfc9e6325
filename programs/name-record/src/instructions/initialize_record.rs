use crate::state::name_record::NameRecord;
use crate::utils::constants::NAME_RECORD_SEED;
use anchor_lang::prelude::*;
use std::mem::size_of;

/// Creates the record account. The program keeps one record, so the PDA seed
/// is a constant and a second initialization fails at account creation.
#[derive(Accounts)]
pub struct InitializeRecord<'info> {
    /// Zero-copy record holding the live name and all 100 history slots.
    #[account(
        init,
        payer = payer,
        space = 8 + size_of::<NameRecord>(),
        seeds = [NAME_RECORD_SEED],
        bump,
    )]
    pub name_record: AccountLoader<'info, NameRecord>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Takes no parameters: the initial state is fully determined by constants.
pub fn initialize_record(ctx: Context<InitializeRecord>) -> Result<()> {
    let mut name_record = ctx.accounts.name_record.load_init()?;
    name_record.initialize(ctx.bumps.name_record)?;

    msg!(
        "Name record initialized: {} (history capacity {})",
        name_record.name(),
        name_record.history.capacity()
    );

    Ok(())
}
