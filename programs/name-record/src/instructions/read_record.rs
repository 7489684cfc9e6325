use crate::state::name_record::NameRecord;
use crate::utils::constants::NAME_RECORD_SEED;
use anchor_lang::prelude::*;

/// Read-only view over the record. Values travel back as instruction return
/// data, which is capped at 1024 bytes: the full 100-slot history does not fit,
/// so it is served in pages of at most `HISTORY_PAGE_MAX` raw slots here and in
/// full by decoding the account (`NameRecord::history`).
#[derive(Accounts)]
pub struct ReadRecord<'info> {
    #[account(
        seeds = [NAME_RECORD_SEED],
        bump = name_record.load()?.bump,
    )]
    pub name_record: AccountLoader<'info, NameRecord>,
}

pub fn get_name(ctx: Context<ReadRecord>) -> Result<String> {
    Ok(ctx.accounts.name_record.load()?.name())
}

pub fn get_change_count(ctx: Context<ReadRecord>) -> Result<u64> {
    Ok(ctx.accounts.name_record.load()?.change_count())
}

pub fn get_history_size(ctx: Context<ReadRecord>) -> Result<u64> {
    Ok(ctx.accounts.name_record.load()?.history_size())
}

pub fn get_history_entry(ctx: Context<ReadRecord>, index: u16) -> Result<String> {
    ctx.accounts
        .name_record
        .load()?
        .history_entry(index as usize)
}

pub fn get_history_range(ctx: Context<ReadRecord>, start: u16, len: u16) -> Result<Vec<String>> {
    ctx.accounts
        .name_record
        .load()?
        .history_range(start as usize, len as usize)
}
