use crate::state::name_record::NameRecord;
use crate::state::name_slot::NameSlot;
use crate::utils::constants::NAME_RECORD_SEED;
use anchor_lang::prelude::*;

/// Any signer may rename the record; the signer is reported as the event author.
#[derive(Accounts)]
pub struct ChangeName<'info> {
    #[account(
        mut,
        seeds = [NAME_RECORD_SEED],
        bump = name_record.load()?.bump,
    )]
    pub name_record: AccountLoader<'info, NameRecord>,

    pub author: Signer<'info>,
}

pub fn change_name(ctx: Context<ChangeName>, new_name: String) -> Result<()> {
    let timestamp_now = Clock::get()?.unix_timestamp;
    let mut name_record = ctx.accounts.name_record.load_mut()?;

    let event = name_record.change_name(&new_name, ctx.accounts.author.key(), timestamp_now)?;

    let archived = name_record
        .history
        .latest()
        .map(NameSlot::to_string_lossy)
        .unwrap_or_default();
    msg!(
        "Name changed to {:?}: count={} history_size={} cursor={}",
        archived,
        name_record.change_count(),
        name_record.history_size(),
        name_record.history.write_cursor()
    );

    emit!(event);

    Ok(())
}
