#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("JCyPmToU3g57z6n3XRPJDArh96nE7GeW56PYV72t6Z5S");

#[program]
pub mod name_record {
    use super::*;

    pub fn initialize_record(ctx: Context<InitializeRecord>) -> Result<()> {
        instructions::initialize_record::initialize_record(ctx)
    }

    pub fn change_name(ctx: Context<ChangeName>, new_name: String) -> Result<()> {
        instructions::change_name::change_name(ctx, new_name)
    }

    pub fn get_name(ctx: Context<ReadRecord>) -> Result<String> {
        instructions::read_record::get_name(ctx)
    }

    pub fn get_change_count(ctx: Context<ReadRecord>) -> Result<u64> {
        instructions::read_record::get_change_count(ctx)
    }

    pub fn get_history_size(ctx: Context<ReadRecord>) -> Result<u64> {
        instructions::read_record::get_history_size(ctx)
    }

    pub fn get_history_entry(ctx: Context<ReadRecord>, index: u16) -> Result<String> {
        instructions::read_record::get_history_entry(ctx, index)
    }

    pub fn get_history_range(
        ctx: Context<ReadRecord>,
        start: u16,
        len: u16,
    ) -> Result<Vec<String>> {
        instructions::read_record::get_history_range(ctx, start, len)
    }
}
