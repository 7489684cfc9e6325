use anchor_lang::prelude::*;

/// Emitted once per accepted `change_name`.
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct NameChanged {
    pub new_name: String,
    pub author: Pubkey,
    pub timestamp: u64,
}
