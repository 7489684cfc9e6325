//! Drives the record through the same raw account image `AccountLoader` hands
//! to the instruction handlers: an 8-byte discriminator followed by the
//! zero-copy body, reloaded on every simulated instruction.

use super::helpers::FIXTURE_TIMESTAMP;
use crate::state::name_record::NameRecord;
use crate::utils::constants::{HISTORY_CAPACITY, INITIAL_NAME};
use anchor_lang::prelude::Pubkey;
use std::mem::size_of;

const DISCRIMINATOR_LEN: usize = 8;

/// Account data backed by `u64` words so the body stays 8-byte aligned.
struct AccountImage {
    words: Vec<u64>,
}

impl AccountImage {
    fn allocate() -> Self {
        let bytes = DISCRIMINATOR_LEN + size_of::<NameRecord>();
        assert_eq!(bytes % 8, 0, "record body is a whole number of words");
        Self {
            words: vec![0u64; bytes / 8],
        }
    }

    fn load_mut(&mut self) -> &mut NameRecord {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.words);
        bytemuck::from_bytes_mut(&mut bytes[DISCRIMINATOR_LEN..])
    }

    fn load(&self) -> &NameRecord {
        let bytes: &[u8] = bytemuck::cast_slice(&self.words);
        bytemuck::from_bytes(&bytes[DISCRIMINATOR_LEN..])
    }
}

#[test]
fn record_survives_repeated_instruction_cycles() {
    let mut account = AccountImage::allocate();
    account.load_mut().initialize(255).expect("initialize_record");

    assert_eq!(account.load().name(), INITIAL_NAME);
    assert_eq!(account.load().history_size(), 0);

    let total = HISTORY_CAPACITY + HISTORY_CAPACITY / 2;

    for change in 1..=total {
        let name = format!("Nombre {change}");
        let event = account
            .load_mut()
            .change_name(&name, Pubkey::new_unique(), FIXTURE_TIMESTAMP + change as i64)
            .expect("change_name");
        assert_eq!(event.new_name, name);

        let record = account.load();
        assert_eq!(record.name(), name);
        assert_eq!(record.change_count(), change as u64);
        assert_eq!(record.history_size(), change.min(HISTORY_CAPACITY) as u64);
        assert_eq!(
            record.history_entry((change - 1) % HISTORY_CAPACITY).unwrap(),
            name,
            "change {change} lands at slot (change - 1) mod capacity"
        );
        assert_eq!(record.history().len(), HISTORY_CAPACITY);
        if change < HISTORY_CAPACITY {
            assert_eq!(record.history_entry(change).unwrap(), "");
        }
    }

    let history = account.load().history();
    assert_eq!(history[0], format!("Nombre {}", HISTORY_CAPACITY + 1));
    assert_eq!(history[HISTORY_CAPACITY / 2], format!("Nombre {}", HISTORY_CAPACITY / 2 + 1));
}

#[test]
fn discriminator_bytes_are_untouched_by_mutations() {
    let mut account = AccountImage::allocate();
    {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut account.words);
        bytes[..DISCRIMINATOR_LEN].copy_from_slice(&[7u8; DISCRIMINATOR_LEN]);
    }

    account.load_mut().initialize(1).expect("initialize_record");
    for change in 0..(HISTORY_CAPACITY * 2) {
        account
            .load_mut()
            .change_name(&format!("n{change}"), Pubkey::default(), FIXTURE_TIMESTAMP)
            .expect("change_name");
    }

    let bytes: &[u8] = bytemuck::cast_slice(&account.words);
    assert_eq!(&bytes[..DISCRIMINATOR_LEN], &[7u8; DISCRIMINATOR_LEN]);
}

#[test]
fn record_body_fits_single_allocation() {
    // Accounts created through CPI are limited to 10 KiB.
    assert!(DISCRIMINATOR_LEN + size_of::<NameRecord>() <= 10 * 1024);
}
