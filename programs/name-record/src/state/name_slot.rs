use crate::error::RecordError;
use crate::utils::constants::MAX_NAME_LEN;
use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

/// Fixed-width UTF-8 cell stored inline in the record account.
///
/// The all-zero bit pattern is the empty string, so freshly allocated
/// account data already reads as a buffer of empty slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct NameSlot {
    pub len: u8,
    pub bytes: [u8; MAX_NAME_LEN],
}

impl NameSlot {
    pub const EMPTY: Self = Self {
        len: 0,
        bytes: [0; MAX_NAME_LEN],
    };

    /// Copies `name` into a slot. Fails with `NameTooLong` when it does not fit.
    pub fn new(name: &str) -> Result<Self> {
        let raw = name.as_bytes();
        require!(raw.len() <= MAX_NAME_LEN, RecordError::NameTooLong);

        let mut slot = Self::EMPTY;
        slot.bytes[..raw.len()].copy_from_slice(raw);
        slot.len = raw.len() as u8;
        Ok(slot)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live bytes of the slot. A corrupted length is clamped to the cell width.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        let len = (self.len as usize).min(MAX_NAME_LEN);
        &self.bytes[..len]
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}
