use crate::error::RecordError;
use crate::state::name_history::NameHistory;
use crate::state::name_slot::NameSlot;
use crate::utils::constants::{HISTORY_CAPACITY, HISTORY_PAGE_MAX, INITIAL_NAME};
use crate::utils::events::NameChanged;
use anchor_lang::prelude::*;

/// The single named record: live name, change counter and the ring of
/// accepted names.
///
/// Mutation only goes through [`NameRecord::change_name`]. The runtime
/// write-locks the account for the whole instruction, so the validate-then-write
/// sequence below is never observed half-applied.
#[account(zero_copy)]
#[repr(C)]
pub struct NameRecord {
    pub change_count: u64,
    pub history: NameHistory,
    pub name: NameSlot,
    pub bump: u8,
    pub _padding: [u8; 7],
    pub reserved: [u64; 8], // reserved for future use
}

/// Rejects names the record cannot hold. Runs before any state is touched.
pub fn validate_new_name(new_name: &str) -> Result<NameSlot> {
    require!(!new_name.is_empty(), RecordError::EmptyName);
    NameSlot::new(new_name)
}

impl NameRecord {
    /// Puts a freshly allocated account into its initial state.
    pub fn initialize(&mut self, bump: u8) -> Result<()> {
        self.change_count = 0;
        self.history.reset();
        self.name = NameSlot::new(INITIAL_NAME)?;
        self.bump = bump;
        self._padding = [0; 7];
        self.reserved = [0; 8];

        Ok(())
    }

    /// Replaces the live name and returns the event to emit.
    ///
    /// The accepted name goes into the history slot under the cursor, so the
    /// k-th change lands at slot `(k - 1) % HISTORY_CAPACITY`. The cursor
    /// advances, then the live name and counter are updated. Any rejection
    /// leaves the account untouched.
    pub fn change_name(
        &mut self,
        new_name: &str,
        author: Pubkey,
        timestamp: i64,
    ) -> Result<NameChanged> {
        let incoming = validate_new_name(new_name)?;
        require!(timestamp > 0, RecordError::InvalidTimestamp);
        let next_count = self
            .change_count
            .checked_add(1)
            .ok_or(RecordError::ChangeCountOverflow)?;

        self.history.record(incoming);
        self.name = incoming;
        self.change_count = next_count;

        Ok(NameChanged {
            new_name: new_name.to_string(),
            author,
            timestamp: timestamp as u64,
        })
    }

    pub fn name(&self) -> String {
        self.name.to_string_lossy()
    }

    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    /// Logical history size: `min(change_count, HISTORY_CAPACITY)`.
    pub fn history_size(&self) -> u64 {
        self.history.len() as u64
    }

    /// Raw physical buffer, always `HISTORY_CAPACITY` entries long.
    pub fn history(&self) -> Vec<String> {
        self.history.raw()
    }

    pub fn history_entry(&self, index: usize) -> Result<String> {
        self.history
            .get(index)
            .map(NameSlot::to_string_lossy)
            .ok_or_else(|| RecordError::HistoryIndexOutOfBounds.into())
    }

    /// Raw slots `start .. start + len`, cut short at the end of the buffer.
    /// Pages are bounded so they fit in instruction return data.
    pub fn history_range(&self, start: usize, len: usize) -> Result<Vec<String>> {
        require!(start < HISTORY_CAPACITY, RecordError::HistoryIndexOutOfBounds);
        require!(len <= HISTORY_PAGE_MAX, RecordError::HistoryPageTooLarge);

        let end = (start + len).min(HISTORY_CAPACITY);
        Ok(self.history.slots[start..end]
            .iter()
            .map(NameSlot::to_string_lossy)
            .collect())
    }
}
