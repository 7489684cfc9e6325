use crate::state::name_slot::NameSlot;
use crate::utils::constants::HISTORY_CAPACITY;
use bytemuck::{Pod, Zeroable};

/// Fixed-capacity ring of past names.
///
/// `slots` is always `HISTORY_CAPACITY` long. `write_cursor` is the next slot to
/// overwrite and `len` counts meaningful entries, saturating at capacity. Slots
/// are addressed by absolute write position: once the ring wraps, index 0 no
/// longer holds the oldest entry, use [`NameHistory::chronological`] for that.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct NameHistory {
    pub write_cursor: u16,
    pub len: u16,
    pub _padding: [u8; 4],
    pub slots: [NameSlot; HISTORY_CAPACITY],
}

#[inline(always)]
fn step_forward(index: usize) -> usize {
    (index + 1) % HISTORY_CAPACITY
}

impl NameHistory {
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() == HISTORY_CAPACITY
    }

    #[inline(always)]
    pub fn write_cursor(&self) -> usize {
        self.write_cursor as usize
    }

    /// Clears every slot in place and rewinds the cursor.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = NameSlot::EMPTY;
        }
        self.write_cursor = 0;
        self.len = 0;
        self._padding = [0; 4];
    }

    /// Writes `entry` at the cursor, then advances the cursor modulo capacity.
    /// Once full, each call overwrites the oldest retained entry.
    pub fn record(&mut self, entry: NameSlot) {
        let cursor = self.write_cursor() % HISTORY_CAPACITY;
        self.slots[cursor] = entry;
        self.write_cursor = step_forward(cursor) as u16;

        if !self.is_full() {
            self.len += 1;
        }
    }

    /// Raw slot at absolute position `index`.
    pub fn get(&self, index: usize) -> Option<&NameSlot> {
        self.slots.get(index)
    }

    /// Most recently recorded entry.
    pub fn latest(&self) -> Option<&NameSlot> {
        if self.is_empty() {
            return None;
        }
        let index = (self.write_cursor() + HISTORY_CAPACITY - 1) % HISTORY_CAPACITY;
        self.slots.get(index)
    }

    /// The physical buffer verbatim, unused slots included.
    pub fn raw(&self) -> Vec<String> {
        self.slots.iter().map(NameSlot::to_string_lossy).collect()
    }

    /// Meaningful entries only, oldest first.
    pub fn chronological(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        let mut index = (self.write_cursor() + HISTORY_CAPACITY - self.len()) % HISTORY_CAPACITY;
        for _ in 0..self.len() {
            out.push(self.slots[index].to_string_lossy());
            index = step_forward(index);
        }
        out
    }
}
