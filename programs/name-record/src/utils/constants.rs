/// State constants
pub const HISTORY_CAPACITY: usize = 100;
pub const MAX_NAME_LEN: usize = 63; // one length byte + 63 payload bytes per slot
pub const INITIAL_NAME: &str = "Nombre Inicial";
// 4-byte vec prefix + 15 * (4-byte len + 63 bytes) stays under the 1024-byte return data cap
pub const HISTORY_PAGE_MAX: usize = 15;

/// PDA seed constants
pub const NAME_RECORD_SEED: &[u8] = b"name_record";
