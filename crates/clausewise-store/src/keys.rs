//! Key generation for stored results.

use uuid::Uuid;

/// Produces the opaque identifier handed back for each stored value.
pub trait KeyStrategy: Send {
    fn next_key(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidKeys;

impl KeyStrategy for UuidKeys {
    fn next_key(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `prefix-1`, `prefix-2`, ... for callers that need reproducible keys.
#[derive(Debug, Clone)]
pub struct SequentialKeys {
    prefix: String,
    next: u64,
}

impl SequentialKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl KeyStrategy for SequentialKeys {
    fn next_key(&mut self) -> String {
        let key = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        key
    }
}
