use std::sync::Mutex;

/// Process-wide SOA serial counter.
///
/// Starts at 0 and is never persisted. Shared by handle (`Arc`) between all
/// connections; the whole read-modify-write happens under the lock, so
/// concurrent callers always observe distinct, strictly ordered values.
#[derive(Debug, Default)]
pub struct SerialGenerator {
    counter: Mutex<u64>,
}

impl SerialGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter and returns the new value.
    pub fn next(&self) -> u64 {
        let mut counter = self.counter.lock().unwrap_or_else(|e| e.into_inner());
        *counter += 1;
        *counter
    }

    pub fn current(&self) -> u64 {
        *self.counter.lock().unwrap_or_else(|e| e.into_inner())
    }
}
