//! Run numbering state.

use std::collections::HashMap;

/// Counts series per protocol identity within one batch.
///
/// A missing protocol name is its own identity. The counter is owned by a
/// single rule set instance and only ever grows; a new batch gets a new
/// counter.
#[derive(Debug, Clone, Default)]
pub struct RunCounter {
    seen: HashMap<Option<String>, i64>,
}

impl RunCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more series for `protocol` and returns its run number.
    pub fn next_run(&mut self, protocol: Option<&str>) -> i64 {
        let count = self.seen.entry(protocol.map(str::to_string)).or_insert(0);
        *count += 1;
        *count
    }

    /// Number of series seen so far for `protocol`.
    pub fn current(&self, protocol: Option<&str>) -> i64 {
        self.seen
            .get(&protocol.map(str::to_string))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct protocol identities seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
