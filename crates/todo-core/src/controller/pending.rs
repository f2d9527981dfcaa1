//! Pending Request Set
//!
//! Opaque tokens for in-flight writes. Non-empty means "saving".

use std::collections::HashSet;

/// Identifies one in-flight write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct PendingRequests {
    next: u64,
    in_flight: HashSet<RequestToken>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request and hand back its token
    pub fn begin(&mut self) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        self.in_flight.insert(token);
        token
    }

    /// Remove `token`. Returns false if it was not in flight.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        self.in_flight.remove(&token)
    }

    pub fn is_saving(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}
