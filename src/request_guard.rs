//! Sequence tokens that guard a resource against stale network responses.
//!
//! The remote service gives no ordering guarantee between in-flight requests,
//! so a slow response for a superseded request could overwrite newer records.
//! A [RequestGuard] hands out a monotonically increasing token per request;
//! when a response arrives, [RequestGuard::try_apply] admits it only if no
//! newer response has been applied already.

/// Identifies one in-flight request for a logical resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Tracks which response generation is currently applied for one resource.
#[derive(Debug, Default)]
pub struct RequestGuard {
    issued: u64,
    applied: u64,
}

impl RequestGuard {
    /// Create a guard with no requests issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the token for a request that is about to be sent.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Decide whether a completed request's response may be applied.
    ///
    /// Returns `true` and records `token` as the applied generation if it is
    /// newer than everything applied so far; returns `false` for a stale
    /// response, which the caller must discard.
    pub fn try_apply(&mut self, token: RequestToken) -> bool {
        if token.0 > self.applied {
            self.applied = token.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGuard;

    #[test]
    fn in_order_responses_are_applied() {
        let mut guard = RequestGuard::new();

        let first = guard.issue();
        let second = guard.issue();

        assert!(guard.try_apply(first));
        assert!(guard.try_apply(second));
    }

    #[test]
    fn stale_response_is_discarded_after_newer_one_applied() {
        let mut guard = RequestGuard::new();

        let first = guard.issue();
        let second = guard.issue();

        assert!(guard.try_apply(second));
        assert!(!guard.try_apply(first));
    }

    #[test]
    fn a_response_is_applied_at_most_once() {
        let mut guard = RequestGuard::new();

        let token = guard.issue();
        assert!(guard.try_apply(token));
        assert!(!guard.try_apply(token));
    }
}
