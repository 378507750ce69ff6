use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::{Rejection, Time, TokenId};
use crate::diag::{DiagnosticEvent, DiagnosticSink};

/// Tracks token lifecycles for one evaluation run.
///
/// Active tokens live in `active` as id to expiry time. Ids that have lapsed
/// at least once live in `retired` and can never be created again, even
/// though they no longer occupy the active map. A token moves from active to
/// retired only through the sweep in [`TokenStore::active_count`].
pub struct TokenStore {
    expiry_limit: Time,
    active: HashMap<TokenId, Time>,
    retired: HashSet<TokenId>,
    sink: Arc<dyn DiagnosticSink>,
}

impl TokenStore {
    pub fn new(expiry_limit: Time, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            expiry_limit,
            active: HashMap::new(),
            retired: HashSet::new(),
            sink,
        }
    }

    pub fn expiry_limit(&self) -> Time {
        self.expiry_limit
    }

    /// Inserts or refreshes the entry for `id`.
    fn touch(&mut self, id: TokenId, time: Time) {
        self.active.insert(id, time + self.expiry_limit);
    }

    /// A token is active at `at_time` while `at_time` has not passed its
    /// expiry. Lapsed tokens still sitting in the active map count as
    /// inactive here.
    fn is_active(&self, id: TokenId, at_time: Time) -> bool {
        self.active
            .get(&id)
            .is_some_and(|expiry| at_time <= *expiry)
    }

    /// Whether the id has ever been seen, active or retired.
    fn exists(&self, id: TokenId) -> bool {
        self.active.contains_key(&id) || self.retired.contains(&id)
    }

    /// Creates a token with expiry `time + expiry_limit`. Fails without
    /// mutating anything when the id is already active or was retired at any
    /// point; retired ids are permanently unusable.
    pub fn create(&mut self, id: TokenId, time: Time) -> bool {
        if self.exists(id) {
            self.sink
                .report(&DiagnosticEvent::Rejected(Rejection::DuplicateOrRetiredId {
                    id,
                }));
            return false;
        }
        self.touch(id, time);
        self.sink.report(&DiagnosticEvent::Created { id, time });
        true
    }

    /// Refreshes a token's expiry to `time + expiry_limit` when it is still
    /// active at `time`. Fails for unknown, retired, or lapsed ids. A failed
    /// reset never mutates state and never retires the token by itself.
    pub fn reset(&mut self, id: TokenId, time: Time) -> bool {
        if self.is_active(id, time) {
            self.touch(id, time);
            self.sink.report(&DiagnosticEvent::ResetOk { id, time });
            true
        } else {
            self.sink
                .report(&DiagnosticEvent::Rejected(Rejection::StaleOrUnknownReset {
                    id,
                }));
            false
        }
    }

    /// The sweep. Every active token whose window has lapsed at `at_time`
    /// moves to the retired set; the rest stay put. Returns the size of the
    /// active set afterwards. O(k) in the active-set size; this is the only
    /// path that retires tokens.
    pub fn active_count(&mut self, at_time: Time) -> usize {
        let lapsed: Vec<TokenId> = self
            .active
            .iter()
            .filter(|(_, expiry)| at_time > **expiry)
            .map(|(id, _)| *id)
            .collect();

        for id in lapsed {
            self.active.remove(&id);
            self.retired.insert(id);
            self.sink.report(&DiagnosticEvent::Retired { id });
        }

        self.active.len()
    }

    pub fn is_retired(&self, id: TokenId) -> bool {
        self.retired.contains(&id)
    }

    /// Teardown at the end of an evaluation. Releases both sets; the store is
    /// not meant to be reused afterwards.
    pub fn clear(&mut self) {
        self.active.clear();
        self.retired.clear();
    }
}
