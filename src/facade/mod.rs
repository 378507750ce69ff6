use std::sync::Arc;

use crate::core::{RawCommand, Time};
use crate::diag::{DiagnosticSink, TracingSink};
use crate::executor::CommandExecutor;
use crate::store::TokenStore;

/// Evaluates one command stream and returns the number of tokens still
/// active at the latest accepted time.
///
/// Builds a fresh store, runs the executor over the full sequence, sweeps at
/// the resulting `max_time`, and tears the store down. Each call is an
/// independent evaluation; nothing is shared between calls.
///
/// # Examples
///
/// ```
/// use tokenledger::active_token_count;
///
/// let commands = vec![
///     vec![0, 1, 0], // create token 1 at time 0
///     vec![0, 2, 1], // create token 2 at time 1
///     vec![1, 1, 2], // reset token 1 at time 2
///     vec![1, 2, 3], // reset token 2 at time 3
/// ];
/// assert_eq!(active_token_count(2, &commands), 2);
/// ```
pub fn active_token_count(expiry_limit: Time, commands: &[RawCommand]) -> usize {
    active_token_count_with_sink(expiry_limit, commands, Arc::new(TracingSink))
}

/// Same evaluation with a caller-provided diagnostic sink. The sink receives
/// every lifecycle event and rejection from both the store and the executor.
pub fn active_token_count_with_sink(
    expiry_limit: Time,
    commands: &[RawCommand],
    sink: Arc<dyn DiagnosticSink>,
) -> usize {
    let mut store = TokenStore::new(expiry_limit, Arc::clone(&sink));
    let max_time = CommandExecutor::new(&mut store, sink).run(commands);
    tracing::debug!(
        expiry_limit = store.expiry_limit(),
        max_time,
        "command stream processed"
    );

    let count = store.active_count(max_time);
    store.clear();
    count
}
