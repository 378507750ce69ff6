use std::sync::Arc;

use crate::core::{COMMAND_FIELDS, RawCommand, Rejection, TYPE_CREATE, TYPE_RESET, Time};
use crate::diag::{DiagnosticEvent, DiagnosticSink};
use crate::store::TokenStore;

/// Validates and applies an ordered command stream against one token store.
///
/// Commands apply strictly in input order; the monotonic-time check and the
/// expiry comparisons depend on it. `max_time` tracks the latest time among
/// accepted commands and is the instant the caller should query the store at
/// once the batch is done.
pub struct CommandExecutor<'a> {
    store: &'a mut TokenStore,
    sink: Arc<dyn DiagnosticSink>,
    max_time: Time,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(store: &'a mut TokenStore, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            store,
            sink,
            max_time: 0,
        }
    }

    /// Runs the whole batch and returns the final `max_time`. Rejections are
    /// reported and skipped; no command ever aborts the batch.
    pub fn run(mut self, commands: &[RawCommand]) -> Time {
        for command in commands {
            self.execute(command);
        }
        self.max_time
    }

    /// Validation and dispatch for a single command: shape, monotonicity,
    /// type, then the store operation.
    fn execute(&mut self, command: &[u64]) {
        if command.len() != COMMAND_FIELDS {
            self.reject(Rejection::MalformedCommand {
                fields: command.len(),
                expected: COMMAND_FIELDS,
            });
            return;
        }
        let (command_type, id, time) = (command[0], command[1], command[2]);

        // Time must be non-decreasing across accepted commands; a command
        // from the past is dropped entirely.
        if time < self.max_time {
            self.reject(Rejection::OutOfOrderCommand {
                time,
                max_time: self.max_time,
            });
            return;
        }

        match command_type {
            TYPE_CREATE => {
                self.store.create(id, time);
            }
            TYPE_RESET => {
                self.store.reset(id, time);
            }
            other => {
                self.reject(Rejection::UnknownCommandType {
                    command_type: other,
                });
                return;
            }
        }

        // A well-formed, in-order command of a known type advances max_time
        // even when the store refused the operation.
        self.max_time = time;
    }

    fn reject(&self, rejection: Rejection) {
        self.sink.report(&DiagnosticEvent::Rejected(rejection));
    }
}
