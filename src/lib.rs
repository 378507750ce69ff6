// ============================================================================
// tokenledger
// ============================================================================
//
// Evaluates, over an ordered stream of timestamped commands, how many
// identifier-keyed tokens remain active at the latest time seen. Tokens carry
// a sliding expiry window renewed on create and reset; once a window lapses
// the token is permanently retired and its id can never be reused.

pub mod core;
pub mod diag;
pub mod executor;
pub mod facade;
pub mod parser;
pub mod store;

// Re-export the main types for convenience
pub use crate::core::{RawCommand, Rejection, Result, Time, TokenError, TokenId};
pub use diag::{DiagnosticEvent, DiagnosticSink, MemorySink, TracingSink};
pub use executor::CommandExecutor;
pub use facade::{active_token_count, active_token_count_with_sink};
pub use parser::{EvaluationInput, parse_input};
pub use store::TokenStore;
