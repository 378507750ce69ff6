use thiserror::Error;

use super::types::{Time, TokenId};

/// Unrecoverable errors. Only the input-reading layer produces these; the
/// evaluation core itself never fails.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TokenError>;

/// Why a single command was refused. Every rejection is local: it is reported
/// through the diagnostic sink, the command is skipped, and the batch goes on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("expected {expected} command fields, got {fields}")]
    MalformedCommand { fields: usize, expected: usize },

    #[error("command time {time} is before the latest accepted time {max_time}")]
    OutOfOrderCommand { time: Time, max_time: Time },

    #[error("unknown command type {command_type}: expected 0 (create) or 1 (reset)")]
    UnknownCommandType { command_type: u64 },

    #[error("cannot create token {id}: id already exists or has expired")]
    DuplicateOrRetiredId { id: TokenId },

    #[error("cannot reset token {id}: token expired or does not exist")]
    StaleOrUnknownReset { id: TokenId },
}
