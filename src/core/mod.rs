pub mod error;
pub mod types;

pub use error::{Rejection, Result, TokenError};
pub use types::{COMMAND_FIELDS, RawCommand, TYPE_CREATE, TYPE_RESET, Time, TokenId};
