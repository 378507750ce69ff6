/// Token identifiers are supplied by the caller, never generated here.
pub type TokenId = u64;

/// Discrete whole time units. The model has no fractional time.
pub type Time = u64;

/// One command row as read from the input. Kept at its raw width so the
/// executor can run the shape check itself.
pub type RawCommand = Vec<u64>;

/// Command type field for a create request.
pub const TYPE_CREATE: u64 = 0;
/// Command type field for a reset request.
pub const TYPE_RESET: u64 = 1;

/// Fields a well-formed command carries: type, id, time.
pub const COMMAND_FIELDS: usize = 3;
