//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Recursive and iterative traversals disagree
pub const DATAERR: i32 = 65;

/// Internal software error, e.g. a violated traversal precondition
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;
