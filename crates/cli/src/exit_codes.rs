//! CLI Exit Code Registry
//!
//! Single source of truth for `debugkit` exit codes. Scripts rely on them.
//!
//! | Code | Description                                          |
//! |------|------------------------------------------------------|
//! | 0    | Success                                              |
//! | 1    | Edit rejected (value left unchanged) or other error  |
//! | 2    | Usage error (unknown/hidden setting, bad arguments)  |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error. Also used when an edit is rejected and the stored value
/// stays as it was.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - unknown or hidden setting, malformed arguments.
pub const EXIT_USAGE: u8 = 2;
