//! Process exit codes returned by [`crate::run`].

/// Command completed.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or an engine error.
pub const ERROR: i32 = 2;

/// Output closed or the user interrupted the command.
pub const INTERRUPTED: i32 = 130;
