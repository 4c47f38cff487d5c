//! Process exit codes.

use crate::error::CliError;

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration or a failed command.
pub const ERROR: i32 = 2;

/// Session cut short, same as a shell's Ctrl+C convention.
pub const INTERRUPTED: i32 = 130;

pub fn for_error(error: &CliError) -> i32 {
    match error {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
