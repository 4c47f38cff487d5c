//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own file and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never opened directly
//! - Errors propagated as [`CliError`](crate::error::CliError)

mod cfg;
mod deal;
mod eval;
mod play;
mod sim;
mod table;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
