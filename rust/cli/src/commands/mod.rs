//! Command handler modules for the `hilo` CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by [`crate::run`]
//! - Configuration loaded through [`crate::config`], flags applied on top

mod cfg;
mod chart;
mod ev;
mod rng;
mod shoe;

pub use cfg::handle_cfg_command;
pub use chart::handle_chart_command;
pub use ev::handle_ev_command;
pub use rng::handle_rng_command;
pub use shoe::handle_shoe_command;
