//! Command implementations for the CLI

mod assist;
mod play;
mod selfplay;
mod tree;

pub use assist::run_assist;
pub use play::run_play;
pub use selfplay::{SelfPlayStats, print_selfplay_stats, run_selfplay};
pub use tree::run_tree;
