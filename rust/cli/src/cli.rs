//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Texas Hold'em at the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "No-Limit Texas Hold'em: play, simulate, deal and evaluate hands"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against bots; with --human seat 0 reads actions from stdin
    Play {
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=8))]
        players: u8,
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        human: bool,
        /// Bot type for computer seats
        #[arg(long, default_value = "baseline")]
        bot: String,
    },
    /// Run bot-only hands and report results
    Sim {
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=8))]
        players: u8,
        #[arg(long)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "baseline")]
        bot: String,
        /// One JSON hand outcome per line instead of text
        #[arg(long)]
        json: bool,
    },
    /// Deal one hand face up
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=8))]
        players: u8,
    },
    /// Rank a hand, e.g. --hole "As Ah" --board "Ad Ac Ks 2h 3d"
    Eval {
        #[arg(long)]
        hole: String,
        #[arg(long, default_value = "")]
        board: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
