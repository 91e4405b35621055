// crates/chrmap-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "chrmap-cli")]
#[command(about = "Indexed bitmap to NES PPU table converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a source bitmap into nametable/pattern/attribute tables
    Encode(cmd::encode::EncodeArgs),

    /// Validate a source bitmap without writing anything
    Check(cmd::check::CheckArgs),

    /// Report color usage, tile dedup and artifact stats for a bitmap
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
    }
}
