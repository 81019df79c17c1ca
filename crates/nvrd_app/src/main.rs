mod cli;
mod platform;

use clap::{CommandFactory, Parser};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.read.trim().is_empty() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }
    platform::run_app(cli)
}
