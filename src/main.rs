use anyhow::Result;
use clap::Parser;

use s11_extract::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    s11_extract::logging::init(cli.verbose);
    s11_extract::run(cli)
}
