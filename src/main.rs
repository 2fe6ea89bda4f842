use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use tznow::cli::Cli;
use tznow::timestamp::LocalTimestamp;

fn main() -> Result<()> {
    let Cli {} = Cli::parse();

    let now = LocalTimestamp::now();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{now}").context("failed to write to stdout")?;

    Ok(())
}
