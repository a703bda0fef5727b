use std::io::{self, Write};

use anyhow::{Context, Result};
use contact_list::cli::Cli;
use contact_list::demo;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::builder().filter_level(cli.log_level()).init();

    let capacity = usize::try_from(cli.capacity)
        .with_context(|| format!("Capacity too large: {}", cli.capacity))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, capacity, &cli.searches).context("Demo failed")?;
    out.flush()?;

    Ok(())
}
