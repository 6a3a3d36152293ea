use anyhow::Result;
use rail2js::{Cli, Config, Driver};
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os());

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level())
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    let driver = Driver::new(Config::from(cli));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = driver.run(&mut out)?;
    out.flush()?;

    tracing::debug!(
        rendered = summary.rendered,
        skipped = summary.skipped,
        failed = summary.failures.len(),
        "done"
    );
    Ok(())
}
