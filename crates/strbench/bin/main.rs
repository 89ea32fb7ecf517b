use eyre::Result;
use strbench::{run, ConsoleReporter, DEFAULT_ITERATIONS};

fn main() -> Result<()> {
    run(DEFAULT_ITERATIONS, &ConsoleReporter).map_err(|err| eyre::eyre!("{err}"))?;
    Ok(())
}
