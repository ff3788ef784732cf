use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vecgen::{GenOptions, Generator};

fn main() -> Result<()> {
    // Create a generator options instance based on arguments or default values
    let options = GenOptions::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).init();

    // Log the generator options if requested
    if options.verbose {
        println!("vecgen draws pseudorandom stimulus within the input domain of the power datapath under test, computes the expected result with the golden model, and writes both as paired line-oriented files");
        println!("{options}");
    }

    // Generate the whole vector sequence, or abort with a diagnostic and a
    // non-zero exit status if a destination is unwritable
    Generator::new(options).run().context("Error generating vectors")?;

    Ok(())
}
