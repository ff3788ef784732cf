//! Vector generator options

use clap::Parser;
use std::fmt;
use vecgen_core::EXPONENT;

const DEFAULT_COUNT_STR: &str = "1000";
const DEFAULT_EXPONENT_STR: &str = "8";

/// Vector generator options structure
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GenOptions {
    /// Sets the number of stimulus/expected pairs to emit.  Configured with
    /// `-n`.
    #[clap(short = 'n', long, value_name = "COUNT", default_value = DEFAULT_COUNT_STR)]
    pub count: u64,
    /// Sets the exponent applied by the device under test datapath
    #[clap(short, long, value_name = "EXPONENT", default_value = DEFAULT_EXPONENT_STR)]
    pub exponent: u64,
    /// Sets the stimulus file path
    #[clap(short, long, value_name = "INPUT_FILE", default_value = "input.txt")]
    pub input: String,
    /// Sets the expected-result file path
    #[clap(short, long, value_name = "OUTPUT_FILE", default_value = "output.txt")]
    pub output: String,
    /// Sets a fixed sampler seed; seeds from the wall clock when omitted
    #[clap(short, long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Sets the verbose mode
    #[clap(short, long, value_name = "VERBOSE", default_value = "false")]
    pub verbose: bool,
}

impl Default for GenOptions {
    /// Default configuration, matching the command-line defaults
    fn default() -> Self {
        Self {
            count: 1000,
            exponent: EXPONENT,
            input: "input.txt".to_string(),
            output: "output.txt".to_string(),
            seed: None,
            verbose: false,
        }
    }
}

impl fmt::Display for GenOptions {
    /// Formats a string with the configuration information
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "COUNT: {}", self.count)?;
        writeln!(f, "EXPONENT: {}", self.exponent)?;
        writeln!(f, "INPUT: {}", self.input)?;
        writeln!(f, "OUTPUT: {}", self.output)?;
        writeln!(f, "SEED: {:?}", self.seed)?;
        writeln!(f, "VERBOSE: {}", self.verbose)?;
        Ok(())
    }
}
